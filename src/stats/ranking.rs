//! Ordering and consistency checks over a suite's measurements

use crate::stats::measurement::Measurement;

/// Sort measurements fastest-first.
///
/// The sort is stable: candidates with identical timings keep the order in
/// which they were measured.
pub fn rank_by_elapsed(measurements: &mut [Measurement]) {
    measurements.sort_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms));
}

/// Names of the candidates whose result differs from the first measurement
pub fn disagreeing_results(measurements: &[Measurement]) -> Vec<&str> {
    let Some(reference) = measurements.first() else {
        return Vec::new();
    };
    measurements
        .iter()
        .filter(|m| m.result != reference.result)
        .map(|m| m.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_disagreement() {
        assert!(disagreeing_results(&[]).is_empty());
    }

    #[test]
    fn reports_only_the_odd_one_out() {
        let measurements = vec![
            Measurement::new("a", 7, 1.0),
            Measurement::new("b", 7, 2.0),
            Measurement::new("c", 8, 3.0),
        ];
        assert_eq!(disagreeing_results(&measurements), vec!["c"]);
    }
}
