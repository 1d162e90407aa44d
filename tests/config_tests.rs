//! Tests for run configuration parsing and validation.

use euler_bench::core::config::{BenchConfig, DEFAULT_NAME_WIDTH, DEFAULT_PRECISION};
use euler_bench::BenchError;

#[test]
fn test_defaults() {
    let config = BenchConfig::default();
    assert_eq!(config.name_width, DEFAULT_NAME_WIDTH);
    assert_eq!(config.precision, DEFAULT_PRECISION);
    assert_eq!(config.iterations, None);
    assert!(config.show_progress);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_object_is_default() {
    let config = BenchConfig::from_json("{}").unwrap();
    assert_eq!(config, BenchConfig::default());
}

#[test]
fn test_parse_all_fields() {
    let config = BenchConfig::from_json(
        r#"{ "NameWidth": 20, "Precision": 2, "Iterations": 50, "ShowProgress": false }"#,
    )
    .unwrap();

    assert_eq!(config.name_width, 20);
    assert_eq!(config.precision, 2);
    assert_eq!(config.iterations, Some(50));
    assert!(!config.show_progress);
    assert_eq!(config.iterations_for(1000), 50);
}

#[test]
fn test_suite_default_used_without_override() {
    assert_eq!(BenchConfig::default().iterations_for(10), 10);
}

#[test]
fn test_rejects_zero_iterations() {
    let err = BenchConfig::from_json(r#"{ "Iterations": 0 }"#).unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfig(_)));
}

#[test]
fn test_rejects_zero_width_and_large_precision() {
    assert!(BenchConfig::from_json(r#"{ "NameWidth": 0 }"#).is_err());
    assert!(BenchConfig::from_json(r#"{ "Precision": 12 }"#).is_err());
}

#[test]
fn test_rejects_malformed_json() {
    let err = BenchConfig::from_json("{ NameWidth: ").unwrap_err();
    assert!(matches!(err, BenchError::InvalidConfig(_)));
}

#[test]
fn test_validate_catches_values_built_in_code() {
    let config = BenchConfig {
        iterations: Some(0),
        ..BenchConfig::default()
    };
    assert!(matches!(config.validate(), Err(BenchError::InvalidConfig(_))));
}

#[test]
fn test_json_keeps_pascal_case_keys() {
    let json = BenchConfig::default().to_json_pretty().unwrap();
    assert!(json.contains("\"NameWidth\": 30"));
    assert!(json.contains("\"Precision\": 4"));
    assert!(!json.contains("Iterations"));
    assert_eq!(BenchConfig::from_json(&json).unwrap(), BenchConfig::default());
}
