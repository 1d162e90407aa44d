//! Run configuration
//!
//! The binary runs with [`BenchConfig::default`]. The JSON form uses the same
//! PascalCase keys as a settings file would and is validated while parsing.

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

pub const DEFAULT_NAME_WIDTH: usize = 30;
pub const DEFAULT_PRECISION: usize = 4;
pub const MAX_PRECISION: usize = 9;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BenchConfig {
    /// Column width the candidate name is left-aligned in
    #[serde(deserialize_with = "validate_positive_usize")]
    pub name_width: usize,
    /// Decimal places of the elapsed milliseconds column
    #[serde(deserialize_with = "validate_precision")]
    pub precision: usize,
    /// Overrides every suite's own iteration count when set
    #[serde(
        deserialize_with = "validate_optional_positive_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub iterations: Option<u32>,
    pub show_progress: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            name_width: DEFAULT_NAME_WIDTH,
            precision: DEFAULT_PRECISION,
            iterations: None,
            show_progress: true,
        }
    }
}

impl BenchConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check a configuration built in code rather than parsed
    pub fn validate(&self) -> Result<()> {
        if self.name_width == 0 {
            return Err(BenchError::InvalidConfig("NameWidth must be positive".into()));
        }
        if self.precision > MAX_PRECISION {
            return Err(BenchError::InvalidConfig(format!(
                "Precision must be at most {MAX_PRECISION}"
            )));
        }
        if self.iterations == Some(0) {
            return Err(BenchError::InvalidConfig("Iterations must be positive".into()));
        }
        Ok(())
    }

    /// Iteration count for a suite whose own default is `suite_default`
    pub fn iterations_for(&self, suite_default: u32) -> u32 {
        self.iterations.unwrap_or(suite_default)
    }
}

fn validate_positive_usize<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = usize::deserialize(deserializer)?;
    if value > 0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("Value must be positive"))
    }
}

fn validate_precision<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = usize::deserialize(deserializer)?;
    if value <= MAX_PRECISION {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(format!(
            "Precision must be at most {MAX_PRECISION}"
        )))
    }
}

fn validate_optional_positive_u32<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<u32>::deserialize(deserializer)? {
        Some(0) => Err(serde::de::Error::custom("Value must be positive")),
        other => Ok(other),
    }
}
