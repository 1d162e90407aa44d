use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Progress bar template error: {0}")]
    Progress(#[from] indicatif::style::TemplateError),
}

impl From<serde_json::Error> for BenchError {
    fn from(e: serde_json::Error) -> Self {
        BenchError::InvalidConfig(e.to_string())
    }
}
