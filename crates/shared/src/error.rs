use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MalformedRecord,
    Display,
}

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("malformed record at index {index}: {message}")]
    MalformedRecord { index: usize, message: String },
    #[error("records must be a JSON array: {0}")]
    MalformedRecordList(String),
    #[error("display target '{target}' could not be written: {source}")]
    Display {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl ShowcaseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedRecord { .. } | Self::MalformedRecordList(_) => {
                ErrorCode::MalformedRecord
            }
            Self::Display { .. } => ErrorCode::Display,
        }
    }
}

/// Serializable summary of a failure, for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorReport {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<&ShowcaseError> for ErrorReport {
    fn from(value: &ShowcaseError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
