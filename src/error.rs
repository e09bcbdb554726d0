//! Application error type.
//!
//! Every failure kind ends up in the same place: a `{"error": ...}` document on
//! stdout and exit code 1. The kinds stay distinct so callers (and tests) can tell
//! a malformed document from a numerically hopeless one.

use thiserror::Error;

/// Exit code for any handled failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

#[derive(Debug, Error)]
pub enum AppError {
    /// The input document could not be read.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid JSON.
    #[error("invalid JSON input: {0}")]
    Parse(String),

    /// The input is JSON but does not have the expected shape.
    #[error("{0}")]
    Schema(String),

    /// Least-squares fit or prediction failed.
    #[error("{0}")]
    Fit(String),
}

impl AppError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    pub fn fit(message: impl Into<String>) -> Self {
        Self::Fit(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Io => Self::Io(err.into()),
            Category::Syntax | Category::Eof => Self::Parse(err.to_string()),
            Category::Data => Self::Schema(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_are_parse_errors() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Parse(_)));
    }

    #[test]
    fn type_errors_are_schema_errors() {
        let err = serde_json::from_str::<Vec<f64>>(r#"["a"]"#).unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Schema(_)));
    }

    #[test]
    fn every_kind_exits_with_one() {
        assert_eq!(AppError::fit("x").exit_code(), 1);
        assert_eq!(AppError::schema("x").exit_code(), 1);
    }
}
