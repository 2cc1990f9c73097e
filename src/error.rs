//! Error types for the calculator boundary
//!
//! The policy engine itself is total over validated input; everything here
//! is raised while parsing, loading or serializing around it.

use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, CalculatorError>;

#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Birth date is not a `YYYY-MM` string with a 4-digit year and a month in 01-12
    #[error("invalid birth date format: {0:?} (expected YYYY-MM, e.g. 1980-05)")]
    InvalidDateFormat(String),

    /// Category selector outside `male`, `female55`, `female50`
    #[error("unknown worker category: {0:?} (expected male, female55 or female50)")]
    UnknownCategory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalculatorError {
    /// Whether the error comes from caller input rather than the environment
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalculatorError::InvalidDateFormat(_) | CalculatorError::UnknownCategory(_)
        )
    }

    /// Message shown to the end user of the form
    pub fn user_message(&self) -> String {
        match self {
            CalculatorError::InvalidDateFormat(_) => {
                "请输入有效的出生年月（例如：1980-05）".to_string()
            }
            CalculatorError::UnknownCategory(selector) => {
                format!("未知的人员类型: {}", selector)
            }
            other => other.to_string(),
        }
    }
}
