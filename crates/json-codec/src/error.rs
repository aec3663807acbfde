//! JSON codec error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid JSON at byte {0}")]
    Invalid(usize),
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("trailing data at byte {0}")]
    TrailingData(usize),
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("number {0} has no JSON representation")]
    UnsupportedNumber(f64),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
