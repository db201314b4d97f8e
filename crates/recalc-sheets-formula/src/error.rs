//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while parsing a formula
///
/// Evaluation never fails; faults surface as
/// [`FormulaValue::Error`](crate::FormulaValue::Error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Formula parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<FormulaError> for recalc_sheets_core::Error {
    fn from(err: FormulaError) -> Self {
        match err {
            FormulaError::Parse(msg) => recalc_sheets_core::Error::FormulaParse(msg),
        }
    }
}
