//! Error types for recalc-sheets-core

use crate::position::Position;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Structural failures of sheet operations.
///
/// Evaluation faults (`#DIV/0!` and friends) are not errors; they are
/// [`CellValue::Error`](crate::CellValue::Error) values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Coordinate outside the sheet
    #[error("Invalid position: row {}, col {}", .0.row, .0.col)]
    InvalidPosition(Position),

    /// Malformed A1 address text
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Malformed formula text
    #[error("Formula parse error: {0}")]
    FormulaParse(String),

    /// The edit would make the cell depend on itself
    #[error("Circular dependency through cell {0}")]
    CircularDependency(Position),

    /// The cell is still referenced by other formulas
    #[error("Cell {0} is referenced by other cells")]
    CellReferenced(Position),

    /// Content object built from text it cannot represent
    #[error("Invalid cell content: {0}")]
    InvalidContent(String),
}
