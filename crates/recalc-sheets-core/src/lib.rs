//! # recalc-sheets-core
//!
//! Core data types shared by the recalc-sheets crates:
//! - [`Position`] and [`Size`] - Cell coordinates and printable extents
//! - [`CellValue`] and [`CellError`] - Evaluated cell values
//! - [`Error`] - Structural failures of mutating operations
//!
//! ## Example
//!
//! ```rust
//! use recalc_sheets_core::Position;
//!
//! let pos = Position::parse("B3").unwrap();
//! assert_eq!(pos, Position::new(2, 1));
//! assert_eq!(pos.to_string(), "B3");
//! ```

pub mod error;
pub mod position;
pub mod value;

pub use error::{Error, Result};
pub use position::{Position, Size};
pub use value::{CellError, CellValue};

/// Number of addressable rows in a sheet
pub const MAX_ROWS: i32 = 16_384;

/// Number of addressable columns in a sheet
pub const MAX_COLS: i32 = 16_384;

/// Leading character that turns cell text into a formula
pub const FORMULA_SIGN: char = '=';

/// Leading character that forces cell text to be read as a literal
pub const ESCAPE_SIGN: char = '\'';
