//! # recalc-sheets
//!
//! A small spreadsheet recalculation engine.
//!
//! A [`Sheet`] maps positions to cells holding literal text or formulas over
//! numbers, cell references and the four arithmetic operators. Dependencies
//! between cells are tracked as mutual edges and kept acyclic; any edit that
//! would close a cycle is rejected before it changes anything.
//!
//! ## Features
//!
//! - Cycle detection ahead of every formula edit
//! - Lazy evaluation with per-cell memoization
//! - Transitive invalidation of dependents on edit or clear
//! - Evaluation errors (`#REF!`, `#VALUE!`, `#DIV/0!`, `#NUM!`) as values
//! - Tab-separated printing of values or stored texts
//!
//! ## Example
//!
//! ```rust
//! use recalc_sheets::prelude::*;
//!
//! let mut sheet = Sheet::new();
//! sheet.set("A1", "2").unwrap();
//! sheet.set("B1", "=A1*(3+1)").unwrap();
//! assert_eq!(sheet.value("B1").unwrap(), CellValue::Number(8.0));
//!
//! // Closing a loop is refused and nothing changes
//! let err = sheet.set("A1", "=B1").unwrap_err();
//! assert!(matches!(err, Error::CircularDependency(_)));
//! assert_eq!(sheet.text("A1").unwrap(), "2");
//!
//! assert_eq!(sheet.values_to_string(), "2\t8\n");
//! ```

pub mod cell;
mod dependency;
pub mod prelude;
mod print;
pub mod settings;
pub mod sheet;

pub use cell::{Cell, CellContent};
pub use settings::{ClearPolicy, SheetSettings};
pub use sheet::{CellView, EvaluationStats, Sheet};

// Re-export core types
pub use recalc_sheets_core::{
    CellError, CellValue, Error, Position, Result, Size, ESCAPE_SIGN, FORMULA_SIGN, MAX_COLS,
    MAX_ROWS,
};

// Re-export formula types
pub use recalc_sheets_formula::{Formula, FormulaExpr};
