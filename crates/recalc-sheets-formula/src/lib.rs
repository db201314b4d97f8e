//! # recalc-sheets-formula
//!
//! Formula parser and evaluator for recalc-sheets.
//!
//! This crate provides:
//! - Formula parsing (text → AST)
//! - Canonical printing (AST → text)
//! - Formula evaluation against a [`CellResolver`]
//! - Referenced-cell analysis for dependency tracking
//!
//! ## Example
//!
//! ```rust
//! use recalc_sheets_formula::{Formula, FormulaValue, NoCells};
//!
//! let formula = Formula::parse("(1 + 2) * 3").unwrap();
//! assert_eq!(formula.expression(), "(1+2)*3");
//! assert_eq!(formula.evaluate(&NoCells), FormulaValue::Number(9.0));
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod formula;
pub mod parser;

pub use ast::{BinaryOperator, FormulaExpr, UnaryOperator};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, CellResolver, FormulaValue, NoCells};
pub use formula::Formula;
pub use parser::parse_formula;
