//! Formula evaluator
//!
//! Evaluates formula ASTs to produce values.

use crate::ast::{BinaryOperator, FormulaExpr, UnaryOperator};
use recalc_sheets_core::{CellError, CellValue, Position};

/// Result of evaluating a formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormulaValue {
    Number(f64),
    Error(CellError),
}

impl From<FormulaValue> for CellValue {
    fn from(value: FormulaValue) -> Self {
        match value {
            FormulaValue::Number(n) => CellValue::Number(n),
            FormulaValue::Error(e) => CellValue::Error(e),
        }
    }
}

/// Source of cell values during evaluation
pub trait CellResolver {
    /// Current value of the cell at `pos`, or `None` when no cell exists there
    fn resolve(&self, pos: Position) -> Option<CellValue>;
}

/// Resolver for evaluating formulas without a sheet; every cell is absent
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCells;

impl CellResolver for NoCells {
    fn resolve(&self, _pos: Position) -> Option<CellValue> {
        None
    }
}

/// Convert a referenced cell's value into an arithmetic operand
fn operand_from_cell(value: Option<CellValue>) -> Result<f64, CellError> {
    match value {
        None => Ok(0.0),
        Some(CellValue::Number(n)) => Ok(n),
        Some(CellValue::Error(e)) => Err(e),
        Some(CellValue::String(s)) if s.is_empty() => Ok(0.0),
        Some(CellValue::String(s)) => match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(CellError::Value),
        },
    }
}

/// Evaluate a formula expression
pub fn evaluate(expr: &FormulaExpr, resolver: &dyn CellResolver) -> FormulaValue {
    match eval_number(expr, resolver) {
        Ok(n) => FormulaValue::Number(n),
        Err(e) => FormulaValue::Error(e),
    }
}

fn eval_number(expr: &FormulaExpr, resolver: &dyn CellResolver) -> Result<f64, CellError> {
    match expr {
        FormulaExpr::Number(n) => Ok(*n),

        FormulaExpr::CellRef(pos) => {
            if !pos.is_valid() {
                return Err(CellError::Ref);
            }
            operand_from_cell(resolver.resolve(*pos))
        }

        FormulaExpr::UnaryOp { op, operand } => {
            let n = eval_number(operand, resolver)?;
            Ok(match op {
                UnaryOperator::Plus => n,
                UnaryOperator::Negate => -n,
            })
        }

        FormulaExpr::BinaryOp { op, left, right } => {
            // Operands are evaluated left to right; the first error wins
            let l = eval_number(left, resolver)?;
            let r = eval_number(right, resolver)?;

            let result = match op {
                BinaryOperator::Add => l + r,
                BinaryOperator::Subtract => l - r,
                BinaryOperator::Multiply => l * r,
                BinaryOperator::Divide => {
                    if r == 0.0 {
                        return Err(CellError::Div0);
                    }
                    l / r
                }
            };

            if result.is_finite() {
                Ok(result)
            } else {
                Err(CellError::Num)
            }
        }
    }
}
