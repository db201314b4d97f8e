//! Parsed formula handle used by sheet cells

use crate::ast::FormulaExpr;
use crate::error::FormulaResult;
use crate::evaluator::{evaluate, CellResolver, FormulaValue};
use crate::parser::parse_formula;
use recalc_sheets_core::Position;

/// A parsed formula expression
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    expr: FormulaExpr,
    referenced: Vec<Position>,
}

impl Formula {
    /// Parse an expression (the formula text without its leading `=`)
    pub fn parse(expression: &str) -> FormulaResult<Self> {
        let expr = parse_formula(expression)?;

        let mut referenced = Vec::new();
        expr.collect_references(&mut referenced);
        referenced.retain(Position::is_valid);
        referenced.sort_unstable();
        referenced.dedup();

        log::trace!("parsed formula '{}' ({} references)", expression, referenced.len());
        Ok(Self { expr, referenced })
    }

    /// Evaluate against the given resolver
    pub fn evaluate(&self, resolver: &dyn CellResolver) -> FormulaValue {
        evaluate(&self.expr, resolver)
    }

    /// Valid positions the formula reads, sorted and without duplicates
    pub fn referenced_cells(&self) -> &[Position] {
        &self.referenced
    }

    /// Canonical expression text (without the leading `=`)
    pub fn expression(&self) -> String {
        self.expr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::NoCells;
    use pretty_assertions::assert_eq;
    use recalc_sheets_core::CellError;

    #[test]
    fn test_referenced_cells_sorted_unique_valid() {
        let formula = Formula::parse("C1+A2+A1+C1+ZZZZ1").unwrap();
        assert_eq!(
            formula.referenced_cells(),
            &[Position::new(0, 0), Position::new(0, 2), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_literal_formula_has_no_references() {
        let formula = Formula::parse("1+2").unwrap();
        assert!(formula.referenced_cells().is_empty());
        assert_eq!(formula.evaluate(&NoCells), FormulaValue::Number(3.0));
    }

    #[test]
    fn test_expression_is_canonical() {
        let formula = Formula::parse(" ( A1 + B1 ) * 2 ").unwrap();
        assert_eq!(formula.expression(), "(A1+B1)*2");
        let reparsed = Formula::parse(&formula.expression()).unwrap();
        assert_eq!(reparsed, formula);
    }

    #[test]
    fn test_reparsed_expression_keeps_value() {
        let formula = Formula::parse("1e308*(10*0.1)").unwrap();
        let reparsed = Formula::parse(&formula.expression()).unwrap();

        assert_eq!(formula.evaluate(&NoCells), FormulaValue::Number(1e308));
        assert_eq!(reparsed.evaluate(&NoCells), formula.evaluate(&NoCells));
    }

    #[test]
    fn test_out_of_range_reference_evaluates_to_ref_error() {
        let formula = Formula::parse("ZZZZ1").unwrap();
        assert_eq!(formula.evaluate(&NoCells), FormulaValue::Error(CellError::Ref));
        assert_eq!(formula.expression(), "ZZZZ1");
    }
}
