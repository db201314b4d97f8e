//! Formula Abstract Syntax Tree types

use recalc_sheets_core::Position;
use std::fmt;

/// Formula expression AST
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaExpr {
    /// Numeric literal
    Number(f64),

    /// Single cell reference; may lie outside the sheet limits
    CellRef(Position),

    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<FormulaExpr>,
        right: Box<FormulaExpr>,
    },

    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<FormulaExpr>,
    },
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Negate,
}

impl UnaryOperator {
    pub fn symbol(self) -> char {
        match self {
            UnaryOperator::Plus => '+',
            UnaryOperator::Negate => '-',
        }
    }
}

const UNARY_PRECEDENCE: u8 = 3;
const ATOM_PRECEDENCE: u8 = 4;

impl FormulaExpr {
    fn precedence(&self) -> u8 {
        match self {
            FormulaExpr::Number(_) | FormulaExpr::CellRef(_) => ATOM_PRECEDENCE,
            FormulaExpr::UnaryOp { .. } => UNARY_PRECEDENCE,
            FormulaExpr::BinaryOp { op, .. } => op.precedence(),
        }
    }

    /// Collect every cell reference in left-to-right order, duplicates included
    pub fn collect_references(&self, out: &mut Vec<Position>) {
        match self {
            FormulaExpr::Number(_) => {}
            FormulaExpr::CellRef(pos) => out.push(*pos),
            FormulaExpr::UnaryOp { operand, .. } => operand.collect_references(out),
            FormulaExpr::BinaryOp { left, right, .. } => {
                left.collect_references(out);
                right.collect_references(out);
            }
        }
    }
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &FormulaExpr,
    parenthesize: bool,
) -> fmt::Result {
    if parenthesize {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

/// Canonical form: no whitespace, only the parentheses the tree needs
impl fmt::Display for FormulaExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaExpr::Number(n) => write!(f, "{}", n),
            FormulaExpr::CellRef(pos) => write!(
                f,
                "{}{}",
                Position::column_to_letters(pos.col),
                pos.row as i64 + 1
            ),
            FormulaExpr::UnaryOp { op, operand } => {
                write!(f, "{}", op.symbol())?;
                write_operand(f, operand, operand.precedence() < UNARY_PRECEDENCE)
            }
            FormulaExpr::BinaryOp { op, left, right } => {
                let prec = op.precedence();
                write_operand(f, left, left.precedence() < prec)?;
                write!(f, "{}", op.symbol())?;

                // Equal-precedence right operands keep their grouping
                write_operand(f, right, right.precedence() <= prec)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_formula;
    use pretty_assertions::assert_eq;

    fn canonical(text: &str) -> String {
        parse_formula(text).unwrap().to_string()
    }

    #[test]
    fn test_canonical_drops_redundant_parentheses() {
        assert_eq!(canonical("(1)"), "1");
        assert_eq!(canonical("((A1))+(B2)"), "A1+B2");
        assert_eq!(canonical("(1+2)+3"), "1+2+3");
        assert_eq!(canonical("(1*2)+3"), "1*2+3");
        assert_eq!(canonical("1+2*3"), "1+2*3");
        assert_eq!(canonical("(1-2)-3"), "1-2-3");
    }

    #[test]
    fn test_canonical_keeps_required_parentheses() {
        assert_eq!(canonical("1-(2+3)"), "1-(2+3)");
        assert_eq!(canonical("1-(2-3)"), "1-(2-3)");
        assert_eq!(canonical("1/(2*3)"), "1/(2*3)");
        assert_eq!(canonical("1/(2/3)"), "1/(2/3)");
        assert_eq!(canonical("1+(2+3)"), "1+(2+3)");
        assert_eq!(canonical("1+(2-3)"), "1+(2-3)");
        assert_eq!(canonical("1*(2*3)"), "1*(2*3)");
        assert_eq!(canonical("2*(3/4)"), "2*(3/4)");
        assert_eq!(canonical("(1+2)*3"), "(1+2)*3");
        assert_eq!(canonical("3*(1-2)"), "3*(1-2)");
        assert_eq!(canonical("-(1+2)"), "-(1+2)");
        assert_eq!(canonical("-(2*3)"), "-(2*3)");
    }

    #[test]
    fn test_canonical_strips_whitespace() {
        assert_eq!(canonical(" 1 +  A1 * 2 "), "1+A1*2");
        assert_eq!(canonical("- -5"), "--5");
        assert_eq!(canonical("+A1"), "+A1");
    }

    #[test]
    fn test_canonical_numbers() {
        assert_eq!(canonical("1.50"), "1.5");
        assert_eq!(canonical(".5"), "0.5");
        assert_eq!(canonical("1e3"), "1000");
    }

    #[test]
    fn test_collect_references() {
        let expr = parse_formula("B2+A1*B2").unwrap();
        let mut refs = Vec::new();
        expr.collect_references(&mut refs);
        assert_eq!(
            refs,
            vec![Position::new(1, 1), Position::new(0, 0), Position::new(1, 1)]
        );
    }
}
