//! Formula parser
//!
//! A recursive descent parser for arithmetic formulas with proper operator precedence.

use crate::ast::{BinaryOperator, FormulaExpr, UnaryOperator};
use crate::error::{FormulaError, FormulaResult};
use recalc_sheets_core::Position;

/// Parse a formula expression (without the leading `=`) into an AST
///
/// # Example
/// ```rust
/// use recalc_sheets_formula::parse_formula;
///
/// let ast = parse_formula("1+2").unwrap();
/// let ast = parse_formula("A1*(B2-3)").unwrap();
/// assert!(parse_formula("1+").is_err());
/// ```
pub fn parse_formula(expression: &str) -> FormulaResult<FormulaExpr> {
    let mut parser = FormulaParser::new(expression)?;
    let expr = parser.parse_expression()?;

    // Make sure we consumed all input
    if !matches!(parser.current_token(), Token::Eof) {
        return Err(FormulaError::Parse(format!(
            "Unexpected {:?} after expression",
            parser.current_token()
        )));
    }

    Ok(expr)
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    CellRef(Position),

    Plus,
    Minus,
    Star,
    Slash,

    LeftParen,
    RightParen,

    Eof,
}

/// Formula parser
struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
    current_token: Token,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> FormulaResult<Self> {
        let mut parser = Self {
            input,
            pos: 0,
            current_token: Token::Eof,
        };
        parser.advance_token()?;
        Ok(parser)
    }

    // === Token scanning ===

    fn advance_token(&mut self) -> FormulaResult<()> {
        self.current_token = self.scan_token()?;
        Ok(())
    }

    fn scan_token(&mut self) -> FormulaResult<Token> {
        self.skip_whitespace();

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(Token::Eof),
        };

        let single = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ => None,
        };
        if let Some(token) = single {
            self.advance();
            return Ok(token);
        }

        if c.is_ascii_digit() || (c == '.' && self.peek_char_at(1).map_or(false, |c| c.is_ascii_digit())) {
            return self.scan_number();
        }

        if c.is_ascii_uppercase() {
            return self.scan_cell_reference();
        }

        Err(FormulaError::Parse(format!(
            "Unexpected character '{}' at offset {}",
            c, self.pos
        )))
    }

    fn scan_number(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        // Integer part
        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal part
        if self.peek_char() == Some('.') {
            self.advance();
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent part
        if self.peek_char().map_or(false, |c| c == 'e' || c == 'E') {
            self.advance();
            if self.peek_char().map_or(false, |c| c == '+' || c == '-') {
                self.advance();
            }
            while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let num_str = &self.input[start..self.pos];
        let num: f64 = num_str
            .parse()
            .map_err(|_| FormulaError::Parse(format!("Invalid number '{}'", num_str)))?;

        if !num.is_finite() {
            return Err(FormulaError::Parse(format!("Number out of range '{}'", num_str)));
        }

        Ok(Token::Number(num))
    }

    /// Scan `LETTERS DIGITS`; the coordinate may lie outside the sheet
    fn scan_cell_reference(&mut self) -> FormulaResult<Token> {
        let start = self.pos;

        while self.peek_char().map_or(false, |c| c.is_ascii_uppercase()) {
            self.advance();
        }
        let letters_end = self.pos;

        while self.peek_char().map_or(false, |c| c.is_ascii_digit()) {
            self.advance();
        }

        let letters = &self.input[start..letters_end];
        let digits = &self.input[letters_end..self.pos];

        if digits.is_empty() {
            return Err(FormulaError::Parse(format!(
                "Expected row number after '{}'",
                letters
            )));
        }

        let out_of_range = || {
            FormulaError::Parse(format!(
                "Cell reference '{}{}' is too large",
                letters, digits
            ))
        };

        let mut col: i64 = 0;
        for c in letters.bytes() {
            col = col * 26 + i64::from(c - b'A' + 1);
            if col > i64::from(i32::MAX) {
                return Err(out_of_range());
            }
        }

        let row: i64 = digits.parse().map_err(|_| out_of_range())?;
        if row > i64::from(i32::MAX) {
            return Err(out_of_range());
        }

        Ok(Token::CellRef(Position::new(row as i32 - 1, col as i32 - 1)))
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_char_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }

    fn current_token(&self) -> &Token {
        &self.current_token
    }

    fn consume(&mut self) -> FormulaResult<Token> {
        let token = std::mem::replace(&mut self.current_token, Token::Eof);
        self.advance_token()?;
        Ok(token)
    }

    fn expect(&mut self, expected: &Token) -> FormulaResult<()> {
        if self.current_token() == expected {
            self.consume()?;
            Ok(())
        } else {
            Err(FormulaError::Parse(format!(
                "Expected {:?}, got {:?}",
                expected,
                self.current_token()
            )))
        }
    }

    // === Expression parsing with precedence ===
    // Precedence (lowest to highest):
    // 1. Addition/Subtraction: +, -
    // 2. Multiplication/Division: *, /
    // 3. Unary: +, -
    // 4. Primary: numbers, references, parentheses

    fn parse_expression(&mut self) -> FormulaResult<FormulaExpr> {
        self.parse_additive()
    }

    fn parse_additive(&mut self) -> FormulaResult<FormulaExpr> {
        let mut left = self.parse_multiplicative()?;

        loop {
            let op = match self.current_token() {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_multiplicative()?;
            left = FormulaExpr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> FormulaResult<FormulaExpr> {
        let mut left = self.parse_unary()?;

        loop {
            let op = match self.current_token() {
                Token::Star => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.consume()?;
            let right = self.parse_unary()?;
            left = FormulaExpr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> FormulaResult<FormulaExpr> {
        let op = match self.current_token() {
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            _ => return self.parse_primary(),
        };

        self.consume()?;
        let operand = self.parse_unary()?;
        Ok(FormulaExpr::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_primary(&mut self) -> FormulaResult<FormulaExpr> {
        match self.current_token().clone() {
            Token::Number(n) => {
                self.consume()?;
                Ok(FormulaExpr::Number(n))
            }

            Token::CellRef(pos) => {
                self.consume()?;
                Ok(FormulaExpr::CellRef(pos))
            }

            Token::LeftParen => {
                self.consume()?;
                let expr = self.parse_expression()?;
                self.expect(&Token::RightParen)?;
                Ok(expr)
            }

            token => Err(FormulaError::Parse(format!("Unexpected token: {:?}", token))),
        }
    }
}
