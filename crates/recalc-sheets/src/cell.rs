//! Cell content and per-cell graph state

use ahash::AHashSet;
use recalc_sheets_core::{CellValue, Error, Position, Result, ESCAPE_SIGN, FORMULA_SIGN};
use recalc_sheets_formula::Formula;
use std::cell::RefCell;

/// What a cell holds
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellContent {
    /// No content
    #[default]
    Empty,
    /// Literal text, stored verbatim (escape marker included)
    Literal(String),
    /// Parsed formula
    Formula(Formula),
}

impl CellContent {
    /// Interpret cell text by its leading character
    ///
    /// - `""` is [`CellContent::Empty`]
    /// - `=` followed by at least one character is a formula
    /// - anything else (including a lone `=`) is literal text
    pub fn from_text(text: &str) -> Result<Self> {
        if text.is_empty() {
            Ok(CellContent::Empty)
        } else if text.len() > 1 && text.starts_with(FORMULA_SIGN) {
            Self::formula(text)
        } else {
            Self::literal(text)
        }
    }

    /// Build literal content; the text must not be empty
    pub fn literal<S: Into<String>>(text: S) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::InvalidContent("literal text must not be empty".into()));
        }
        Ok(CellContent::Literal(text))
    }

    /// Build formula content from `=`-prefixed text
    pub fn formula(text: &str) -> Result<Self> {
        let expression = text.strip_prefix(FORMULA_SIGN).ok_or_else(|| {
            Error::InvalidContent(format!("formula must start with '{}'", FORMULA_SIGN))
        })?;
        Ok(CellContent::Formula(Formula::parse(expression)?))
    }

    /// Text as stored: literals verbatim, formulas as `=` plus the canonical expression
    pub fn text(&self) -> String {
        match self {
            CellContent::Empty => String::new(),
            CellContent::Literal(text) => text.clone(),
            CellContent::Formula(formula) => format!("{}{}", FORMULA_SIGN, formula.expression()),
        }
    }

    /// Positions this content reads
    pub fn referenced_cells(&self) -> &[Position] {
        match self {
            CellContent::Formula(formula) => formula.referenced_cells(),
            CellContent::Empty | CellContent::Literal(_) => &[],
        }
    }

    /// Value of non-formula content; `None` for formulas
    pub(crate) fn static_value(&self) -> Option<CellValue> {
        match self {
            CellContent::Empty => Some(CellValue::default()),
            CellContent::Literal(text) => {
                let shown = text.strip_prefix(ESCAPE_SIGN).unwrap_or(text);
                Some(CellValue::string(shown))
            }
            CellContent::Formula(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellContent::Empty)
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, CellContent::Formula(_))
    }
}

/// One sheet cell: content, memoized value and dependency edges
///
/// Edges are positions in the owning sheet. They are maintained by the
/// sheet so that `depends_on` and `dependents` stay mutual inverses.
#[derive(Debug, Default)]
pub struct Cell {
    pub(crate) content: CellContent,
    pub(crate) cache: RefCell<Option<CellValue>>,
    pub(crate) depends_on: AHashSet<Position>,
    pub(crate) dependents: AHashSet<Position>,
}

impl Cell {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &CellContent {
        &self.content
    }

    pub fn text(&self) -> String {
        self.content.text()
    }

    pub fn referenced_cells(&self) -> &[Position] {
        self.content.referenced_cells()
    }

    /// Cells this cell's formula reads
    pub fn depends_on(&self) -> impl Iterator<Item = Position> + '_ {
        self.depends_on.iter().copied()
    }

    /// Cells whose formulas read this cell
    pub fn dependents(&self) -> impl Iterator<Item = Position> + '_ {
        self.dependents.iter().copied()
    }

    /// Whether any formula reads this cell
    pub fn is_referenced(&self) -> bool {
        !self.dependents.is_empty()
    }

    /// Whether a memoized formula result is present
    pub fn has_cached_value(&self) -> bool {
        self.cache.borrow().is_some()
    }

    /// Drop this cell's memoized value; the next read recomputes it
    pub fn invalidate_cache(&mut self) {
        self.cache.get_mut().take();
    }

    /// Reset content to Empty; edges are left to the sheet
    pub(crate) fn clear(&mut self) {
        self.content = CellContent::Empty;
        self.invalidate_cache();
    }

    pub(crate) fn cached_value(&self) -> Option<CellValue> {
        self.cache.borrow().clone()
    }

    pub(crate) fn store_value(&self, value: CellValue) {
        *self.cache.borrow_mut() = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_content_from_text() {
        assert_eq!(CellContent::from_text("").unwrap(), CellContent::Empty);
        assert_eq!(
            CellContent::from_text("hello").unwrap(),
            CellContent::Literal("hello".into())
        );
        assert_eq!(
            CellContent::from_text("=").unwrap(),
            CellContent::Literal("=".into())
        );
        assert!(CellContent::from_text("=1+2").unwrap().is_formula());
        assert!(matches!(
            CellContent::from_text("=1+"),
            Err(Error::FormulaParse(_))
        ));
    }

    #[test]
    fn test_constructors_reject_invalid_text() {
        assert!(matches!(
            CellContent::literal(""),
            Err(Error::InvalidContent(_))
        ));
        assert!(matches!(
            CellContent::formula("1+2"),
            Err(Error::InvalidContent(_))
        ));
        assert!(matches!(
            CellContent::formula("="),
            Err(Error::FormulaParse(_))
        ));
    }

    #[test]
    fn test_content_text() {
        assert_eq!(CellContent::Empty.text(), "");
        assert_eq!(CellContent::from_text("'5").unwrap().text(), "'5");
        assert_eq!(CellContent::from_text("= 1 + A1").unwrap().text(), "=1+A1");
    }

    #[test]
    fn test_static_value_strips_escape_sign() {
        assert_eq!(
            CellContent::from_text("'5").unwrap().static_value(),
            Some(CellValue::string("5"))
        );
        assert_eq!(
            CellContent::from_text("''").unwrap().static_value(),
            Some(CellValue::string("'"))
        );
        assert_eq!(
            CellContent::from_text("'").unwrap().static_value(),
            Some(CellValue::string(""))
        );
        assert_eq!(CellContent::Empty.static_value(), Some(CellValue::default()));
        assert_eq!(CellContent::from_text("=1").unwrap().static_value(), None);
    }

    #[test]
    fn test_referenced_cells() {
        let content = CellContent::from_text("=B1+A1").unwrap();
        assert_eq!(
            content.referenced_cells(),
            &[Position::new(0, 0), Position::new(0, 1)]
        );
        assert!(CellContent::from_text("B1").unwrap().referenced_cells().is_empty());
    }

    #[test]
    fn test_cell_cache_lifecycle() {
        let mut cell = Cell::new();
        assert!(!cell.has_cached_value());
        cell.store_value(CellValue::Number(1.0));
        assert!(cell.has_cached_value());
        cell.invalidate_cache();
        assert!(!cell.has_cached_value());
        cell.invalidate_cache();
        assert!(!cell.has_cached_value());
    }
}
