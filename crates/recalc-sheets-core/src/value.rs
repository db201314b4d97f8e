//! Cell value types

use std::fmt;

/// The evaluated value of a cell
///
/// Empty cells and literal text evaluate to [`CellValue::String`];
/// formulas evaluate to a number or an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Text value (empty for empty cells)
    String(String),

    /// Numeric value
    Number(f64),

    /// Evaluation error (#REF!, #VALUE!, ...)
    Error(CellError),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the error if this is one
    pub fn as_error(&self) -> Option<CellError> {
        match self {
            CellValue::Error(e) => Some(*e),
            _ => None,
        }
    }

    /// Check if the value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, CellValue::Error(_))
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::String(String::new())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::string(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<CellError> for CellValue {
    fn from(e: CellError) -> Self {
        CellValue::Error(e)
    }
}

/// Formula evaluation errors
///
/// These are values: they are cached like any other result and poison
/// every formula that reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// #REF! - Reference to a position outside the sheet
    Ref,
    /// #VALUE! - Operand text is not a number
    Value,
    /// #DIV/0! - Division by zero
    Div0,
    /// #NUM! - Result is not a finite number
    Num,
}

impl CellError {
    /// Get the display string for this error
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::Ref => "#REF!",
            CellError::Value => "#VALUE!",
            CellError::Div0 => "#DIV/0!",
            CellError::Num => "#NUM!",
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Number(8.0).to_string(), "8");
        assert_eq!(CellValue::Number(0.5).to_string(), "0.5");
        assert_eq!(CellValue::Number(-3.25).to_string(), "-3.25");
        assert_eq!(CellValue::string("text").to_string(), "text");
        assert_eq!(CellValue::Error(CellError::Div0).to_string(), "#DIV/0!");
        assert_eq!(CellValue::default().to_string(), "");
    }

    #[test]
    fn test_cell_value_accessors() {
        assert_eq!(CellValue::Number(42.0).as_number(), Some(42.0));
        assert_eq!(CellValue::string("42").as_number(), None);
        assert_eq!(CellValue::string("hello").as_string(), Some("hello"));
        assert_eq!(CellValue::Error(CellError::Ref).as_error(), Some(CellError::Ref));
        assert!(CellValue::Error(CellError::Value).is_error());
    }

    #[test]
    fn test_cell_error_tokens() {
        assert_eq!(CellError::Ref.to_string(), "#REF!");
        assert_eq!(CellError::Value.to_string(), "#VALUE!");
        assert_eq!(CellError::Num.as_str(), "#NUM!");
    }
}
