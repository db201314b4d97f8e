//! Cell position and sheet size types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell position (0-based row and column)
///
/// Positions are plain coordinates. Any pair can be constructed, and
/// [`Position::is_valid`] tells whether it lies inside the sheet limits.
/// Every sheet entry point rejects invalid positions before touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index (0-based internally, 1-based in display)
    pub row: i32,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: i32,
}

impl Position {
    /// The invalid sentinel
    pub const NONE: Position = Position { row: -1, col: -1 };

    /// Create a new position
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check whether the position lies inside the sheet limits
    pub fn is_valid(&self) -> bool {
        (0..MAX_ROWS).contains(&self.row) && (0..MAX_COLS).contains(&self.col)
    }

    /// Parse a position from A1-style notation
    ///
    /// Column letters must be uppercase.
    ///
    /// # Examples
    /// ```
    /// use recalc_sheets_core::Position;
    ///
    /// let pos = Position::parse("A1").unwrap();
    /// assert_eq!(pos, Position::new(0, 0));
    ///
    /// let pos = Position::parse("AB12").unwrap();
    /// assert_eq!(pos, Position::new(11, 27));
    ///
    /// assert!(Position::parse("a1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let letters_end = s
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(s.len());

        if letters_end == 0 {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[..letters_end])?;

        let row_str = &s[letters_end..];
        if row_str.is_empty() || !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!("invalid row number in '{}'", s)));
        }

        let row: i64 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("row number too large in '{}'", s)))?;

        // Rows are 1-based in text, 0-based internally
        if row < 1 || row > MAX_ROWS as i64 {
            return Err(Error::InvalidAddress(format!(
                "row number out of range in '{}'",
                s
            )));
        }

        Ok(Self::new(row as i32 - 1, col))
    }

    /// Convert a column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: i32) -> String {
        let mut result = String::new();
        let mut n = col as i64 + 1;

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to an index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<i32> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: i64 = 0;
        for c in letters.chars() {
            if !c.is_ascii_uppercase() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c as i64 - 'A' as i64 + 1);
            if col > MAX_COLS as i64 {
                return Err(Error::InvalidAddress(format!(
                    "column '{}' out of range",
                    letters
                )));
            }
        }

        Ok(col as i32 - 1)
    }

    /// Format as an A1-style string (empty for invalid positions)
    pub fn to_a1_string(&self) -> String {
        if !self.is_valid() {
            return String::new();
        }
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Printable extent of a sheet in rows and columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub rows: i32,
    pub cols: i32,
}

impl Size {
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }
}
