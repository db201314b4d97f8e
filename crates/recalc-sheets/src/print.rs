//! Tab-separated rendering of a sheet's printable area

use crate::cell::Cell;
use crate::sheet::Sheet;
use recalc_sheets_core::Position;
use std::fmt;
use std::io;

impl Sheet {
    /// Write evaluated values of the printable area
    ///
    /// Columns are separated by `\t` and every row ends with `\n`. Empty
    /// and absent cells print nothing between their separators.
    pub fn print_values<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(&self.values_to_string())
    }

    /// Write stored texts of the printable area, laid out like [`Sheet::print_values`]
    pub fn print_texts<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(&self.texts_to_string())
    }

    /// [`Sheet::print_values`] to a byte sink
    pub fn write_values<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.values_to_string().as_bytes())
    }

    /// [`Sheet::print_texts`] to a byte sink
    pub fn write_texts<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.texts_to_string().as_bytes())
    }

    pub fn values_to_string(&self) -> String {
        self.render(|sheet, cell| sheet.evaluate_cell(cell).to_string())
    }

    pub fn texts_to_string(&self) -> String {
        self.render(|_, cell| cell.text())
    }

    fn render<F>(&self, show: F) -> String
    where
        F: Fn(&Sheet, &Cell) -> String,
    {
        let size = self.printable_size();
        let mut out = String::new();

        for row in 0..size.rows {
            for col in 0..size.cols {
                if col > 0 {
                    out.push('\t');
                }
                let cell = self.cell_at(Position::new(row, col));
                if let Some(cell) = cell.filter(|cell| !cell.content().is_empty()) {
                    out.push_str(&show(self, cell));
                }
            }
            out.push('\n');
        }

        out
    }
}
