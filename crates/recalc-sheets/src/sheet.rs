//! Sheet: cell storage, edits and lazy evaluation

use crate::cell::{Cell, CellContent};
use crate::dependency::{
    evaluation_order, invalidate_from, link, unlink, would_create_cycle, CellMap,
};
use crate::settings::{ClearPolicy, SheetSettings};
use recalc_sheets_core::{CellValue, Error, Position, Result, Size};
use recalc_sheets_formula::{CellResolver, Formula};

/// Evaluation counters since creation or the last [`Sheet::reset_stats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Number of times a formula was actually evaluated
    pub formula_evaluations: u64,
    /// Number of formula reads served from the memoized value
    pub cache_hits: u64,
}

#[derive(Debug, Default)]
struct StatCounters {
    formula_evaluations: std::cell::Cell<u64>,
    cache_hits: std::cell::Cell<u64>,
}

impl StatCounters {
    fn bump(counter: &std::cell::Cell<u64>) {
        counter.set(counter.get() + 1);
    }
}

/// A single sheet of cells
///
/// The sheet owns every cell. Cells refer to each other only by position,
/// and the sheet keeps the dependency edges acyclic and mutually consistent
/// across every mutating call.
///
/// # Example
///
/// ```rust
/// use recalc_sheets::{CellValue, Sheet};
///
/// let mut sheet = Sheet::new();
/// sheet.set("A1", "5").unwrap();
/// sheet.set("B1", "=A1+3").unwrap();
/// assert_eq!(sheet.value("B1").unwrap(), CellValue::Number(8.0));
///
/// sheet.set("A1", "10").unwrap();
/// assert_eq!(sheet.value("B1").unwrap(), CellValue::Number(13.0));
/// ```
#[derive(Debug, Default)]
pub struct Sheet {
    cells: CellMap,
    settings: SheetSettings,
    stats: StatCounters,
}

impl Sheet {
    /// Create an empty sheet with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sheet with the given settings
    pub fn with_settings(settings: SheetSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &SheetSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SheetSettings {
        &mut self.settings
    }

    fn check_position(pos: Position) -> Result<()> {
        if pos.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidPosition(pos))
        }
    }

    // === Cell Modification ===

    /// Replace the content of the cell at `pos`
    ///
    /// The text is parsed and, for formulas, checked for cycles against the
    /// committed graph before anything changes. A failed call leaves the
    /// sheet untouched. Cells referenced by a new formula are created Empty
    /// if they do not exist yet.
    pub fn set_cell(&mut self, pos: Position, text: &str) -> Result<()> {
        Self::check_position(pos)?;

        let content = CellContent::from_text(text)?;
        let references = content.referenced_cells().to_vec();

        if content.is_formula() && would_create_cycle(&self.cells, pos, &references) {
            log::debug!("rejected edit of {}: circular dependency", pos);
            return Err(Error::CircularDependency(pos));
        }

        self.cells.entry(pos).or_insert_with(Cell::new).content = content;

        unlink(&mut self.cells, pos);
        link(&mut self.cells, pos, &references);
        invalidate_from(&mut self.cells, pos);

        log::debug!("set {} to {:?} ({} references)", pos, text, references.len());
        Ok(())
    }

    /// Clear the cell at `pos`
    ///
    /// The cell loses its content and its own dependency edges, and every
    /// cell reading it is invalidated. A cell nothing depends on is removed
    /// from the sheet; a referenced one stays as an Empty slot unless the
    /// [`ClearPolicy`] forbids clearing it.
    pub fn clear_cell(&mut self, pos: Position) -> Result<()> {
        Self::check_position(pos)?;

        let referenced = match self.cells.get(&pos) {
            Some(cell) => cell.is_referenced(),
            None => return Ok(()),
        };

        if referenced && self.settings.clear_policy == ClearPolicy::Forbid {
            return Err(Error::CellReferenced(pos));
        }

        unlink(&mut self.cells, pos);
        if let Some(cell) = self.cells.get_mut(&pos) {
            cell.clear();
        }
        invalidate_from(&mut self.cells, pos);

        if referenced {
            log::debug!("cleared {} (kept as empty, still referenced)", pos);
        } else {
            self.cells.remove(&pos);
            log::debug!("cleared {} (slot removed)", pos);
        }
        Ok(())
    }

    // === Cell Access ===

    /// Get the cell at `pos`; `None` if no cell exists there
    pub fn get_cell(&self, pos: Position) -> Result<Option<CellView<'_>>> {
        Self::check_position(pos)?;
        Ok(self.cells.get(&pos).map(|cell| CellView {
            sheet: self,
            position: pos,
            cell,
        }))
    }

    /// Get the cell at `pos` mutably; `None` if no cell exists there
    pub fn get_cell_mut(&mut self, pos: Position) -> Result<Option<&mut Cell>> {
        Self::check_position(pos)?;
        Ok(self.cells.get_mut(&pos))
    }

    pub(crate) fn cell_at(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    /// Number of cell slots, including Empty ones kept for references
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over all cell slots in no particular order
    pub fn iter_cells(&self) -> impl Iterator<Item = CellView<'_>> {
        self.cells.iter().map(move |(&position, cell)| CellView {
            sheet: self,
            position,
            cell,
        })
    }

    /// Smallest rectangle from `A1` covering every cell slot
    ///
    /// Empty slots count too, including those created by formula references.
    pub fn printable_size(&self) -> Size {
        self.cells
            .keys()
            .fold(Size::default(), |size, pos| {
                Size::new(size.rows.max(pos.row + 1), size.cols.max(pos.col + 1))
            })
    }

    // === Address Convenience ===

    /// Set a cell by A1 address
    pub fn set(&mut self, address: &str, text: &str) -> Result<()> {
        self.set_cell(Position::parse(address)?, text)
    }

    /// Value of a cell by A1 address; absent cells read as empty text
    pub fn value(&self, address: &str) -> Result<CellValue> {
        let pos = Position::parse(address)?;
        Ok(self
            .get_cell(pos)?
            .map(|cell| cell.value())
            .unwrap_or_default())
    }

    /// Text of a cell by A1 address; absent cells read as empty
    pub fn text(&self, address: &str) -> Result<String> {
        let pos = Position::parse(address)?;
        Ok(self
            .get_cell(pos)?
            .map(|cell| cell.text())
            .unwrap_or_default())
    }

    /// Clear a cell by A1 address
    pub fn clear(&mut self, address: &str) -> Result<()> {
        self.clear_cell(Position::parse(address)?)
    }

    // === Evaluation ===

    pub fn stats(&self) -> EvaluationStats {
        EvaluationStats {
            formula_evaluations: self.stats.formula_evaluations.get(),
            cache_hits: self.stats.cache_hits.get(),
        }
    }

    pub fn reset_stats(&self) {
        self.stats.formula_evaluations.set(0);
        self.stats.cache_hits.set(0);
    }

    /// Value of `cell`, evaluating and memoizing formulas on first read
    ///
    /// Uncached formulas the cell depends on are evaluated first, deepest
    /// inputs before their readers, so evaluation never nests more than one
    /// cell deep however long the dependency chain is.
    pub(crate) fn evaluate_cell(&self, cell: &Cell) -> CellValue {
        let formula = match cell.content() {
            CellContent::Formula(formula) => formula,
            other => return other.static_value().unwrap_or_default(),
        };

        if let Some(value) = cell.cached_value() {
            StatCounters::bump(&self.stats.cache_hits);
            return value;
        }

        for pos in evaluation_order(&self.cells, cell) {
            if let Some(dependency) = self.cells.get(&pos) {
                if let CellContent::Formula(inner) = dependency.content() {
                    self.compute(dependency, inner);
                }
            }
        }

        self.compute(cell, formula)
    }

    fn compute(&self, cell: &Cell, formula: &Formula) -> CellValue {
        StatCounters::bump(&self.stats.formula_evaluations);
        let value: CellValue = formula.evaluate(self).into();
        log::trace!("evaluated ={} -> {}", formula.expression(), value);
        cell.store_value(value.clone());
        value
    }
}

impl CellResolver for Sheet {
    fn resolve(&self, pos: Position) -> Option<CellValue> {
        self.cells.get(&pos).map(|cell| self.evaluate_cell(cell))
    }
}

/// Read access to one cell together with the sheet it lives in
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    sheet: &'a Sheet,
    position: Position,
    cell: &'a Cell,
}

impl<'a> CellView<'a> {
    pub fn position(&self) -> Position {
        self.position
    }

    /// Evaluated value (memoized for formulas)
    pub fn value(&self) -> CellValue {
        self.sheet.evaluate_cell(self.cell)
    }

    /// Stored text
    pub fn text(&self) -> String {
        self.cell.text()
    }

    pub fn content(&self) -> &'a CellContent {
        self.cell.content()
    }

    pub fn referenced_cells(&self) -> &'a [Position] {
        self.cell.referenced_cells()
    }

    pub fn is_referenced(&self) -> bool {
        self.cell.is_referenced()
    }

    /// The underlying cell, for edge inspection
    pub fn cell(&self) -> &'a Cell {
        self.cell
    }
}
