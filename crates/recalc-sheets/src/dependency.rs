//! Dependency graph traversals over a sheet's cells
//!
//! Edges live on the cells themselves (`depends_on` / `dependents`); the
//! functions here only walk them.

use crate::cell::Cell;
use ahash::{AHashMap, AHashSet};
use recalc_sheets_core::Position;

/// Cell storage keyed by position
pub(crate) type CellMap = AHashMap<Position, Cell>;

/// Check whether pointing `target` at `references` would close a cycle
///
/// Walks the committed `depends_on` edges from every referenced position.
/// Positions with no cell contribute no edges.
pub(crate) fn would_create_cycle(cells: &CellMap, target: Position, references: &[Position]) -> bool {
    let mut visited: AHashSet<Position> = AHashSet::new();
    let mut stack: Vec<Position> = references.to_vec();

    while let Some(current) = stack.pop() {
        if current == target {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }

        if let Some(cell) = cells.get(&current) {
            stack.extend(
                cell.depends_on
                    .iter()
                    .copied()
                    .filter(|pos| !visited.contains(pos)),
            );
        }
    }

    false
}

/// Drop memoized values of `start` and every transitive dependent
///
/// Returns the number of cells visited.
pub(crate) fn invalidate_from(cells: &mut CellMap, start: Position) -> usize {
    let mut visited: AHashSet<Position> = AHashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        if let Some(cell) = cells.get_mut(&current) {
            cell.invalidate_cache();
            stack.extend(
                cell.dependents
                    .iter()
                    .copied()
                    .filter(|pos| !visited.contains(pos)),
            );
        }
    }

    log::trace!("invalidated {} cell(s) downstream of {}", visited.len(), start);
    visited.len()
}

/// Uncached formula cells that `cell` transitively reads, dependencies first
///
/// Evaluating them in this order means each formula finds its inputs
/// already memoized. `cell` itself is not included.
pub(crate) fn evaluation_order(cells: &CellMap, cell: &Cell) -> Vec<Position> {
    let mut order = Vec::new();
    let mut visited: AHashSet<Position> = AHashSet::new();
    let mut stack: Vec<(Position, bool)> = cell.depends_on.iter().map(|&pos| (pos, false)).collect();

    while let Some((current, expanded)) = stack.pop() {
        if expanded {
            order.push(current);
            continue;
        }
        if !visited.insert(current) {
            continue;
        }

        let dependency = match cells.get(&current) {
            Some(dependency) => dependency,
            None => continue,
        };
        if !dependency.content.is_formula() || dependency.has_cached_value() {
            continue;
        }

        stack.push((current, true));
        stack.extend(
            dependency
                .depends_on
                .iter()
                .copied()
                .filter(|pos| !visited.contains(pos))
                .map(|pos| (pos, false)),
        );
    }

    order
}

/// Remove every outgoing edge of `pos`, keeping back-edges in step
pub(crate) fn unlink(cells: &mut CellMap, pos: Position) {
    let old = match cells.get_mut(&pos) {
        Some(cell) => std::mem::take(&mut cell.depends_on),
        None => return,
    };

    for dependency in old {
        if let Some(cell) = cells.get_mut(&dependency) {
            cell.dependents.remove(&pos);
        }
    }
}

/// Add edges from `pos` to each of `references`, materializing absent cells as Empty
pub(crate) fn link(cells: &mut CellMap, pos: Position, references: &[Position]) {
    for &dependency in references {
        cells
            .entry(dependency)
            .or_insert_with(Cell::new)
            .dependents
            .insert(pos);
    }

    if let Some(cell) = cells.get_mut(&pos) {
        cell.depends_on.extend(references.iter().copied());
    }
}
