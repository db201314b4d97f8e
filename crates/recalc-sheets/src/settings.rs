//! Sheet settings

/// What [`Sheet::clear_cell`](crate::Sheet::clear_cell) does with a cell
/// that other formulas still read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// Demote the cell to Empty. The slot is dropped only once nothing
    /// depends on it; otherwise it stays so its back-edges remain valid.
    #[default]
    Demote,
    /// Refuse to clear a cell that has dependents
    Forbid,
}

/// Options for a [`Sheet`](crate::Sheet)
#[derive(Debug, Clone, Default)]
pub struct SheetSettings {
    /// Behaviour of `clear_cell` on referenced cells
    pub clear_policy: ClearPolicy,
}

impl SheetSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clear policy
    pub fn with_clear_policy(mut self, policy: ClearPolicy) -> Self {
        self.clear_policy = policy;
        self
    }
}
