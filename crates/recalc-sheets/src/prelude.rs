//! Prelude module - common imports for recalc-sheets users
//!
//! ```rust
//! use recalc_sheets::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellContent,
    CellError,
    CellValue,
    CellView,
    ClearPolicy,
    // Error types
    Error,
    EvaluationStats,
    Position,
    Result,
    // Main types
    Sheet,
    SheetSettings,
    Size,
};
