use thiserror::Error;

use super::position::MAX_CELLS;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for grid configuration and cell classification.
///
/// Every variant is fatal: a layout that fails validation is never searched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Error when either dimension is zero.
    #[error("Grid dimensions must be positive, got width {width} and length {length}")]
    ZeroDimension { width: usize, length: usize },

    /// Error when the grid does not fit in one machine word.
    #[error("Grid of {width}x{length} has more than {} cells", MAX_CELLS)]
    TooManyCells { width: usize, length: usize },

    /// Error when the number of supplied cells disagrees with the dimensions.
    #[error("Expected {expected} cell values, found {found}")]
    CellCountMismatch { expected: usize, found: usize },

    /// Error when a cell value is not one of the known classifications.
    #[error("Invalid value {value} for cell {index} (expected 0, 1, 2 or 3)")]
    InvalidCell { index: usize, value: u64 },

    /// Error when no start cell is present.
    #[error("Grid has no start cell (value 2)")]
    MissingStart,

    /// Error when no end cell is present.
    #[error("Grid has no end cell (value 3)")]
    MissingEnd,

    /// Error when more than one start cell is present.
    #[error("Grid has more than one start cell (cells {first} and {second})")]
    DuplicateStart { first: usize, second: usize },

    /// Error when more than one end cell is present.
    #[error("Grid has more than one end cell (cells {first} and {second})")]
    DuplicateEnd { first: usize, second: usize },

    /// Error when a programmatic endpoint lies outside the grid.
    #[error("Cell index {index} is outside a grid of {cells} cells")]
    OutOfBounds { index: usize, cells: usize },

    /// Error when a programmatic endpoint is also marked excluded.
    #[error("Endpoint cell {index} is marked excluded")]
    ExcludedEndpoint { index: usize },
}
