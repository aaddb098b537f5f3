//! Counts the paths through a small grid that start at one cell, end at
//! another, and visit every other open cell exactly once.
//!
//! The whole grid lives in a single `u64`, one bit per cell, so a grid may
//! hold at most 64 cells. See [`path::PathExplorer`] for the search itself and
//! [`input::parse_layout`] for the textual grid format.

pub mod grid;
pub mod input;
pub mod path;

pub use grid::{GridError, GridLayout};
pub use input::{parse_layout, InputError};
pub use path::{count_paths, PathExplorer, Pruning, SearchReport, SearchStats};
