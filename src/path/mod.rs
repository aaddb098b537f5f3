// explorer module
mod explorer;
// flood module
mod flood;
// stats module
mod stats;
// threshold module
mod threshold;

#[cfg(test)]
mod tests;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path modules.
//─────────────────────────────────────────────────────────────────────────────
pub use explorer::{count_paths, PathExplorer, Progress, Pruning, SearchReport, PROGRESS_INTERVAL};
pub use flood::enough_cells_reachable;
pub use stats::SearchStats;
pub use threshold::ThresholdPolicy;
