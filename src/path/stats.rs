/// Diagnostic counters gathered during one search.
///
/// Owned by the search and updated through `&mut`, so independent searches
/// (or independently searched subtrees) never share counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Recursive search invocations, including ones rejected immediately.
    pub search_calls: u64,
    /// Reachability checks performed.
    pub flood_calls: u64,
    /// Checks that reached the required cell count and stopped early.
    pub flood_early_stops: u64,
    /// Checks that ran out of reachable cells, pruning the branch.
    pub flood_exhausted: u64,
}

impl SearchStats {
    /// Adds another accumulator's counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.search_calls += other.search_calls;
        self.flood_calls += other.flood_calls;
        self.flood_early_stops += other.flood_early_stops;
        self.flood_exhausted += other.flood_exhausted;
    }
}
