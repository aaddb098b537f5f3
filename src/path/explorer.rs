use rayon::prelude::*;

use crate::grid::{Direction, Geometry, GridLayout, Occupancy, Position};

use super::flood::enough_cells_reachable;
use super::stats::SearchStats;
use super::threshold::ThresholdPolicy;

/// Number of search invocations between two progress reports.
pub const PROGRESS_INTERVAL: u64 = 1 << 30;

/// Sink for periodic progress reports from a long search.
///
/// The search result never depends on what the sink does.
pub trait Progress {
    fn report(&mut self, stats: &SearchStats);
}

impl Progress for () {
    fn report(&mut self, _stats: &SearchStats) {}
}

/// Whether the search consults the reachability check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pruning {
    #[default]
    Enabled,
    /// Treat every reachability check as passing. Counts are unchanged, only slower.
    Disabled,
}

/// Outcome of one complete search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchReport {
    pub solutions: u64,
    pub stats: SearchStats,
}

/// `PathExplorer` counts the paths from start to end that cover every free cell
/// of a [`GridLayout`] exactly once.
#[derive(Clone, Copy, Debug)]
pub struct PathExplorer<'a> {
    layout: &'a GridLayout,
    policy: ThresholdPolicy,
    pruning: Pruning,
}

/// Read-only configuration plus the per-search accumulator.
struct Search<'a> {
    geometry: &'a Geometry,
    end: Position,
    policy: ThresholdPolicy,
    pruning: Pruning,
    stats: SearchStats,
    progress: &'a mut dyn Progress,
}

/// Counts the paths of `layout` with the default policy.
pub fn count_paths(layout: &GridLayout) -> u64 {
    PathExplorer::new(layout).run().solutions
}

impl<'a> PathExplorer<'a> {
    pub fn new(layout: &'a GridLayout) -> Self {
        PathExplorer {
            layout,
            policy: ThresholdPolicy::new(layout.free_cells()),
            pruning: Pruning::Enabled,
        }
    }

    pub fn with_pruning(self, pruning: Pruning) -> Self {
        PathExplorer { pruning, ..self }
    }

    pub fn with_policy(self, policy: ThresholdPolicy) -> Self {
        PathExplorer { policy, ..self }
    }

    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    /// Runs the search to completion without progress reports.
    pub fn run(&self) -> SearchReport {
        self.run_with_progress(&mut ())
    }

    /// Runs the search to completion on the calling thread.
    pub fn run_with_progress(&self, progress: &mut dyn Progress) -> SearchReport {
        if let Some(solutions) = self.trivial_solutions() {
            return SearchReport {
                solutions,
                stats: SearchStats::default(),
            };
        }

        let mut search = self.search(progress);
        let solutions = search.expand(
            self.layout.start(),
            self.layout.excluded(),
            self.layout.free_cells(),
        );
        SearchReport {
            solutions,
            stats: search.stats,
        }
    }

    /// Runs each first step from the start cell as an independent task.
    ///
    /// Branches share nothing but the read-only configuration, so the count and
    /// the merged counters equal those of [`PathExplorer::run`].
    pub fn run_parallel(&self) -> SearchReport {
        if let Some(solutions) = self.trivial_solutions() {
            return SearchReport {
                solutions,
                stats: SearchStats::default(),
            };
        }

        let start = self.layout.start();
        let occupancy = self.layout.excluded().mark(start);
        let budget = self.layout.free_cells();
        let geometry = self.layout.geometry();
        let first_steps: Vec<Position> = Direction::ALL
            .iter()
            .filter_map(|&direction| geometry.neighbor(start, direction))
            .collect();

        first_steps
            .par_iter()
            .map(|&next| {
                let mut silent = ();
                let mut search = self.search(&mut silent);
                let solutions = search.enter(next, occupancy, budget);
                SearchReport {
                    solutions,
                    stats: search.stats,
                }
            })
            .reduce(SearchReport::default, |mut total, branch| {
                total.solutions += branch.solutions;
                total.stats.merge(&branch.stats);
                total
            })
    }

    /// A start that is also the end admits exactly the empty path.
    fn trivial_solutions(&self) -> Option<u64> {
        if self.layout.start() == self.layout.end() {
            Some(u64::from(self.layout.free_cells() == 0))
        } else {
            None
        }
    }

    fn search<'s>(&'s self, progress: &'s mut dyn Progress) -> Search<'s> {
        Search {
            geometry: self.layout.geometry(),
            end: self.layout.end(),
            policy: self.policy,
            pruning: self.pruning,
            stats: SearchStats::default(),
            progress,
        }
    }
}

impl Search<'_> {
    /// Occupies `from` and tries every legal neighbour with `budget` free
    /// cells still to visit.
    fn expand(&mut self, from: Position, occupancy: Occupancy, budget: u32) -> u64 {
        let occupancy = occupancy.mark(from);
        let mut solutions = 0;
        for direction in Direction::ALL {
            if let Some(next) = self.geometry.neighbor(from, direction) {
                solutions += self.enter(next, occupancy, budget);
            }
        }
        solutions
    }

    /// Counts completions of the current prefix that continue through `position`.
    ///
    /// `budget` counts the free cells not yet on the path; entering a free cell
    /// consumes one, and the end cell only completes a path once it is zero.
    fn enter(&mut self, position: Position, occupancy: Occupancy, budget: u32) -> u64 {
        self.stats.search_calls += 1;
        if self.stats.search_calls % PROGRESS_INTERVAL == 0 {
            self.progress.report(&self.stats);
        }

        if position == self.end {
            return u64::from(budget == 0);
        }
        if budget == 0 || !occupancy.is_free(position) {
            return 0;
        }

        if self.pruning == Pruning::Enabled && self.policy.should_check(budget) {
            self.stats.flood_calls += 1;
            if enough_cells_reachable(self.geometry, occupancy, position, budget) {
                self.stats.flood_early_stops += 1;
            } else {
                self.stats.flood_exhausted += 1;
                return 0;
            }
        }

        self.expand(position, occupancy, budget - 1)
    }
}
