/// Decides when a reachability check is worth its cost.
///
/// Checks are skipped near the root of the search, where almost nothing is
/// occupied yet, and afterwards only run on every `interval`th budget value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdPolicy {
    threshold: f64,
    interval: u32,
}

impl ThresholdPolicy {
    pub const DEFAULT_INTERVAL: u32 = 4;

    /// Derives the window from the total free-cell count:
    /// `total - (1.5 * sqrt(total) + 1)`.
    pub fn new(total_free_cells: u32) -> Self {
        let total = f64::from(total_free_cells);
        ThresholdPolicy {
            threshold: total - (1.5 * total.sqrt() + 1.0),
            interval: Self::DEFAULT_INTERVAL,
        }
    }

    /// Same window, different check frequency. An interval of zero is treated as one.
    pub fn with_interval(self, interval: u32) -> Self {
        ThresholdPolicy {
            interval: interval.max(1),
            ..self
        }
    }

    /// Same frequency, explicit window. `f64::INFINITY` checks from the first step.
    pub fn with_threshold(self, threshold: f64) -> Self {
        ThresholdPolicy { threshold, ..self }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// True iff a reachability check should run with `budget` cells left.
    pub fn should_check(&self, budget: u32) -> bool {
        budget % self.interval == 0 && f64::from(budget) < self.threshold
    }
}
