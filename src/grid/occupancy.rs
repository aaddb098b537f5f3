use super::position::Position;

/// Set of cells that can no longer be entered: excluded cells plus the
/// current path prefix.
///
/// `Occupancy` is `Copy` and every update returns a new value. Each level of
/// the search owns its own snapshot, so returning from a branch restores the
/// parent's state without any undo step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occupancy(u64);

impl Occupancy {
    pub const EMPTY: Occupancy = Occupancy(0);

    pub fn from_bits(bits: u64) -> Self {
        Occupancy(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    /// True iff `position` may still be entered.
    pub fn is_free(self, position: Position) -> bool {
        self.0 & position.bits() == 0
    }

    /// Returns a copy with `position` blocked.
    #[must_use]
    pub fn mark(self, position: Position) -> Occupancy {
        Occupancy(self.0 | position.bits())
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }
}
