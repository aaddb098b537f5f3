use crate::grid::{Direction, Geometry, Occupancy, Position};

/// Bounded flood fill used to prune hopeless branches.
///
/// Owns a private copy of the search occupancy, so nothing it marks leaks back
/// into the search. The fill only answers whether enough free cells are
/// reachable; it never checks that the end cell can be reached last.
struct FloodFill<'g> {
    geometry: &'g Geometry,
    occupancy: Occupancy,
    remaining: u32,
}

/// True iff at least `budget + 1` free cells are reachable from `from`,
/// counting `from` itself.
///
/// `from` must be free under `occupancy`. With `budget` free cells still to
/// visit (including `from`) plus the end cell, every unoccupied cell has to be
/// reachable, so a `false` answer means no completion exists.
pub fn enough_cells_reachable(
    geometry: &Geometry,
    occupancy: Occupancy,
    from: Position,
    budget: u32,
) -> bool {
    debug_assert!(occupancy.is_free(from));
    let mut fill = FloodFill {
        geometry,
        occupancy,
        remaining: budget + 1,
    };
    fill.visit(from)
}

impl FloodFill<'_> {
    /// Returns true as soon as the remaining count hits zero.
    fn visit(&mut self, position: Position) -> bool {
        self.occupancy = self.occupancy.mark(position);
        self.remaining -= 1;
        if self.remaining == 0 {
            return true;
        }

        for direction in Direction::ALL {
            let Some(next) = self.geometry.neighbor(position, direction) else {
                continue;
            };
            if self.occupancy.is_free(next) && self.visit(next) {
                return true;
            }
        }
        false
    }
}
