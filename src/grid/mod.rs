// error module
mod error;
// layout module
mod layout;
// occupancy module
mod occupancy;
// position module
mod position;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the grid modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::GridError;
pub use layout::{Cell, GridLayout};
pub use occupancy::Occupancy;
pub use position::{Direction, EdgeMasks, Geometry, Position, MAX_CELLS};
