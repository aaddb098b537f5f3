// position.rs
// ──────────────────────────────────────────────────────────────────────────────
// Row-major single-bit encoding of grid cells.  Cell (col, row) lives at bit
// `col + row * width`, so horizontal moves are a shift by one and vertical
// moves are a shift by `width`.  Edge masks guard every move against wrapping
// into the neighbouring row or falling off the word.
// ──────────────────────────────────────────────────────────────────────────────

/// Maximum number of cells a grid may contain; one bit per cell in a `u64`.
pub const MAX_CELLS: usize = u64::BITS as usize;

/// A single grid cell, encoded as a word with exactly one bit set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position(u64);

/// One of the four grid directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Evaluation order used by the search. Any order yields the same count.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Precomputed boundary masks for one grid size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeMasks {
    pub left: u64,
    pub right: u64,
    pub up: u64,
    pub down: u64,
}

/// Grid dimensions plus the edge masks derived from them.
///
/// Built once per search and shared read-only by the engine and the flood fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    width: usize,
    length: usize,
    edges: EdgeMasks,
}

impl Position {
    /// Encodes a bit index. The caller guarantees `index < MAX_CELLS`.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < MAX_CELLS);
        Position(1u64 << index)
    }

    /// Returns the raw one-bit word.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Returns the bit index of this cell.
    pub fn index(self) -> usize {
        self.0.trailing_zeros() as usize
    }
}

impl EdgeMasks {
    /// Builds the four masks row by row.
    ///
    /// The up edge is the first row, the down edge is the last row, and the
    /// left and right edges collect the first and last bit of every row.
    pub fn new(width: usize, length: usize) -> Self {
        debug_assert!(width > 0 && length > 0 && width * length <= MAX_CELLS);
        let row_pattern = u64::MAX >> (MAX_CELLS - width);

        let mut edges = EdgeMasks {
            left: 0,
            right: 0,
            up: row_pattern,
            down: 0,
        };
        for row in 0..length {
            let row_start = row * width;
            edges.left |= 1u64 << row_start;
            edges.right |= 1u64 << (row_start + width - 1);
            if row == length - 1 {
                edges.down = row_pattern << row_start;
            }
        }
        edges
    }

    /// Returns the mask of cells from which `direction` is illegal.
    pub fn mask(&self, direction: Direction) -> u64 {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}

impl Geometry {
    pub fn new(width: usize, length: usize) -> Self {
        Geometry {
            width,
            length,
            edges: EdgeMasks::new(width, length),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.length
    }

    pub fn edges(&self) -> &EdgeMasks {
        &self.edges
    }

    /// Encodes `(col, row)` as a position.
    pub fn position(&self, col: usize, row: usize) -> Position {
        debug_assert!(col < self.width && row < self.length);
        Position::from_index(col + row * self.width)
    }

    /// Decodes a position back into `(col, row)`.
    pub fn coordinates(&self, position: Position) -> (usize, usize) {
        let index = position.index();
        (index % self.width, index / self.width)
    }

    /// True iff moving from `position` in `direction` would leave the grid.
    pub fn on_edge(&self, position: Position, direction: Direction) -> bool {
        position.0 & self.edges.mask(direction) != 0
    }

    /// Shifts the set bit one cell in `direction`.
    ///
    /// Unchecked: the caller must consult [`Geometry::on_edge`] first, otherwise
    /// the bit wraps into another row or leaves the word.
    pub fn step(&self, position: Position, direction: Direction) -> Position {
        debug_assert!(!self.on_edge(position, direction));
        Position(match direction {
            Direction::Left => position.0 >> 1,
            Direction::Right => position.0 << 1,
            Direction::Up => position.0 >> self.width,
            Direction::Down => position.0 << self.width,
        })
    }

    /// Returns the neighbour in `direction`, or `None` at the boundary.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        if self.on_edge(position, direction) {
            None
        } else {
            Some(self.step(position, direction))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_masks_for_four_by_three() {
        let edges = EdgeMasks::new(4, 3);
        assert_eq!(edges.up, 0b0000_0000_1111);
        assert_eq!(edges.down, 0b1111_0000_0000);
        assert_eq!(edges.left, 0b0001_0001_0001);
        assert_eq!(edges.right, 0b1000_1000_1000);
    }

    #[test]
    fn edge_masks_for_full_word() {
        let row = EdgeMasks::new(64, 1);
        assert_eq!(row.up, u64::MAX);
        assert_eq!(row.down, u64::MAX);
        assert_eq!(row.left, 1);
        assert_eq!(row.right, 1u64 << 63);

        let square = EdgeMasks::new(8, 8);
        assert_eq!(square.up, 0xFF);
        assert_eq!(square.down, 0xFFu64 << 56);
        assert_eq!(square.left, 0x0101_0101_0101_0101);
        assert_eq!(square.right, 0x8080_8080_8080_8080);
    }

    #[test]
    fn single_cell_is_on_every_edge() {
        let geometry = Geometry::new(1, 1);
        let only = geometry.position(0, 0);
        for direction in Direction::ALL {
            assert!(geometry.on_edge(only, direction));
            assert_eq!(geometry.neighbor(only, direction), None);
        }
    }

    #[test]
    fn steps_move_one_cell() {
        let geometry = Geometry::new(5, 4);
        let middle = geometry.position(2, 1);
        assert_eq!(geometry.step(middle, Direction::Left), geometry.position(1, 1));
        assert_eq!(geometry.step(middle, Direction::Right), geometry.position(3, 1));
        assert_eq!(geometry.step(middle, Direction::Up), geometry.position(2, 0));
        assert_eq!(geometry.step(middle, Direction::Down), geometry.position(2, 2));
    }

    #[test]
    fn edges_block_wraparound() {
        let geometry = Geometry::new(3, 3);
        let end_of_row = geometry.position(2, 0);
        assert!(geometry.on_edge(end_of_row, Direction::Right));
        assert!(geometry.on_edge(end_of_row, Direction::Up));
        assert!(!geometry.on_edge(end_of_row, Direction::Left));
        assert!(!geometry.on_edge(end_of_row, Direction::Down));

        let start_of_row = geometry.position(0, 2);
        assert_eq!(geometry.neighbor(start_of_row, Direction::Left), None);
        assert_eq!(geometry.neighbor(start_of_row, Direction::Down), None);
    }

    #[test]
    fn coordinates_round_trip_every_cell() {
        let geometry = Geometry::new(7, 9);
        for row in 0..9 {
            for col in 0..7 {
                let position = geometry.position(col, row);
                assert_eq!(position.bits().count_ones(), 1);
                assert_eq!(geometry.coordinates(position), (col, row));
            }
        }
    }
}
