use std::fmt::{self, Display, Formatter};

use super::error::GridError;
use super::occupancy::Occupancy;
use super::position::{Geometry, Position, MAX_CELLS};

/// Classification of one input cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Must be visited exactly once.
    Free,
    /// Permanent obstacle.
    Excluded,
    Start,
    End,
}

impl Cell {
    /// Decodes the numeric classification used by the textual input.
    pub fn from_value(value: u64, index: usize) -> Result<Cell, GridError> {
        match value {
            0 => Ok(Cell::Free),
            1 => Ok(Cell::Excluded),
            2 => Ok(Cell::Start),
            3 => Ok(Cell::End),
            _ => Err(GridError::InvalidCell { index, value }),
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Cell::Free => 0,
            Cell::Excluded => 1,
            Cell::Start => 2,
            Cell::End => 3,
        }
    }
}

/// A validated grid description, ready to be searched.
///
/// Construction checks every configuration rule up front, so holding a
/// `GridLayout` means the grid fits in a word and has exactly one start and
/// one end cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    geometry: Geometry,
    cells: Vec<Cell>,
    start: Position,
    end: Position,
    excluded: Occupancy,
    free_cells: u32,
}

fn checked_geometry(width: usize, length: usize) -> Result<Geometry, GridError> {
    GridLayout::checked_cell_count(width, length)?;
    Ok(Geometry::new(width, length))
}

impl GridLayout {
    /// Checks the dimensions alone and returns the number of cells.
    pub fn checked_cell_count(width: usize, length: usize) -> Result<usize, GridError> {
        if width == 0 || length == 0 {
            return Err(GridError::ZeroDimension { width, length });
        }
        match width.checked_mul(length) {
            Some(cells) if cells <= MAX_CELLS => Ok(cells),
            _ => Err(GridError::TooManyCells { width, length }),
        }
    }

    /// Validates a row-major list of classified cells.
    pub fn new(width: usize, length: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        let geometry = checked_geometry(width, length)?;
        if cells.len() != geometry.cell_count() {
            return Err(GridError::CellCountMismatch {
                expected: geometry.cell_count(),
                found: cells.len(),
            });
        }

        let mut start = None;
        let mut end = None;
        for (index, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Start => {
                    if let Some(first) = start {
                        return Err(GridError::DuplicateStart {
                            first,
                            second: index,
                        });
                    }
                    start = Some(index);
                }
                Cell::End => {
                    if let Some(first) = end {
                        return Err(GridError::DuplicateEnd {
                            first,
                            second: index,
                        });
                    }
                    end = Some(index);
                }
                Cell::Free | Cell::Excluded => {}
            }
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;

        Ok(Self::assemble(geometry, cells, start, end))
    }

    /// Builds a layout from cell indices instead of classified cells.
    ///
    /// Unlike [`GridLayout::new`], `start` and `end` may name the same cell.
    pub fn with_endpoints(
        width: usize,
        length: usize,
        excluded: &[usize],
        start: usize,
        end: usize,
    ) -> Result<Self, GridError> {
        let geometry = checked_geometry(width, length)?;
        let cell_count = geometry.cell_count();
        let in_bounds = |index: usize| {
            if index < cell_count {
                Ok(index)
            } else {
                Err(GridError::OutOfBounds {
                    index,
                    cells: cell_count,
                })
            }
        };

        let mut cells = vec![Cell::Free; cell_count];
        for &index in excluded {
            cells[in_bounds(index)?] = Cell::Excluded;
        }
        for endpoint in [start, end] {
            if cells[in_bounds(endpoint)?] == Cell::Excluded {
                return Err(GridError::ExcludedEndpoint { index: endpoint });
            }
        }
        cells[end] = Cell::End;
        cells[start] = Cell::Start;

        Ok(Self::assemble(geometry, cells, start, end))
    }

    fn assemble(geometry: Geometry, cells: Vec<Cell>, start: usize, end: usize) -> Self {
        let mut excluded = Occupancy::EMPTY;
        let mut free_cells = 0;
        for (index, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Excluded => excluded = excluded.mark(Position::from_index(index)),
                Cell::Free => free_cells += 1,
                Cell::Start | Cell::End => {}
            }
        }

        GridLayout {
            geometry,
            cells,
            start: Position::from_index(start),
            end: Position::from_index(end),
            excluded,
            free_cells,
        }
    }

    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    pub fn length(&self) -> usize {
        self.geometry.length()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Initial occupancy: the excluded cells only.
    pub fn excluded(&self) -> Occupancy {
        self.excluded
    }

    /// Number of free cells a complete path must cover, not counting the
    /// start and end cells.
    pub fn free_cells(&self) -> u32 {
        self.free_cells
    }

    /// Mirrors the layout across its main diagonal.
    ///
    /// Path counts are preserved, since the grid graph is carried onto an
    /// isomorphic one.
    pub fn transposed(&self) -> GridLayout {
        let width = self.width();
        let length = self.length();
        let geometry = Geometry::new(length, width);

        let mut cells = vec![Cell::Free; self.cells.len()];
        for row in 0..length {
            for col in 0..width {
                cells[row + col * length] = self.cells[col + row * width];
            }
        }
        let flip = |position: Position| {
            let index = position.index();
            index / width + (index % width) * length
        };

        Self::assemble(geometry, cells, flip(self.start), flip(self.end))
    }

    /// Swaps the roles of the start and end cells.
    pub fn reversed(&self) -> GridLayout {
        let mut cells = self.cells.clone();
        let start = self.start.index();
        let end = self.end.index();
        cells[start] = Cell::End;
        cells[end] = Cell::Start;

        Self::assemble(self.geometry, cells, end, start)
    }
}

impl Display for GridLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width()) {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
