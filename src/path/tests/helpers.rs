use super::*;
use crate::grid::Cell;

use rand::{Rng, SeedableRng};
pub use rand_xorshift::XorShiftRng;

pub fn deterministic_prng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(0x0d0c_75a7_4e5e_ed01)
}

pub fn layout(text: &str) -> GridLayout {
    text.parse().unwrap()
}

/// Counts paths by walking coordinates with a visited list.
///
/// Shares nothing with the bitmask search beyond the `GridLayout` it reads.
pub fn reference_count(layout: &GridLayout) -> u64 {
    let cells = layout.cells();
    let start = layout.start().index();
    let end = layout.end().index();
    let open_cells = cells.iter().filter(|&&cell| cell != Cell::Excluded).count();
    if start == end {
        return u64::from(open_cells == 1);
    }

    let mut walker = ReferenceWalker {
        width: layout.width(),
        length: layout.length(),
        cells,
        end,
        open_cells,
        visited: vec![false; cells.len()],
    };
    walker.visited[start] = true;
    walker.walk(start, 1)
}

struct ReferenceWalker<'a> {
    width: usize,
    length: usize,
    cells: &'a [Cell],
    end: usize,
    open_cells: usize,
    visited: Vec<bool>,
}

impl ReferenceWalker<'_> {
    fn walk(&mut self, index: usize, path_len: usize) -> u64 {
        if index == self.end {
            return u64::from(path_len == self.open_cells);
        }

        let (col, row) = (index % self.width, index / self.width);
        let mut neighbours = Vec::with_capacity(4);
        if col > 0 {
            neighbours.push(index - 1);
        }
        if col + 1 < self.width {
            neighbours.push(index + 1);
        }
        if row > 0 {
            neighbours.push(index - self.width);
        }
        if row + 1 < self.length {
            neighbours.push(index + self.width);
        }

        let mut total = 0;
        for next in neighbours {
            if self.cells[next] == Cell::Excluded || self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            total += self.walk(next, path_len + 1);
            self.visited[next] = false;
        }
        total
    }
}

/// A grid of at most 4x4 cells with roughly a fifth of them excluded.
pub fn random_layout(prng: &mut XorShiftRng) -> GridLayout {
    loop {
        let width = prng.gen_range(1..=4);
        let length = prng.gen_range(1..=4);
        let cell_count = width * length;

        let excluded: Vec<usize> = (0..cell_count).filter(|_| prng.gen_bool(0.2)).collect();
        let open: Vec<usize> = (0..cell_count)
            .filter(|index| !excluded.contains(index))
            .collect();
        if open.len() < 2 {
            continue;
        }

        let start = open[prng.gen_range(0..open.len())];
        let end = loop {
            let candidate = open[prng.gen_range(0..open.len())];
            if candidate != start {
                break candidate;
            }
        };
        return GridLayout::with_endpoints(width, length, &excluded, start, end).unwrap();
    }
}

/// A square grid, so transposing keeps the shape.
pub fn random_square_layout(prng: &mut XorShiftRng) -> GridLayout {
    loop {
        let layout = random_layout(prng);
        if layout.width() == layout.length() {
            return layout;
        }
    }
}

/// Policy that floods on every step of the search.
pub fn flood_everywhere(layout: &GridLayout) -> ThresholdPolicy {
    ThresholdPolicy::new(layout.free_cells())
        .with_interval(1)
        .with_threshold(f64::INFINITY)
}
