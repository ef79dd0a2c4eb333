//! Falling-sand update rule and convergence detection.
//!
//! A generation is computed from the current grid alone: every grain looks
//! at the *current* state of its candidate destinations and writes only to
//! the new grid, so the scan order never changes the outcome.

use super::{Cell, Grid};

/// Candidate moves for a grain as (dx, dy), in priority order:
/// straight down, down-right, down-left. The order is asymmetric and piles
/// lean to the right as a result.
pub const FALL_ORDER: [(i32, i32); 3] = [(0, 1), (1, 1), (-1, 1)];

/// Result of one update pass
#[derive(Clone, Debug)]
pub struct Generation {
    pub grid: Grid,
    /// False when the new grid is identical to the one it was computed from
    pub changed: bool,
}

/// Where the grain at (x, y) ends up this generation
pub fn destination(grid: &Grid, x: i32, y: i32) -> (i32, i32) {
    FALL_ORDER
        .iter()
        .map(|&(dx, dy)| (x + dx, y + dy))
        .find(|&(nx, ny)| grid.get(nx, ny) == Some(Cell::Empty))
        .unwrap_or((x, y))
}

/// Pure evolution - returns the next generation and whether anything moved
pub fn next_generation(current: &Grid) -> Generation {
    let (cols, rows) = current.dimensions();
    let mut next = Grid::new(rows, cols);

    current
        .iter_cells()
        .filter(|(_, _, cell)| cell.is_sand())
        .for_each(|(x, y, _)| {
            let (nx, ny) = destination(current, x as i32, y as i32);
            next.set(nx, ny, Cell::Sand);
        });

    let changed = next != *current;
    Generation { grid: next, changed }
}
