use crate::CellIndex;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::rule_set::B3S23;

/// Moore neighborhood offsets
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Count the live neighbors of `(x, y)`. Anything past the edges of the grid is dead, there is
/// no wrapping.
pub fn live_neighbors(grid: &Grid, x: CellIndex, y: CellIndex) -> u8 {
    let mut n = 0;

    for (dx, dy) in NEIGHBORS {
        let (Some(x), Some(y)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
            continue;
        };

        if grid.is_alive(x, y) {
            n += 1;
        }
    }

    n
}

/// Compute the next generation of `grid`.
///
/// The input is left untouched: every neighbor count observes the previous generation.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();

    // dimensions match by construction
    if let Err(e) = step_into(grid, &mut next) {
        unreachable!("{e}")
    }

    next
}

/// Write the next generation of `prev` into `next`.
///
/// This is the double buffered version of [`step`]: `next` is overwritten entirely, so it can be
/// any grid of the same dimensions (typically the generation before `prev`). If the dimensions
/// differ, `next` is left as-is.
pub fn step_into(prev: &Grid, next: &mut Grid) -> Result<(), GridError> {
    if prev.dimensions() != next.dimensions() {
        return Err(GridError::DimensionMismatch {
            expected: prev.dimensions(),
            got: next.dimensions(),
        });
    }

    let width = prev.width();

    // Every cell is written exactly once, so births and deaths don't depend on iteration order
    for (n, (cell, &alive)) in next.cells_mut().iter_mut().zip(prev.cells()).enumerate() {
        let (x, y) = (n % width, n / width);
        *cell = B3S23.next(alive, live_neighbors(prev, x, y));
    }

    Ok(())
}
