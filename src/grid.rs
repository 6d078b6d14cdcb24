use std::fmt;

use thiserror::Error;

use crate::CellIndex;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: CellIndex, height: CellIndex },

    #[error("Cell ({x}, {y}) is outside of a {width}x{height} grid")]
    OutOfBounds {
        x: CellIndex,
        y: CellIndex,
        width: CellIndex,
        height: CellIndex,
    },

    #[error("Mismatched grid dimensions: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (CellIndex, CellIndex),
        got: (CellIndex, CellIndex),
    },
}

/// A fixed size generation of cells.
///
/// Cells are stored row-major, so cell `(x, y)` lives at `y * width + x`. Anything outside of
/// `[0, width) x [0, height)` is considered dead.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: CellIndex,
    height: CellIndex,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: CellIndex, height: CellIndex) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }

        Ok(Self {
            cells: vec![false; width * height],
            width,
            height,
        })
    }

    /// Build a dense grid from the coordinates of its live cells. Duplicates are fine, a cell is
    /// either in the set or it isn't.
    pub fn from_live_cells<I>(width: CellIndex, height: CellIndex, live: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (CellIndex, CellIndex)>,
    {
        let mut grid = Self::new(width, height)?;

        for (x, y) in live {
            grid.set(x, y)?;
        }

        Ok(grid)
    }

    pub fn width(&self) -> CellIndex {
        self.width
    }

    pub fn height(&self) -> CellIndex {
        self.height
    }

    pub fn dimensions(&self) -> (CellIndex, CellIndex) {
        (self.width, self.height)
    }

    /// Whether the cell at `(x, y)` is alive. Out of range cells are dead.
    pub fn is_alive(&self, x: CellIndex, y: CellIndex) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }

        self.cells[self.xy_from(x, y)]
    }

    /// Bring the cell at `(x, y)` to life
    pub fn set(&mut self, x: CellIndex, y: CellIndex) -> Result<(), GridError> {
        self.write(x, y, true)
    }

    /// Kill the cell at `(x, y)`
    pub fn clear(&mut self, x: CellIndex, y: CellIndex) -> Result<(), GridError> {
        self.write(x, y, false)
    }

    /// Flip the cell at `(x, y)`, returning its new state
    pub fn toggle(&mut self, x: CellIndex, y: CellIndex) -> Result<bool, GridError> {
        let i = self.index(x, y)?;
        self.cells[i] = !self.cells[i];

        Ok(self.cells[i])
    }

    /// Write `alive` on every cell of the `w x h` rectangle at `(x, y)`. The rectangle is clipped
    /// to the grid, and the number of cells written is returned.
    pub fn fill_rect(
        &mut self,
        x: CellIndex,
        y: CellIndex,
        w: CellIndex,
        h: CellIndex,
        alive: bool,
    ) -> usize {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);

        let mut n = 0;
        for y in y..y_end {
            for x in x..x_end {
                let i = self.xy_from(x, y);
                self.cells[i] = alive;
                n += 1;
            }
        }

        n
    }

    /// Kill every cell
    pub fn clear_all(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Iterate over the coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (CellIndex, CellIndex)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(|(n, _)| self.xy_to(n))
    }

    /// Copy the cells that fit into a new grid of the given size
    pub fn resized(&self, width: CellIndex, height: CellIndex) -> Result<Self, GridError> {
        let live = self
            .live_cells()
            .filter(|&(x, y)| x < width && y < height);

        Self::from_live_cells(width, height, live)
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    fn write(&mut self, x: CellIndex, y: CellIndex, alive: bool) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i] = alive;

        Ok(())
    }

    fn index(&self, x: CellIndex, y: CellIndex) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(self.xy_from(x, y))
    }

    fn xy_to(&self, n: usize) -> (CellIndex, CellIndex) {
        (n % self.width, n / self.width)
    }

    fn xy_from(&self, x: CellIndex, y: CellIndex) -> usize {
        y * self.width + x
    }
}

/// Plain text view of the grid, `#` for live cells and `.` for dead ones.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &c in row {
                f.write_str(if c { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}
