use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::CellIndex;
use crate::grid::Grid;

/// Well known seeds that can be stamped on a grid instead of painting one by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Period 2 oscillator
    Blinker,

    /// Still life
    Block,

    /// Period 2 oscillator made of two blocks
    Beacon,

    /// The smallest spaceship, moves one cell diagonally every 4 generations
    Glider,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown preset \"{name}\", expected one of: blinker, block, beacon, glider")]
pub struct PresetError {
    name: String,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Blinker, Preset::Block, Preset::Beacon, Preset::Glider];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Blinker => "blinker",
            Preset::Block => "block",
            Preset::Beacon => "beacon",
            Preset::Glider => "glider",
        }
    }

    /// Live cells of the pattern, relative to its top left corner
    pub fn cells(&self) -> &'static [(CellIndex, CellIndex)] {
        match self {
            Preset::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Preset::Block => &[(0, 0), (1, 0), (0, 1), (1, 1)],
            Preset::Beacon => &[
                (0, 0),
                (1, 0),
                (0, 1),
                (1, 1),
                (2, 2),
                (3, 2),
                (2, 3),
                (3, 3),
            ],
            Preset::Glider => &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
        }
    }

    /// Width and height of the pattern's bounding box
    pub fn size(&self) -> (CellIndex, CellIndex) {
        self.cells()
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    /// Write the pattern on `grid` with its top left corner at `(x, y)`. Cells that don't fit are
    /// dropped. Returns how many cells were written.
    pub fn stamp_at(&self, grid: &mut Grid, x: CellIndex, y: CellIndex) -> usize {
        let mut written = 0;

        for &(dx, dy) in self.cells() {
            let (Some(x), Some(y)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };

            if grid.set(x, y).is_ok() {
                written += 1;
            }
        }

        let dropped = self.cells().len() - written;
        if dropped > 0 {
            warn!(preset = self.name(), dropped, "Preset does not fit on the grid");
        }

        written
    }

    /// Write the pattern centered on `grid`
    pub fn stamp(&self, grid: &mut Grid) -> usize {
        let (w, h) = self.size();
        let x = grid.width().saturating_sub(w) / 2;
        let y = grid.height().saturating_sub(h) / 2;

        self.stamp_at(grid, x, y)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PresetError {
                name: s.to_string(),
            })
    }
}
