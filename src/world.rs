use tracing::debug;
use tracing::info;

use crate::CellIndex;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::stepper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The user is painting the seed, nothing evolves
    Seeding,

    /// One generation per tick
    Running,

    /// Started, but ticks are ignored
    Paused,
}

pub struct World {
    /// Current generation
    grid: Grid,

    /// Back buffer the next generation is written into before being swapped in. Its contents are
    /// meaningless between ticks.
    scratch: Grid,

    /// Number of generations computed since the seed
    generation: u64,

    phase: Phase,
}

impl World {
    /// Create an empty world, ready to be seeded
    pub fn new(width: CellIndex, height: CellIndex) -> Result<Self, GridError> {
        Ok(Self::with_seed(Grid::new(width, height)?))
    }

    /// Create a world from an existing seed
    pub fn with_seed(seed: Grid) -> Self {
        let scratch = seed.clone();

        Self {
            grid: seed,
            scratch,
            generation: 0,
            phase: Phase::Seeding,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Bring a cell to life. Only allowed while seeding, returns whether the cell was written.
    pub fn paint(&mut self, x: CellIndex, y: CellIndex) -> bool {
        self.paint_rect(x, y, 1, 1, true) > 0
    }

    /// Kill a cell. Only allowed while seeding, returns whether the cell was written.
    pub fn erase(&mut self, x: CellIndex, y: CellIndex) -> bool {
        self.paint_rect(x, y, 1, 1, false) > 0
    }

    /// Write `alive` on a `w x h` rectangle of cells, clipped to the grid. Only allowed while
    /// seeding. Returns the number of cells written.
    pub fn paint_rect(
        &mut self,
        x: CellIndex,
        y: CellIndex,
        w: CellIndex,
        h: CellIndex,
        alive: bool,
    ) -> usize {
        if self.phase != Phase::Seeding {
            debug!(x, y, phase = ?self.phase, "Ignoring paint outside of seeding");
            return 0;
        }

        self.grid.fill_rect(x, y, w, h, alive)
    }

    /// Stop seeding and start evolving
    pub fn begin(&mut self) {
        if self.phase != Phase::Seeding {
            return;
        }

        info!(population = self.population(), "Begin");
        self.phase = Phase::Running;
    }

    /// Pause or unpause a running world. Does nothing while seeding.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Seeding => Phase::Seeding,
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
        };
    }

    /// Advance the world by one generation if it's running. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        if let Err(e) = stepper::step_into(&self.grid, &mut self.scratch) {
            unreachable!("Both buffers are resized together: {e}")
        }

        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.population(),
            "Tick"
        );

        true
    }

    /// Kill every cell and go back to seeding
    pub fn reset(&mut self) {
        self.grid.clear_all();
        self.generation = 0;
        self.phase = Phase::Seeding;

        info!("Reset");
    }

    /// Change the size of the world, keeping the cells that still fit
    pub fn resize(&mut self, width: CellIndex, height: CellIndex) -> Result<(), GridError> {
        if self.grid.dimensions() == (width, height) {
            return Ok(());
        }

        let grid = self.grid.resized(width, height)?;
        self.scratch = grid.clone();
        self.grid = grid;

        debug!(width, height, "Resized world");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Phase;
    use super::World;
    use crate::grid::Grid;

    fn blinker() -> World {
        let seed = Grid::from_live_cells(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        World::with_seed(seed)
    }

    #[test]
    fn no_ticks_while_seeding() {
        let mut world = blinker();
        let before = world.grid().clone();

        assert!(!world.tick());
        assert_eq!(world.grid(), &before);
        assert_eq!(world.generation(), 0);
    }

    #[test]
    fn ticks_alternate_buffers() {
        let mut world = blinker();
        let seed = world.grid().clone();

        world.begin();
        assert_eq!(world.phase(), Phase::Running);

        assert!(world.tick());
        assert!(world.grid().is_alive(2, 1));
        assert!(!world.grid().is_alive(1, 2));

        assert!(world.tick());
        assert_eq!(world.grid(), &seed);
        assert_eq!(world.generation(), 2);
    }

    #[test]
    fn paint_only_while_seeding() {
        let mut world = World::new(4, 4).unwrap();

        assert!(world.paint(1, 1));
        assert!(!world.paint(4, 0));
        assert!(world.erase(1, 1));
        assert!(world.paint(2, 2));

        world.begin();
        assert!(!world.paint(0, 0));
        assert_eq!(world.population(), 1);
    }

    #[test]
    fn pause() {
        let mut world = blinker();

        world.toggle_pause();
        assert_eq!(world.phase(), Phase::Seeding);

        world.begin();
        world.toggle_pause();
        assert!(!world.tick());

        world.toggle_pause();
        assert!(world.tick());
    }

    #[test]
    fn reset() {
        let mut world = blinker();
        world.begin();
        world.tick();

        world.reset();
        assert_eq!(world.phase(), Phase::Seeding);
        assert_eq!(world.generation(), 0);
        assert_eq!(world.population(), 0);
    }

    #[test]
    fn resize_then_tick() {
        let mut world = blinker();
        world.resize(4, 3).unwrap();
        assert_eq!(world.grid().dimensions(), (4, 3));
        assert_eq!(world.population(), 3);

        world.begin();
        assert!(world.tick());
        assert_eq!(world.grid().dimensions(), (4, 3));
    }
}
