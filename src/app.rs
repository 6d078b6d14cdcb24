use std::ops::ControlFlow;

use tracing::debug;
use tracing::warn;

use crate::ScreenSize;
use crate::button::Button;
use crate::camera::Camera;
use crate::config::Config;
use crate::events::Event;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::world::Phase;
use crate::world::World;

/// Terminal rows taken by the status line above the grid
pub const HUD_ROWS: ScreenSize = 1;

pub const BEGIN: Button = Button::new(0, 0, "Begin");

/// Everything that's shown on the terminal: the world, the camera looking at it and the status
/// line. Terminal IO itself is left to the caller.
pub struct App {
    pub world: World,
    camera: Camera,

    /// Terminal width, the status line is cut to it
    cols: ScreenSize,

    /// Whether the grid size follows the terminal
    fit_terminal: bool,
}

impl App {
    /// Build the app for a terminal of `cols x rows` characters
    pub fn new(config: &Config, cols: ScreenSize, rows: ScreenSize) -> Result<Self, GridError> {
        let view_rows = rows.saturating_sub(HUD_ROWS);
        let camera = Camera::new(cols, view_rows);

        let (width, height) = config
            .size
            .unwrap_or_else(|| Camera::cell_size(cols, view_rows));

        let mut seed = Grid::new(width, height)?;
        if let Some(preset) = config.preset {
            preset.stamp(&mut seed);
        }

        let mut world = World::with_seed(seed);

        // Presets skip the painting phase
        if config.preset.is_some() {
            world.begin();
        }

        Ok(Self {
            world,
            camera,
            cols,
            fit_terminal: config.size.is_none(),
        })
    }

    pub fn handle(&mut self, event: Event) -> ControlFlow<()> {
        match event {
            Event::Exit => return ControlFlow::Break(()),
            Event::Begin => self.world.begin(),
            Event::TogglePause => self.world.toggle_pause(),
            Event::Reset => self.world.reset(),
            Event::Paint { col, row } => self.brush(col, row, true),
            Event::Erase { col, row } => self.brush(col, row, false),
            Event::Resize { cols, rows } => self.resize(cols, rows),
        }

        ControlFlow::Continue(())
    }

    /// Advance the world by one frame
    pub fn tick(&mut self) -> bool {
        self.world.tick()
    }

    /// Render the status line followed by the grid
    pub fn frame(&mut self) -> String {
        self.camera.draw(self.world.grid());

        let mut frame = self.status_line();
        frame.push('\n');
        frame.push_str(self.camera.render());

        frame
    }

    /// Button, phase and counters, cut to the terminal width so it never wraps into the grid
    pub fn status_line(&self) -> String {
        let phase = match self.world.phase() {
            Phase::Seeding => "seeding",
            Phase::Running => "running",
            Phase::Paused => "paused",
        };

        format!(
            "{} {} | generation {} | population {}",
            BEGIN.render(),
            phase,
            self.world.generation(),
            self.world.population()
        )
        .chars()
        .take(self.cols as usize)
        .collect()
    }

    fn brush(&mut self, col: ScreenSize, row: ScreenSize, alive: bool) {
        let Some(row) = row.checked_sub(HUD_ROWS) else {
            return;
        };

        let Some((x, y, w, h)) = self.camera.cells_under(col, row) else {
            return;
        };

        let n = self.world.paint_rect(x, y, w, h, alive);
        debug!(x, y, alive, n, "Brush");
    }

    fn resize(&mut self, cols: ScreenSize, rows: ScreenSize) {
        let view_rows = rows.saturating_sub(HUD_ROWS);
        self.camera.resize(cols, view_rows);
        self.cols = cols;

        if !self.fit_terminal {
            return;
        }

        let (width, height) = Camera::cell_size(cols, view_rows);
        if let Err(e) = self.world.resize(width, height) {
            warn!("Keeping the current grid: {e}");
        }
    }
}
