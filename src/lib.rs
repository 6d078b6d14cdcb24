pub mod app;
pub mod button;
pub mod camera;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod rule_set;
pub mod seed;
pub mod stepper;
pub mod term;
pub mod world;

pub type ScreenSize = u16;
pub type CellIndex = usize;
