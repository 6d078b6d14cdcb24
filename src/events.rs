use crate::ScreenSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Bring to life the cells under the terminal character at `(col, row)`
    Paint { col: ScreenSize, row: ScreenSize },

    /// Kill the cells under the terminal character at `(col, row)`
    Erase { col: ScreenSize, row: ScreenSize },

    /// Stop seeding and start the simulation
    Begin,

    TogglePause,

    /// Clear the world and go back to seeding
    Reset,

    /// The terminal changed size
    Resize { cols: ScreenSize, rows: ScreenSize },

    /// Exit the application
    Exit,
}
