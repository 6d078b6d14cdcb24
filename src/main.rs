use std::fs::File;
use std::io;
use std::io::Write;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::event;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paintlife::app::App;
use paintlife::app::BEGIN;
use paintlife::config::Config;
use paintlife::io::convert_event;
use paintlife::term::RawMode;
use paintlife::term::Screen;

/// The terminal belongs to the UI, so logs only go to a file.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn run<W: Write>(app: &mut App, config: &Config, stdout: &mut W) -> anyhow::Result<()> {
    let frame_time = config.frame_time();

    loop {
        let t = Instant::now();

        // Handle events for at most one frame
        loop {
            let remaining = frame_time.saturating_sub(t.elapsed());
            if !event::poll(remaining)? {
                break;
            }

            if let Some(event) = convert_event(event::read()?, &BEGIN) {
                if app.handle(event).is_break() {
                    return Ok(());
                }
            }

            // at least one event is read per frame, however short
            if remaining.is_zero() {
                break;
            }
        }

        app.tick();
        let frame = app.frame();

        queue!(stdout, cursor::MoveTo(0, 0))?;
        for line in frame.lines() {
            queue!(
                stdout,
                terminal::Clear(terminal::ClearType::CurrentLine),
                style::Print(line),
                cursor::MoveToNextLine(1)
            )?;
        }
        stdout.flush()?;
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    init_logging(&config)?;

    let (cols, rows) = terminal::size().context("Failed to read the terminal size")?;
    let mut app = App::new(&config, cols, rows).context("Terminal is too small")?;

    info!(cols, rows, fps = config.fps, preset = ?config.preset, "Starting");

    let res = {
        // Dropped in reverse order: the screen is restored before raw mode is disabled
        let _raw = RawMode::enable().context("Failed to enable raw mode")?;
        let mut screen = Screen::enter(io::stdout()).context("Failed to set up the terminal")?;

        run(&mut app, &config, screen.out())
    };

    info!(generation = app.world.generation(), "Exiting");

    res
}
