use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::CellIndex;
use crate::seed::Preset;

pub const DEFAULT_FPS: u32 = 60;

/// Past this, a frame is shorter than a millisecond and the terminal can't keep up anyway
pub const MAX_FPS: u32 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid size \"{got}\", expected WxH with non-zero W and H")]
pub struct SizeError {
    got: String,
}

/// Paint a seed with the mouse (left button paints, right button erases), then click [ Begin ]
/// or press Enter.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "paintlife",
    about = "Conway's Game of Life, painted with the mouse",
    after_help = "Keys: Enter begin, Space pause, r reset, q quit"
)]
pub struct Config {
    /// Generations per second
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_FPS as i64)
    )]
    pub fps: u32,

    /// Start from a preset instead of painting: blinker, block, beacon or glider
    #[arg(long, value_name = "NAME", value_parser = Preset::from_str)]
    pub preset: Option<Preset>,

    /// Grid size in cells [default: fit the terminal]
    #[arg(long, value_name = "WxH", value_parser = parse_size)]
    pub size: Option<(CellIndex, CellIndex)>,

    /// Write logs to PATH, filtered by RUST_LOG
    #[arg(long = "log", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            preset: None,
            size: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Time budget of a single frame
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }
}

fn parse_size(s: &str) -> Result<(CellIndex, CellIndex), SizeError> {
    let invalid = || SizeError { got: s.to_string() };

    let (w, h) = s.split_once(['x', 'X']).ok_or_else(invalid)?;
    let w: CellIndex = w.trim().parse().map_err(|_| invalid())?;
    let h: CellIndex = h.trim().parse().map_err(|_| invalid())?;

    if w == 0 || h == 0 {
        return Err(invalid());
    }

    Ok((w, h))
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::CommandFactory;
    use clap::Parser;
    use clap::error::ErrorKind;

    use super::Config;
    use super::MAX_FPS;
    use crate::seed::Preset;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("paintlife").chain(args.iter().copied()))
    }

    #[test]
    fn command() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.fps, 60);
    }

    #[test]
    fn all_flags() {
        let config = parse(&[
            "--fps", "10", "--preset", "beacon", "--size", "40x20", "--log", "life.log",
        ])
        .unwrap();

        assert_eq!(config.fps, 10);
        assert_eq!(config.preset, Some(Preset::Beacon));
        assert_eq!(config.size, Some((40, 20)));
        assert_eq!(config.log_file, Some(PathBuf::from("life.log")));
        assert_eq!(config.frame_time(), Duration::from_millis(100));
    }

    #[test]
    fn fps_is_capped() {
        let max = MAX_FPS.to_string();
        let config = parse(&["--fps", &max]).unwrap();
        assert!(!config.frame_time().is_zero());

        let err = parse(&["--fps", "2000000000"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["--fps", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&["--fps"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse(&["--size", "10"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--size", "0x4"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--preset", "gun"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--begin"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn help() {
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
    }
}
