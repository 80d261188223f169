use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::content::Route;
use crate::error::AppError;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(version, about = "A terminal portfolio with an interactive 3D island")]
pub struct Cli {
    /// Target frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Pixel width of one terminal column, used to scale pointer drags
    #[arg(long, default_value_t = 8.0)]
    pub cell_width: f64,

    /// Milliseconds without a key repeat before a held arrow key counts as released
    #[arg(long, default_value_t = 500)]
    pub key_hold_ms: u64,

    /// Start in wireframe mode
    #[arg(long)]
    pub wireframe: bool,

    /// Start with the debug overlay shown
    #[arg(long)]
    pub debug: bool,

    /// Page to open first
    #[arg(long, value_enum, default_value_t = Route::Home)]
    pub page: Route,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Validated runtime settings
#[derive(Clone, Debug)]
pub struct Config {
    pub frame_interval: Duration,
    pub cell_width: f64,
    pub key_hold: Duration,
    pub wireframe: bool,
    pub debug: bool,
    pub page: Route,
}

impl TryFrom<&Cli> for Config {
    type Error = AppError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if !(1..=240).contains(&cli.fps) {
            return Err(AppError::Config(format!(
                "fps must be between 1 and 240, got {}",
                cli.fps
            )));
        }
        if !cli.cell_width.is_finite() || cli.cell_width <= 0.0 {
            return Err(AppError::Config(format!(
                "cell width must be positive, got {}",
                cli.cell_width
            )));
        }
        if cli.key_hold_ms == 0 {
            return Err(AppError::Config("key hold timeout must be non-zero".into()));
        }

        Ok(Config {
            frame_interval: Duration::from_secs_f64(1.0 / f64::from(cli.fps)),
            cell_width: cli.cell_width,
            key_hold: Duration::from_millis(cli.key_hold_ms),
            wireframe: cli.wireframe,
            debug: cli.debug,
            page: cli.page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("islandfolio").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::try_from(&parse(&[])).unwrap();
        assert_eq!(config.cell_width, 8.0);
        assert_eq!(config.key_hold, Duration::from_millis(500));
        assert_eq!(config.page, Route::Home);
        assert!(!config.wireframe);
    }

    #[test]
    fn page_and_flags_parse() {
        let config =
            Config::try_from(&parse(&["--page", "portfolio", "--wireframe", "--fps", "30"]))
                .unwrap();
        assert_eq!(config.page, Route::Portfolio);
        assert!(config.wireframe);
        assert_eq!(config.frame_interval, Duration::from_secs_f64(1.0 / 30.0));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            Config::try_from(&parse(&["--fps", "0"])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::try_from(&parse(&["--cell-width", "0"])),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Config::try_from(&parse(&["--key-hold-ms", "0"])),
            Err(AppError::Config(_))
        ));
    }
}
