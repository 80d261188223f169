mod app;
mod canvas;
mod config;
mod content;
mod error;
mod graphics;
mod input;
mod math;
mod models;
mod pages;
mod pagination;
mod render;
mod rotation;
mod scene;
mod stage;
mod state;
mod terminal;
mod vertex;
mod widget;

use std::fs::File;

use clap::Parser;

use crate::app::App;
use crate::config::{Cli, Config};
use crate::error::AppError;

/// Logs go to stderr unless a file is given, since the UI owns stdout
fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &cli.log_file {
        let file = File::create(path).map_err(AppError::LogFile)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.try_init()?;
    Ok(())
}

/// Main function
fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let config = Config::try_from(&cli)?;
    log::info!("starting with {config:?}");

    App::new(config).run()
}
