//! Crate-level error types.

use std::fmt;

/// Errors produced by islandfolio.
#[derive(Debug)]
pub enum AppError {
    /// Terminal I/O failure.
    Io(std::io::Error),
    /// Command line values out of range.
    Config(String),
    /// The log file could not be created.
    LogFile(std::io::Error),
    /// A global logger was already installed.
    Logger(log::SetLoggerError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "terminal I/O error: {e}"),
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::LogFile(e) => write!(f, "failed to open log file: {e}"),
            Self::Logger(e) => write!(f, "failed to install logger: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::LogFile(e) => Some(e),
            Self::Logger(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Logger(e)
    }
}
