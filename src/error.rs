use std::io;

use thiserror::Error;

use crate::snake::Cell;

/// Rejections raised when building a snake from explicit segments.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SnakeError {
    #[error("a snake needs at least one segment")]
    Empty,
    #[error("segment {0} lies outside the grid")]
    OutOfBounds(Cell),
    #[error("segment {0} appears more than once")]
    Overlap(Cell),
}

/// Failures surfaced by the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
