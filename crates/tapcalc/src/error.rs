//! Process-level errors for the binary.
//!
//! The calculator core has no error paths; everything that can fail lives
//! at the terminal boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the event loop and terminal setup.
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal setup, teardown, draw, or event read failed.
    #[error("terminal I/O: {0}")]
    Io(#[from] std::io::Error),

    /// The `--log-file` path could not be opened for writing.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        /// The path passed on the command line.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
