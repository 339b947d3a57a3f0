//! Demo error types.

use thiserror::Error;

/// Errors that end the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Terminal setup, drawing or event polling failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file logger could not be installed.
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
