//! Error types for pix-tui
//!
//! Wraps library errors and terminal/IO errors for unified error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Library error (configuration, media)
    #[error("{0}")]
    Pix(#[from] libpix::PixError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

impl TuiError {
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Pix(e) => e.exit_code(),
            TuiError::Terminal(_) | TuiError::Application(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
