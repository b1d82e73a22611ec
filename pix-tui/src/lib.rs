//! pix-tui library
//!
//! Exports the app, rendering and service bridge for the binary and tests.

pub mod app;
pub mod error;
pub mod services;
pub mod terminal;
pub mod ui;

// Re-export commonly used types
pub use app::{App, Effect, Focus};
pub use error::{Result, TuiError};
