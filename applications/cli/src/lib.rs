//! Rekon CLI Library
//!
//! Reconciles a Rekordbox XML library against the audio files on disk:
//! duplicate takes collapse onto the best rated one, tracks without a file
//! are dropped and every `Location` points at the file that was found.
//!
//! This library exposes the run pipeline and configuration for testing.

pub mod cli;
pub mod config;
pub mod output;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use cli::Cli;
pub use config::{ConfigError, ConfigOverrides, RekonConfig};
pub use pipeline::{run, RunOptions};
