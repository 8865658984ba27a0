//! Presentation layer for deep-research-client
//!
//! This crate contains CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::artifacts::ArtifactCollector;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
