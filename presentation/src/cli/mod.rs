//! Command-line interface definitions.

pub mod commands;

pub use commands::{Cli, OutputFormat};
