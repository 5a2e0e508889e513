//! Library exports for amipath-cli.
//!
//! Exposes the CLI structure so the commands can be unit tested and
//! documentation can be generated from it.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
