//! Command-line interface for the `coge` binary

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
