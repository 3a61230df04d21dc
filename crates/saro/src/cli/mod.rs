//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the saro binary.

mod classify;
mod commands;
mod serve;
mod taxonomy;

pub use classify::handle_classify;
pub use commands::{Cli, Commands};
pub use serve::handle_serve;
pub use taxonomy::handle_taxonomy;
