//! Command-line presentation layer.
//!
//! - [`args`] - clap definitions of the command surface
//! - [`commands`] - Handlers running each command against the repositories
//! - [`table`] - Boxed table rendering
//! - [`prompt`] - Blocking confirmation prompt

pub mod args;
pub mod commands;
pub mod prompt;
pub mod table;

pub use args::Cli;
pub use commands::Reports;
pub use prompt::{Confirmer, TerminalConfirmer};
pub use table::TableRenderer;
