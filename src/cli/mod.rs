//! Command-line front-end: argument definitions and one handler per command.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, ElementAction, ElementKindArg, NudgeAction};
