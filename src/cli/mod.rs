//! Command-line interface.

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, GuideArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
