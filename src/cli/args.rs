//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Scout - readiness checks for MCP server setups.
#[derive(Debug, Parser)]
#[command(name = "scout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default mcp-config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run readiness checks (default if no command specified)
    Check(CheckArgs),

    /// Print client connection and server startup guidance
    Guide(GuideArgs),

    /// List known MCP server packages
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Seconds to wait for each spawned server probe
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    pub timeout: u64,

    /// Skip probes that spawn server processes
    #[arg(long)]
    pub no_spawn: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            json: false,
            timeout: 10,
            no_spawn: false,
        }
    }
}

/// Arguments for the `guide` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GuideArgs {
    /// Show guidance for a single server
    pub server: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
