//! Scout - readiness checks for MCP server setups.
//!
//! Scout replaces ad-hoc "is my MCP setup working" shell scripts with a
//! declarative probe plan and a single aggregated readiness report. It
//! checks configuration files, API-key environment variables, installed
//! server packages, and whether the external server processes respond to
//! a help probe, then prints what to fix next.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `mcp-config.json` loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`plan`] - Probe plan assembly from config and catalog
//! - [`probe`] - Probe specs, the sequential orchestrator, and reports
//! - [`registry`] - Built-in catalog of known MCP server packages
//! - [`shell`] - External process execution
//! - [`ui`] - Terminal output, spinners, and themes
//!
//! # Example
//!
//! ```
//! use scout::probe::{Orchestrator, ProbeSpec};
//! use std::collections::HashMap;
//!
//! let specs = vec![ProbeSpec::env_var("Brave API key", "BRAVE_API_KEY")];
//! let env: HashMap<String, String> =
//!     [("BRAVE_API_KEY".to_string(), "key".to_string())].into();
//!
//! let report = Orchestrator::new(std::path::Path::new("."))
//!     .run(&specs, &env)
//!     .unwrap();
//! assert!(!report.is_blocked());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod plan;
pub mod probe;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{Result, ScoutError};
