//! Configuration loading and parsing.

pub mod loader;
pub mod schema;

pub use loader::{config_path, load_config, load_config_if_present, CONFIG_FILE, PACKAGE_MANIFEST};
pub use schema::{McpConfig, ServerEntry};
