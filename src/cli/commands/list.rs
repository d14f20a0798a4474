//! List command implementation.
//!
//! `scout list` shows the built-in server catalog and marks which entries
//! appear in the local configuration.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::{config_path, load_config_if_present, McpConfig};
use crate::error::Result;
use crate::registry::{ServerDef, ServerRegistry};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ListArgs,
}

/// One catalog row, as rendered or serialized.
#[derive(Debug, Serialize)]
struct CatalogRow {
    #[serde(flatten)]
    def: &'static ServerDef,
    configured: bool,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_override: Option<PathBuf>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            args,
        }
    }

    fn rows(&self, registry: &ServerRegistry, config: Option<&McpConfig>) -> Vec<CatalogRow> {
        registry
            .all()
            .iter()
            .map(|def| CatalogRow {
                def,
                configured: config.is_some_and(|c| {
                    c.servers
                        .values()
                        .any(|entry| entry.package() == Some(def.package))
                }),
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config_file = config_path(&self.project_root, self.config_override.as_deref());
        let config = load_config_if_present(&config_file)?;
        let registry = ServerRegistry::new();
        let rows = self.rows(&registry, config.as_ref());

        if self.args.json {
            let rendered = serde_json::to_string_pretty(&rows).map_err(anyhow::Error::from)?;
            println!("{}", rendered);
            return Ok(CommandResult::success());
        }

        ui.show_header("Scout - Known Servers");
        for row in &rows {
            let marker = if row.configured { "●" } else { "○" };
            ui.message(&format!(
                "  {} {:<20} {}",
                marker, row.def.name, row.def.package
            ));
            ui.message(&format!("      {}", row.def.description));
            if let Some(var) = row.def.env_var {
                ui.message(&format!("      requires {}", var));
            }
        }
        ui.message("");
        ui.show_hint("● configured in mcp-config.json, ○ not configured");

        Ok(CommandResult::success())
    }
}
