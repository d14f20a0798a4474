//! Guide command implementation.
//!
//! `scout guide` prints operator guidance: how to launch the configured
//! servers, a ready-to-paste MCP client configuration block, the tools
//! each server exposes, and the API keys to export. With a server name it
//! narrows to that server.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::args::GuideArgs;
use crate::config::{config_path, load_config_if_present, McpConfig, ServerEntry};
use crate::error::{Result, ScoutError};
use crate::registry::ServerRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The guide command implementation.
pub struct GuideCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: GuideArgs,
}

impl GuideCommand {
    /// Create a new guide command.
    pub fn new(project_root: &Path, config_override: Option<PathBuf>, args: GuideArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            args,
        }
    }

    /// The servers to describe: the parsed config when present, registry
    /// defaults otherwise, optionally narrowed to one server.
    fn resolve_servers(&self, registry: &ServerRegistry) -> Result<McpConfig> {
        let config_file = config_path(&self.project_root, self.config_override.as_deref());
        let mut config = match load_config_if_present(&config_file)? {
            Some(config) if !config.servers.is_empty() => config,
            _ => default_config(registry),
        };

        if let Some(name) = &self.args.server {
            let Some(entry) = config.servers.remove(name) else {
                return Err(ScoutError::UnknownServer { name: name.clone() });
            };
            config.servers = BTreeMap::from([(name.clone(), entry)]);
        }

        Ok(config)
    }
}

impl Command for GuideCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = ServerRegistry::new();
        let config = self.resolve_servers(&registry)?;

        ui.show_header("Scout - Client Guide");

        ui.message("To start the servers:");
        for (name, entry) in &config.servers {
            ui.message(&format!("  {}: {} {}", name, entry.command, entry.args.join(" ")));
        }
        ui.message("");

        ui.message("Add this to your MCP client configuration:");
        let snippet =
            serde_json::to_string_pretty(&config).map_err(anyhow::Error::from)?;
        ui.message(&snippet);
        ui.message("");

        ui.message("Available tools:");
        for (name, entry) in &config.servers {
            let description = entry
                .package()
                .and_then(|pkg| registry.by_package(pkg))
                .map(|def| def.description)
                .unwrap_or("See the package's own documentation");
            ui.message(&format!("  - {}: {}", name, description));
        }

        let exports: Vec<&str> = config
            .servers
            .values()
            .filter_map(|entry| entry.package())
            .filter_map(|pkg| registry.by_package(pkg))
            .filter_map(|def| def.env_hint)
            .collect();
        if !exports.is_empty() {
            ui.message("");
            ui.message("Remember to set the API keys:");
            for hint in exports {
                ui.message(&format!("  {}", hint));
            }
        }

        ui.message("");
        ui.show_hint("Run `scout check` to verify the servers are reachable");

        Ok(CommandResult::success())
    }
}

/// Registry-shaped configuration used when no config file exists:
/// every known server, launched through npx, with placeholder keys.
fn default_config(registry: &ServerRegistry) -> McpConfig {
    let servers = registry
        .all()
        .iter()
        .map(|def| {
            let env = def
                .env_var
                .map(|var| BTreeMap::from([(var.to_string(), "your-key".to_string())]))
                .unwrap_or_default();
            let entry = ServerEntry {
                command: "npx".to_string(),
                args: vec!["-y".to_string(), def.package.to_string()],
                env,
            };
            (def.name.to_string(), entry)
        })
        .collect();
    McpConfig { servers }
}
