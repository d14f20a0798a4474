//! Probe plan assembly.
//!
//! Turns the parsed configuration and the built-in server catalog into the
//! ordered [`ProbeSpec`] list the orchestrator runs. The order is fixed:
//! configuration files first, then per server (sorted by name) its
//! environment variables, its npm package, and finally the process probe.
//! Declaring the checks here keeps the per-server logic out of the
//! orchestrator; a new server needs a config entry, not new code.

use std::collections::HashSet;
use std::path::Path;

use crate::config::{McpConfig, CONFIG_FILE, PACKAGE_MANIFEST};
use crate::probe::ProbeSpec;
use crate::registry::ServerRegistry;

/// Options controlling plan assembly.
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    /// Include process probes. Disabled for offline runs.
    pub spawn_probes: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self { spawn_probes: true }
    }
}

/// Build the ordered probe list for a project.
///
/// `config_file` is the path the configuration was (or would have been)
/// loaded from. With no parsed config (file missing), the plan degrades
/// to the two required file probes; the failing config probe then blocks
/// the report.
pub fn build(
    config_file: &Path,
    config: Option<&McpConfig>,
    registry: &ServerRegistry,
    options: PlanOptions,
) -> Vec<ProbeSpec> {
    let config_name = config_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE.to_string());
    let mut specs = vec![
        ProbeSpec::file_exists("Configuration file", config_file)
            .with_hint(format!("Create {} describing your MCP servers", config_name)),
        ProbeSpec::file_exists("Package manifest", PACKAGE_MANIFEST)
            .with_hint("Run: npm init -y, then add the server packages"),
    ];

    let Some(config) = config else {
        return specs;
    };

    let mut seen_vars = HashSet::new();
    for (server_name, entry) in &config.servers {
        let def = entry.package().and_then(|pkg| registry.by_package(pkg));

        // Env vars declared on the entry plus the catalog's known API key,
        // first occurrence wins across the whole plan.
        let known_var = def.and_then(|d| d.env_var);
        let mut vars: Vec<&str> = entry.env.keys().map(String::as_str).collect();
        if let Some(known) = known_var {
            if !vars.contains(&known) {
                vars.push(known);
            }
        }
        for var in vars {
            if !seen_vars.insert(var.to_string()) {
                continue;
            }
            let mut spec = ProbeSpec::env_var(format!("{} environment variable", var), var);
            if known_var == Some(var) {
                if let Some(hint) = def.and_then(|d| d.env_hint) {
                    spec = spec.with_hint(format!("Set it with: {}", hint));
                }
            }
            specs.push(spec);
        }

        // npx fetches missing packages on demand, so a local install is
        // only a warning.
        if let Some(package) = entry.package() {
            specs.push(
                ProbeSpec::package_installed(format!("{} package", package), package)
                    .with_hint("Run: npm install"),
            );
        }

        if options.spawn_probes {
            let mut args = entry.args.clone();
            args.push("--help".to_string());
            specs.push(ProbeSpec::process_probe(
                format!("{} server", server_name),
                &entry.command,
                args,
            ));
        }
    }

    specs
}
