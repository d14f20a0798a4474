//! Configuration schema for `mcp-config.json`.
//!
//! The file uses the shape MCP clients already understand: a `mcpServers`
//! map from server name to launch description. Servers are stored in a
//! `BTreeMap` so everything derived from the config (probe order, rendered
//! lists) is deterministic regardless of JSON key order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parsed `mcp-config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct McpConfig {
    /// Configured servers, keyed by name.
    #[serde(rename = "mcpServers", default)]
    pub servers: BTreeMap<String, ServerEntry>,
}

/// One configured server: how to launch it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Executable to spawn (typically `npx`).
    pub command: String,

    /// Arguments passed to the executable.
    #[serde(default)]
    pub args: Vec<String>,

    /// Environment variables the server expects at launch.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl ServerEntry {
    /// The npm package this entry launches, when launched through a
    /// package runner: the first argument that is not a flag.
    ///
    /// `npx -y @modelcontextprotocol/server-weather` resolves to the
    /// package; a bare binary invocation resolves to `None`.
    pub fn package(&self) -> Option<&str> {
        if self.command != "npx" {
            return None;
        }
        self.args
            .iter()
            .map(String::as_str)
            .find(|arg| !arg.starts_with('-'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> McpConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_dual_server_config() {
        let config = parse(
            r#"{
              "mcpServers": {
                "brave-search": {
                  "command": "npx",
                  "args": ["-y", "@modelcontextprotocol/server-brave-search"],
                  "env": { "BRAVE_API_KEY": "placeholder" }
                },
                "weather": {
                  "command": "npx",
                  "args": ["-y", "@modelcontextprotocol/server-weather"],
                  "env": { "OPENWEATHER_API_KEY": "placeholder" }
                }
              }
            }"#,
        );

        assert_eq!(config.servers.len(), 2);
        let brave = &config.servers["brave-search"];
        assert_eq!(brave.command, "npx");
        assert!(brave.env.contains_key("BRAVE_API_KEY"));
    }

    #[test]
    fn servers_iterate_in_sorted_name_order() {
        let config = parse(
            r#"{
              "mcpServers": {
                "weather": { "command": "npx", "args": [] },
                "brave-search": { "command": "npx", "args": [] }
              }
            }"#,
        );

        let names: Vec<_> = config.servers.keys().cloned().collect();
        assert_eq!(names, ["brave-search", "weather"]);
    }

    #[test]
    fn args_and_env_default_to_empty() {
        let config = parse(r#"{ "mcpServers": { "fs": { "command": "mcp-fs" } } }"#);
        let entry = &config.servers["fs"];
        assert!(entry.args.is_empty());
        assert!(entry.env.is_empty());
    }

    #[test]
    fn missing_servers_key_defaults_to_empty() {
        let config = parse("{}");
        assert!(config.servers.is_empty());
    }

    #[test]
    fn package_skips_runner_flags() {
        let entry = ServerEntry {
            command: "npx".to_string(),
            args: vec![
                "-y".to_string(),
                "@modelcontextprotocol/server-brave-search".to_string(),
            ],
            env: BTreeMap::new(),
        };
        assert_eq!(
            entry.package(),
            Some("@modelcontextprotocol/server-brave-search")
        );
    }

    #[test]
    fn package_is_none_for_direct_binaries() {
        let entry = ServerEntry {
            command: "mcp-filesystem".to_string(),
            args: vec!["/tmp".to_string()],
            env: BTreeMap::new(),
        };
        assert_eq!(entry.package(), None);
    }

    #[test]
    fn package_is_none_when_only_flags_present() {
        let entry = ServerEntry {
            command: "npx".to_string(),
            args: vec!["-y".to_string()],
            env: BTreeMap::new(),
        };
        assert_eq!(entry.package(), None);
    }
}
