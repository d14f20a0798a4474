//! Built-in catalog of known MCP server packages.
//!
//! The catalog supplies what a bare `mcp-config.json` entry cannot: which
//! API-key variable a server wants, a description for listings, and the
//! export line shown as guidance when the key is missing. Lookup works by
//! server name and by npm package identifier.

use serde::Serialize;

/// A known third-party MCP server package.
#[derive(Debug, Clone, Serialize)]
pub struct ServerDef {
    /// Short name, matching the conventional config key.
    pub name: &'static str,
    /// npm package identifier.
    pub package: &'static str,
    /// One-line description for listings and guidance.
    pub description: &'static str,
    /// API-key environment variable the server reads, if any.
    pub env_var: Option<&'static str>,
    /// Shell line suggested when the key is missing.
    pub env_hint: Option<&'static str>,
}

/// The built-in server definitions, in catalog order.
const SERVER_DEFS: &[ServerDef] = &[
    ServerDef {
        name: "brave-search",
        package: "@modelcontextprotocol/server-brave-search",
        description: "Web, news, and image search via the Brave Search API",
        env_var: Some("BRAVE_API_KEY"),
        env_hint: Some("export BRAVE_API_KEY=\"your-key\""),
    },
    ServerDef {
        name: "weather",
        package: "@modelcontextprotocol/server-weather",
        description: "Current conditions and forecasts via OpenWeather",
        env_var: Some("OPENWEATHER_API_KEY"),
        env_hint: Some("export OPENWEATHER_API_KEY=\"your-key\""),
    },
    ServerDef {
        name: "filesystem",
        package: "@modelcontextprotocol/server-filesystem",
        description: "Read and write files under allowed directories",
        env_var: None,
        env_hint: None,
    },
    ServerDef {
        name: "sequential-thinking",
        package: "@modelcontextprotocol/server-sequential-thinking",
        description: "Structured step-by-step reasoning tool",
        env_var: None,
        env_hint: None,
    },
    ServerDef {
        name: "puppeteer",
        package: "@modelcontextprotocol/server-puppeteer",
        description: "Browser automation through Puppeteer",
        env_var: None,
        env_hint: None,
    },
];

/// Registry of all known server packages.
#[derive(Debug, Default)]
pub struct ServerRegistry;

impl ServerRegistry {
    /// Create the registry with the built-in definitions.
    pub fn new() -> Self {
        Self
    }

    /// All definitions, in catalog order.
    pub fn all(&self) -> &'static [ServerDef] {
        SERVER_DEFS
    }

    /// Look up a definition by server name.
    pub fn get(&self, name: &str) -> Option<&'static ServerDef> {
        SERVER_DEFS.iter().find(|def| def.name == name)
    }

    /// Look up a definition by npm package identifier.
    pub fn by_package(&self, package: &str) -> Option<&'static ServerDef> {
        SERVER_DEFS.iter().find(|def| def.package == package)
    }

    /// Known server names, in catalog order.
    pub fn known_names(&self) -> Vec<&'static str> {
        SERVER_DEFS.iter().map(|def| def.name).collect()
    }
}
