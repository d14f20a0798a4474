//! Probe specifications.
//!
//! A [`ProbeSpec`] describes one readiness check against one dependency:
//! a file, an environment variable, an installed package, or an external
//! process. Specs are declarative data; the orchestrator interprets them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// What a probe checks, and where.
///
/// Each variant carries its own target. `PackageInstalled` names an npm
/// package resolved under the project's `node_modules`; `ProcessProbe`
/// names an executable plus the arguments to run it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeKind {
    /// A file or directory must exist. Relative paths resolve against the
    /// project root.
    FileExists { path: PathBuf },

    /// An environment variable must be set to a non-empty value. Always
    /// soft: absence produces a warning, never a blocking failure,
    /// regardless of `required`.
    EnvVar { var: String },

    /// An npm package must be present under `node_modules/`.
    PackageInstalled { package: String },

    /// Spawn an external command and classify reachability from its exit
    /// code and captured output.
    ProcessProbe { command: String, args: Vec<String> },
}

impl ProbeKind {
    /// Short label for the kind, used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FileExists { .. } => "file",
            Self::EnvVar { .. } => "env",
            Self::PackageInstalled { .. } => "package",
            Self::ProcessProbe { .. } => "process",
        }
    }
}

/// One declarative readiness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeSpec {
    /// Human-readable label (e.g., "Brave Search server").
    pub name: String,

    /// What to check.
    #[serde(flatten)]
    pub kind: ProbeKind,

    /// Whether absence blocks readiness (`fail`) or only warns.
    pub required: bool,

    /// Suggested next action shown in the guidance section when this probe
    /// does not pass. A derived default is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ProbeSpec {
    /// A required file-existence probe.
    pub fn file_exists(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            kind: ProbeKind::FileExists { path: path.into() },
            required: true,
            hint: None,
        }
    }

    /// An environment-variable probe. Soft by construction.
    pub fn env_var(name: impl Into<String>, var: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ProbeKind::EnvVar { var: var.into() },
            required: false,
            hint: None,
        }
    }

    /// A package-installed probe.
    pub fn package_installed(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ProbeKind::PackageInstalled {
                package: package.into(),
            },
            required: false,
            hint: None,
        }
    }

    /// A process probe spawning `command` with `args`.
    pub fn process_probe(
        name: impl Into<String>,
        command: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ProbeKind::ProcessProbe {
                command: command.into(),
                args,
            },
            required: true,
            hint: None,
        }
    }

    /// Set whether absence blocks readiness.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Attach a suggested next action for guidance output.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Check that the spec is evaluable.
    ///
    /// A malformed spec is a configuration error and aborts the whole run
    /// before any probe executes.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ScoutError::InvalidProbe {
                name: self.name.clone(),
                message: "probe name is empty".into(),
            });
        }
        let target_error = match &self.kind {
            ProbeKind::FileExists { path } if path.as_os_str().is_empty() => {
                Some("file path is empty")
            }
            ProbeKind::EnvVar { var } if var.trim().is_empty() => {
                Some("environment variable name is empty")
            }
            ProbeKind::PackageInstalled { package } if package.trim().is_empty() => {
                Some("package identifier is empty")
            }
            ProbeKind::ProcessProbe { command, .. } if command.trim().is_empty() => {
                Some("probe command is empty")
            }
            _ => None,
        };
        match target_error {
            Some(message) => Err(ScoutError::InvalidProbe {
                name: self.name.clone(),
                message: message.into(),
            }),
            None => Ok(()),
        }
    }
}
