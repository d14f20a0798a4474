//! Check command implementation.
//!
//! `scout check` assembles the probe plan for the project, runs the
//! readiness orchestrator, and renders the report. Exit code is zero
//! unless a required probe failed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::CheckArgs;
use crate::config::{config_path, load_config_if_present};
use crate::error::Result;
use crate::plan::{self, PlanOptions};
use crate::probe::{Orchestrator, Report, SystemEnv};
use crate::registry::ServerRegistry;
use crate::ui::{ProgressSpinner, SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_override: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run the probes and collect a report, updating the spinner as each
    /// probe starts. Machine-readable modes suppress the spinner so stdout
    /// stays clean.
    fn run_probes(&self, ui: &mut dyn UserInterface, show_progress: bool) -> Result<Report> {
        let config_file = config_path(&self.project_root, self.config_override.as_deref());
        // A missing config only degrades the plan; its file probe reports
        // the absence. A malformed config is fatal.
        let config = load_config_if_present(&config_file)?;

        let registry = ServerRegistry::new();
        let specs = plan::build(
            &config_file,
            config.as_ref(),
            &registry,
            PlanOptions {
                spawn_probes: !self.args.no_spawn,
            },
        );

        let orchestrator = Orchestrator::new(&self.project_root)
            .with_probe_timeout(Duration::from_secs(self.args.timeout));

        let total = specs.len();
        let mut spinner: Box<dyn SpinnerHandle> = if show_progress {
            ui.start_spinner(&display::probing_banner(total))
        } else {
            Box::new(ProgressSpinner::hidden())
        };
        let report = orchestrator.run_observed(&specs, &SystemEnv, |index, spec| {
            spinner.set_message(&format!("Probing {} ({}/{})", spec.name, index + 1, total));
        });
        match &report {
            Ok(_) => spinner.clear(),
            Err(err) => spinner.finish_error(&err.to_string()),
        }
        report
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let report = self.run_probes(ui, false)?;
            let rendered = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", rendered);
            return Ok(exit_result(&report));
        }

        ui.show_header("Scout - Readiness");
        let report = self.run_probes(ui, true)?;
        display::show_report(ui, &report);

        if !report.is_blocked() {
            ui.message("");
            ui.show_hint("Run `scout guide` for client connection examples");
        }

        Ok(exit_result(&report))
    }
}

fn exit_result(report: &Report) -> CommandResult {
    if report.is_blocked() {
        CommandResult::failure(report.exit_code())
    } else {
        CommandResult::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const DUAL_CONFIG: &str = r#"{
      "mcpServers": {
        "brave-search": {
          "command": "npx",
          "args": ["-y", "@modelcontextprotocol/server-brave-search"]
        },
        "weather": {
          "command": "npx",
          "args": ["-y", "@modelcontextprotocol/server-weather"]
        }
      }
    }"#;

    fn no_spawn_args() -> CheckArgs {
        CheckArgs {
            no_spawn: true,
            ..CheckArgs::default()
        }
    }

    fn setup_project(config: Option<&str>, manifest: bool) -> TempDir {
        let temp = TempDir::new().unwrap();
        if let Some(config) = config {
            fs::write(temp.path().join("mcp-config.json"), config).unwrap();
        }
        if manifest {
            fs::write(temp.path().join("package.json"), "{}").unwrap();
        }
        temp
    }

    #[test]
    fn missing_config_blocks_and_fails() {
        let temp = setup_project(None, false);
        let mut ui = MockUI::new();
        let cmd = CheckCommand::new(temp.path(), None, no_spawn_args());

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Configuration file"));
        assert!(ui.has_message("Not ready"));
    }

    #[test]
    fn present_files_with_unset_keys_degrade_but_succeed() {
        let temp = setup_project(Some(DUAL_CONFIG), true);
        let mut ui = MockUI::new();
        let cmd = CheckCommand::new(temp.path(), None, no_spawn_args());

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert!(ui.has_success("Configuration file"));
        assert!(ui.has_success("Package manifest"));
        // API keys come from the real environment in this command; unset
        // keys warn but never block.
        assert!(ui.has_message("Next steps:") || ui.has_message("All readiness checks passed"));
    }

    #[test]
    fn malformed_config_is_fatal() {
        let temp = setup_project(Some("{ nope"), true);
        let mut ui = MockUI::new();
        let cmd = CheckCommand::new(temp.path(), None, no_spawn_args());

        assert!(cmd.execute(&mut ui).is_err());
    }

    #[test]
    fn guide_hint_shown_when_not_blocked() {
        let temp = setup_project(Some(DUAL_CONFIG), true);
        let mut ui = MockUI::new();
        let cmd = CheckCommand::new(temp.path(), None, no_spawn_args());

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_hint("scout guide"));
    }

    #[test]
    fn config_override_is_probed_instead() {
        let temp = setup_project(None, true);
        fs::write(temp.path().join("alt.json"), DUAL_CONFIG).unwrap();
        let mut ui = MockUI::new();
        let cmd = CheckCommand::new(
            temp.path(),
            Some(PathBuf::from("alt.json")),
            no_spawn_args(),
        );

        let result = cmd.execute(&mut ui).unwrap();

        // The file probe follows the override, so the run is not blocked
        // by the absent default config.
        assert!(result.success);
        assert!(ui.has_success("Configuration file"));
        assert!(ui.has_warning("BRAVE_API_KEY") || ui.has_success("BRAVE_API_KEY"));
    }

    #[test]
    fn spinner_runs_during_probes() {
        let temp = setup_project(Some(DUAL_CONFIG), true);
        let mut ui = MockUI::new();
        let cmd = CheckCommand::new(temp.path(), None, no_spawn_args());

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.spinners().len(), 1);
        assert!(ui.spinners()[0].contains("readiness checks"));
    }
}
