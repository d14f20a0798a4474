//! Sequential readiness orchestration.
//!
//! The orchestrator evaluates an ordered list of probe specs, one at a
//! time, and aggregates the outcomes into a single [`Report`]. A probe
//! never starts before the previous probe's result is final, including any
//! spawned process's exit; guidance text downstream depends on counts of
//! earlier results, so the ordering is a guarantee, not an accident. One
//! probe's failure never stops evaluation of the rest.
//!
//! Environment variables are read through the injected [`EnvLookup`]
//! capability so tests can run against a plain map instead of mutating the
//! process environment.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;
use crate::shell;

use super::outcome::{ProbeResult, ProbeStatus, Report};
use super::spec::{ProbeKind, ProbeSpec};

/// Output fragments that mark a process as reachable even when it exits
/// non-zero: the external server packages print usage text when handed an
/// unrecognized flag, and that is the closest thing to a health check they
/// support.
const USAGE_MARKERS: &[&str] = &["Usage", "usage", "help"];

/// Default ceiling on how long one process probe may run.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum length of a diagnostic line carried into a result detail.
const DETAIL_MAX_LEN: usize = 200;

/// Environment variable lookup capability.
///
/// Injected into the orchestrator so evaluation never reads ambient
/// process state directly.
pub trait EnvLookup {
    /// The raw value of `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// [`EnvLookup`] backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvLookup for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Evaluates probe specs in order and aggregates a readiness report.
pub struct Orchestrator {
    project_root: PathBuf,
    probe_timeout: Duration,
}

impl Orchestrator {
    /// Create an orchestrator rooted at the given project directory.
    ///
    /// Relative file and package targets resolve against this root.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Override the per-process-probe wait ceiling.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Evaluate all specs in declared order and produce a report.
    ///
    /// Per-probe failures of any kind are folded into the report; the only
    /// error is a malformed spec, which aborts before any probe executes
    /// and yields no partial report.
    pub fn run(&self, specs: &[ProbeSpec], env: &dyn EnvLookup) -> Result<Report> {
        self.run_observed(specs, env, |_, _| {})
    }

    /// Like [`run`](Self::run), with a callback fired before each probe
    /// starts. The callback receives the probe index and spec; it is
    /// display-only and cannot influence evaluation.
    pub fn run_observed<O>(
        &self,
        specs: &[ProbeSpec],
        env: &dyn EnvLookup,
        mut observe: O,
    ) -> Result<Report>
    where
        O: FnMut(usize, &ProbeSpec),
    {
        // Fail fast on configuration errors: no partial report.
        for spec in specs {
            spec.validate()?;
        }

        let mut results = Vec::with_capacity(specs.len());
        for (index, spec) in specs.iter().enumerate() {
            observe(index, spec);
            let result = self.evaluate(spec, env);
            tracing::debug!(
                probe = %spec.name,
                kind = spec.kind.label(),
                status = ?result.status,
                "probe evaluated"
            );
            results.push(result);
        }

        Ok(Report::new(results))
    }

    fn evaluate(&self, spec: &ProbeSpec, env: &dyn EnvLookup) -> ProbeResult {
        match &spec.kind {
            ProbeKind::FileExists { path } => self.evaluate_file(spec, path),
            ProbeKind::EnvVar { var } => Self::evaluate_env_var(spec, var, env),
            ProbeKind::PackageInstalled { package } => self.evaluate_package(spec, package),
            ProbeKind::ProcessProbe { command, args } => self.evaluate_process(spec, command, args),
        }
    }

    fn evaluate_file(&self, spec: &ProbeSpec, path: &Path) -> ProbeResult {
        let full_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        };
        if full_path.exists() {
            ProbeResult::new(spec, ProbeStatus::Ok, None)
        } else {
            ProbeResult::new(
                spec,
                absence_status(spec),
                Some(format!("not found at {}", full_path.display())),
            )
        }
    }

    fn evaluate_package(&self, spec: &ProbeSpec, package: &str) -> ProbeResult {
        let package_dir = self.project_root.join("node_modules").join(package);
        if package_dir.exists() {
            ProbeResult::new(spec, ProbeStatus::Ok, None)
        } else {
            ProbeResult::new(
                spec,
                absence_status(spec),
                Some(format!("node_modules/{} not found", package)),
            )
        }
    }

    /// Env vars are always soft: guidance is printed instead of blocking.
    fn evaluate_env_var(spec: &ProbeSpec, var: &str, env: &dyn EnvLookup) -> ProbeResult {
        match env.var(var) {
            Some(value) if !value.is_empty() => ProbeResult::new(spec, ProbeStatus::Ok, None),
            Some(_) => ProbeResult::new(
                spec,
                ProbeStatus::Warn,
                Some(format!("{} is set to an empty value", var)),
            ),
            None => ProbeResult::new(
                spec,
                ProbeStatus::Warn,
                Some(format!("{} is not set", var)),
            ),
        }
    }

    fn evaluate_process(&self, spec: &ProbeSpec, command: &str, args: &[String]) -> ProbeResult {
        match shell::execute_probe(command, args, self.probe_timeout) {
            Ok(output) if output.success() => ProbeResult::new(spec, ProbeStatus::Ok, None),
            Ok(output) if output.timed_out => ProbeResult::new(
                spec,
                ProbeStatus::Fail,
                Some(format!(
                    "timed out after {}s",
                    self.probe_timeout.as_secs()
                )),
            ),
            Ok(output) => {
                // Packages that print help text on an unrecognized flag are
                // reachable, whatever their exit code.
                if USAGE_MARKERS.iter().any(|m| output.output.contains(m)) {
                    let detail = output
                        .exit_code
                        .map(|code| format!("help text detected (exit code {})", code));
                    ProbeResult::new(spec, ProbeStatus::Ok, detail)
                } else {
                    let mut detail = match output.exit_code {
                        Some(code) => format!("exited with code {}", code),
                        None => "terminated by signal".to_string(),
                    };
                    if let Some(line) = last_output_line(&output.output) {
                        detail.push_str(": ");
                        detail.push_str(&line);
                    }
                    ProbeResult::new(spec, ProbeStatus::Fail, Some(detail))
                }
            }
            // Spawn errors (binary missing, permission denied) are captured
            // verbatim, never thrown.
            Err(err) => ProbeResult::new(spec, ProbeStatus::Fail, Some(err.to_string())),
        }
    }
}

/// Status for an absent file or package: failure when required, warning
/// otherwise.
fn absence_status(spec: &ProbeSpec) -> ProbeStatus {
    if spec.required {
        ProbeStatus::Fail
    } else {
        ProbeStatus::Warn
    }
}

/// The last non-empty output line, truncated for display in a detail.
fn last_output_line(output: &str) -> Option<String> {
    let line = output.lines().rev().find(|l| !l.trim().is_empty())?;
    let line = line.trim();
    if line.len() > DETAIL_MAX_LEN {
        let mut end = DETAIL_MAX_LEN;
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        Some(format!("{}...", &line[..end]))
    } else {
        Some(line.to_string())
    }
}
