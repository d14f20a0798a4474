//! Next-step guidance derived from a report.
//!
//! One suggested action per non-passing result, in result order. The
//! numbering shown to the operator is applied at render time; nothing here
//! is stored state.

use super::outcome::{ProbeStatus, Report};
use super::spec::{ProbeKind, ProbeSpec};

/// Suggested next actions for every result that did not pass, in report
/// order.
pub fn next_steps(report: &Report) -> Vec<String> {
    report
        .results()
        .iter()
        .filter(|result| result.status != ProbeStatus::Ok)
        .map(|result| action_for(&result.spec))
        .collect()
}

/// The action for a single spec: its declarative hint when supplied, a
/// kind-derived default otherwise.
fn action_for(spec: &ProbeSpec) -> String {
    if let Some(hint) = &spec.hint {
        return hint.clone();
    }
    match &spec.kind {
        ProbeKind::FileExists { path } => {
            format!("Create {} in the project root", path.display())
        }
        ProbeKind::EnvVar { var } => {
            format!("Set it with: export {}=\"your-key\"", var)
        }
        ProbeKind::PackageInstalled { .. } => "Run: npm install".to_string(),
        ProbeKind::ProcessProbe { command, .. } => {
            format!(
                "Check that {} is installed and on PATH, then run: npm install",
                command
            )
        }
    }
}
