//! Shared display helpers for report rendering.
//!
//! These helpers turn a [`Report`] into the ordered lines the operator
//! sees: one status line per probe, a summary, then numbered next steps.

use crate::probe::{self, ProbeStatus, Report};
use crate::ui::{OutputMode, StatusKind, UserInterface};

/// Print one probe result line, styled by severity.
///
/// The diagnostic detail rides along in parentheses for non-passing
/// results, and for passing results too in verbose mode.
pub fn show_probe_result(ui: &mut dyn UserInterface, result: &probe::ProbeResult) {
    let show_detail = result.status != ProbeStatus::Ok
        || ui.output_mode().shows_passing_detail();
    let line = match result.detail.as_deref().filter(|_| show_detail) {
        Some(detail) => format!("{} ({})", result.spec.name, detail),
        None => result.spec.name.clone(),
    };
    match StatusKind::from(result.status) {
        StatusKind::Success => ui.success(&line),
        StatusKind::Warning => ui.warning(&line),
        StatusKind::Failed | StatusKind::Blocked => ui.error(&line),
    }
}

/// Render a full report: per-probe lines, summary, numbered guidance.
pub fn show_report(ui: &mut dyn UserInterface, report: &Report) {
    if ui.output_mode().shows_probe_lines() {
        for result in report.results() {
            show_probe_result(ui, result);
        }
        ui.message("");
    }

    let overall = report.overall();
    let summary = format!(
        "{} {}",
        StatusKind::from(overall).icon(),
        overall.summary()
    );
    ui.message(&summary);

    let steps = probe::next_steps(report);
    if !steps.is_empty() {
        ui.message("");
        ui.message("Next steps:");
        for (index, step) in steps.iter().enumerate() {
            ui.message(&format!("  {}. {}", index + 1, step));
        }
    }
}

/// Mode-aware count line shown before the probes run.
pub fn probing_banner(count: usize) -> String {
    if count == 1 {
        "Running 1 readiness check".to_string()
    } else {
        format!("Running {} readiness checks", count)
    }
}

/// `OutputMode` derived from the global CLI flags.
pub fn output_mode(verbose: bool, quiet: bool) -> OutputMode {
    if quiet {
        OutputMode::Quiet
    } else if verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    }
}
