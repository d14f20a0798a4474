//! Probe outcomes and the aggregated readiness report.
//!
//! Each evaluated [`ProbeSpec`](super::ProbeSpec) produces a
//! [`ProbeResult`]; one orchestration run produces a [`Report`]. The
//! report's overall status is always derived from its results, never set
//! independently, and a report is immutable once built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::spec::ProbeSpec;

/// Outcome of evaluating a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
    /// Dependency is present and reachable.
    Ok,
    /// Dependency is absent but does not block readiness.
    Warn,
    /// Dependency check failed.
    Fail,
}

impl ProbeStatus {
    /// Whether the probe passed.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// The result of one evaluated probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResult {
    /// The spec that was evaluated.
    pub spec: ProbeSpec,
    /// The classification.
    pub status: ProbeStatus,
    /// Free-text diagnostic: captured output tail or error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ProbeResult {
    /// Build a result for a spec.
    pub fn new(spec: &ProbeSpec, status: ProbeStatus, detail: Option<String>) -> Self {
        Self {
            spec: spec.clone(),
            status,
            detail,
        }
    }

    /// Whether this result counts as a blocking failure.
    pub fn is_blocking(&self) -> bool {
        self.spec.required && self.status == ProbeStatus::Fail
    }
}

/// Aggregate readiness classification for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// Every probe passed.
    Ok,
    /// All required probes passed, but something is missing.
    Degraded,
    /// At least one required probe failed.
    Blocked,
}

impl OverallStatus {
    /// Derive the overall status from an ordered result set.
    pub fn from_results(results: &[ProbeResult]) -> Self {
        if results.iter().any(ProbeResult::is_blocking) {
            Self::Blocked
        } else if results.iter().all(|r| r.status.is_ok()) {
            Self::Ok
        } else {
            Self::Degraded
        }
    }

    /// One-line summary shown under the result list.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Ok => "All readiness checks passed",
            Self::Degraded => "Ready, with warnings",
            Self::Blocked => "Not ready: required checks failed",
        }
    }
}

/// Aggregated outcome of one orchestration run.
///
/// Results keep the probe declaration order; downstream guidance numbering
/// depends on it. Fields are private so the overall status cannot drift
/// from the results it was computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    results: Vec<ProbeResult>,
    overall: OverallStatus,
    generated_at: DateTime<Utc>,
}

impl Report {
    /// Build a report from an ordered result set, deriving the overall
    /// status.
    pub fn new(results: Vec<ProbeResult>) -> Self {
        let overall = OverallStatus::from_results(&results);
        Self {
            results,
            overall,
            generated_at: Utc::now(),
        }
    }

    /// The ordered probe results.
    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    /// The derived overall status.
    pub fn overall(&self) -> OverallStatus {
        self.overall
    }

    /// When the report was produced.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Whether at least one required probe failed.
    pub fn is_blocked(&self) -> bool {
        self.overall == OverallStatus::Blocked
    }

    /// Process exit code for the orchestrating program: zero unless
    /// blocked.
    pub fn exit_code(&self) -> i32 {
        if self.is_blocked() {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(name: &str) -> ProbeResult {
        ProbeResult::new(
            &ProbeSpec::file_exists(name, "some-file"),
            ProbeStatus::Ok,
            None,
        )
    }

    fn warn(name: &str) -> ProbeResult {
        ProbeResult::new(
            &ProbeSpec::env_var(name, "SOME_VAR"),
            ProbeStatus::Warn,
            Some("not set".into()),
        )
    }

    fn fail(name: &str, required: bool) -> ProbeResult {
        ProbeResult::new(
            &ProbeSpec::file_exists(name, "missing").required(required),
            ProbeStatus::Fail,
            Some("not found".into()),
        )
    }

    #[test]
    fn all_ok_is_overall_ok() {
        let report = Report::new(vec![ok("a"), ok("b")]);
        assert_eq!(report.overall(), OverallStatus::Ok);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn warns_without_fails_degrade() {
        let report = Report::new(vec![ok("a"), warn("b")]);
        assert_eq!(report.overall(), OverallStatus::Degraded);
        assert!(!report.is_blocked());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn required_fail_blocks() {
        let report = Report::new(vec![ok("a"), fail("b", true), warn("c")]);
        assert_eq!(report.overall(), OverallStatus::Blocked);
        assert!(report.is_blocked());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn soft_fail_only_degrades() {
        let report = Report::new(vec![ok("a"), fail("b", false)]);
        assert_eq!(report.overall(), OverallStatus::Degraded);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn empty_report_is_ok() {
        let report = Report::new(vec![]);
        assert_eq!(report.overall(), OverallStatus::Ok);
    }

    #[test]
    fn results_preserve_order() {
        let report = Report::new(vec![ok("first"), warn("second"), ok("third")]);
        let names: Vec<_> = report.results().iter().map(|r| r.spec.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn is_blocking_requires_both_flags() {
        assert!(fail("x", true).is_blocking());
        assert!(!fail("x", false).is_blocking());
        assert!(!warn("x").is_blocking());
        assert!(!ok("x").is_blocking());
    }

    #[test]
    fn overall_summaries_are_distinct() {
        let summaries = [
            OverallStatus::Ok.summary(),
            OverallStatus::Degraded.summary(),
            OverallStatus::Blocked.summary(),
        ];
        let mut unique = summaries.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), summaries.len());
    }

    #[test]
    fn report_serializes_statuses_as_snake_case() {
        let report = Report::new(vec![ok("a"), fail("b", true)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["overall"], "blocked");
        assert_eq!(json["results"][0]["status"], "ok");
        assert_eq!(json["results"][1]["status"], "fail");
    }
}
