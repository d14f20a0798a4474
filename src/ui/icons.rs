//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and
//! colors shared by every command and display context, mapped from probe
//! and report statuses.

use crate::probe::{OverallStatus, ProbeStatus};

use super::theme::ScoutTheme;

/// Canonical status kinds used across all Scout output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Non-fatal gap.
    Warning,
    /// Check failed.
    Failed,
    /// Readiness is blocked by a required failure.
    Blocked,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Failed => "✗",
            Self::Blocked => "⊘",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Warning => "[warn]",
            Self::Failed => "[FAIL]",
            Self::Blocked => "[blocked]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &ScoutTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Blocked => theme.blocked.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &ScoutTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<ProbeStatus> for StatusKind {
    fn from(status: ProbeStatus) -> Self {
        match status {
            ProbeStatus::Ok => Self::Success,
            ProbeStatus::Warn => Self::Warning,
            ProbeStatus::Fail => Self::Failed,
        }
    }
}

impl From<OverallStatus> for StatusKind {
    fn from(status: OverallStatus) -> Self {
        match status {
            OverallStatus::Ok => Self::Success,
            OverallStatus::Degraded => Self::Warning,
            OverallStatus::Blocked => Self::Blocked,
        }
    }
}
