//! Output mode and writer.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-probe diagnostics for passing checks.
    Verbose,
    /// Show status and diagnostics for non-passing checks.
    #[default]
    Normal,
    /// Show minimal output (final status and guidance only).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows diagnostics for passing probes.
    pub fn shows_passing_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows per-probe result lines.
    pub fn shows_probe_lines(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
