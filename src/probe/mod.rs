//! Readiness probes and the sequential orchestrator.
//!
//! The core of Scout: declarative [`ProbeSpec`]s describe one check each
//! (a file, an environment variable, an installed package, or a spawnable
//! process), the [`Orchestrator`] evaluates them strictly in order, and
//! the aggregated [`Report`] plus [`next_steps`] guidance is everything
//! the operator sees.

pub mod guidance;
pub mod orchestrator;
pub mod outcome;
pub mod spec;

pub use guidance::next_steps;
pub use orchestrator::{EnvLookup, Orchestrator, SystemEnv, DEFAULT_PROBE_TIMEOUT};
pub use outcome::{OverallStatus, ProbeResult, ProbeStatus, Report};
pub use spec::{ProbeKind, ProbeSpec};
