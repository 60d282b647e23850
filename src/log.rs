//! Logging seam for the host build runtime.
//!
//! The locator reports every resolution outcome through a [`ToolLog`], which
//! the host build runtime implements over its own sink. [`TracingLog`]
//! forwards to the `tracing` facade for hosts that don't bring their own.

use serde::{Deserialize, Serialize};

/// Verbosity scale of the host's logging sink.
///
/// The locator always writes at [`Normal`](Verbosity::Normal); the full scale
/// exists so a host sink can filter consistently with its other sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Verbosity {
    Quiet,
    Minimal,
    Normal,
    Verbose,
    Diagnostic,
}

/// Severity of a locator diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// A successful resolution, naming the tool, version and path.
    Information,
    /// A recovered problem, e.g. unreadable version metadata.
    Warning,
    /// An unusable user-provided override path.
    Fatal,
}

/// Logging capability consumed by the locator.
///
/// Implementations receive `(verbosity, severity, message)` triples and are
/// expected not to fail; the locator never inspects the sink's state.
///
/// # Example
///
/// ```rust
/// use xc_tool_discovery::{Severity, ToolLog, Verbosity};
///
/// struct StderrLog;
///
/// impl ToolLog for StderrLog {
///     fn write(&self, _verbosity: Verbosity, severity: Severity, message: &str) {
///         eprintln!("[{:?}] {}", severity, message);
///     }
/// }
/// ```
pub trait ToolLog {
    /// Write one diagnostic message to the sink.
    fn write(&self, verbosity: Verbosity, severity: Severity, message: &str);
}

/// A [`ToolLog`] that forwards to the `tracing` facade.
///
/// Severities map to `info!`, `warn!` and `error!`; the verbosity is carried
/// as a field so subscribers can filter on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ToolLog for TracingLog {
    fn write(&self, verbosity: Verbosity, severity: Severity, message: &str) {
        match severity {
            Severity::Information => tracing::info!(?verbosity, "{message}"),
            Severity::Warning => tracing::warn!(?verbosity, "{message}"),
            Severity::Fatal => tracing::error!(?verbosity, "{message}"),
        }
    }
}
