//! Injectable diagnostic sinks.
//!
//! Exposure models never write to the console directly. Warnings (such as
//! an unrecognized release type) and labeled results go through a
//! [`Diagnostics`] implementation chosen by the caller.

use tracing::{info, warn};

/// A sink for warnings and labeled numeric results.
pub trait Diagnostics {
    /// Records a non-fatal warning.
    fn warn(&self, message: &str);

    /// Records a labeled numeric result.
    fn record(&self, label: &str, value: f64);
}

/// Forwards diagnostics to [`tracing`].
///
/// Warnings are emitted at `WARN`, results at `INFO` with `label` and
/// `value` fields. Installing a subscriber is left to the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        warn!("{message}");
    }

    fn record(&self, label: &str, value: f64) {
        info!(label, value, "exposure result");
    }
}
