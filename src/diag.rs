//! Diagnostic channel: anomalies detected during a tick are reported here
//! and counted in `StepStats`, never surfaced as a crash.

use crate::types::StepStats;

/// A recoverable anomaly detected during a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Anomaly {
    /// A guarded vector operation rejected a non-finite operand.
    /// The operation degraded to a no-op and the tick continued.
    InvalidArgument { op: &'static str },
    /// Two bodies with coincident centers: no contact normal exists, so
    /// resolution was skipped for that pair.
    DegenerateGeometry { first: usize, second: usize },
}

/// Trait for observing simulation progress. All methods default to no-ops.
pub trait SimObserver {
    /// Called for each anomaly as it is detected, mid-tick.
    fn on_anomaly(&mut self, _anomaly: Anomaly) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self, _stats: &StepStats) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpSimObserver;

impl SimObserver for NoOpSimObserver {}
