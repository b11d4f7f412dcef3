use std::sync::Mutex;

use tracing::{debug, info};

use super::Decision;

/// Receives decisions as they are made.
pub trait DecisionSink: Send + Sync {
    fn record(&self, decision: Decision);
}

/// Forwards decisions to `tracing`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionSink for TracingSink {
    fn record(&self, decision: Decision) {
        match &decision {
            Decision::Selected { event_id, .. } => {
                info!(event_id = %event_id, "{}", decision);
            }
            _ => debug!("{}", decision),
        }
    }
}

/// Drops every decision.
#[derive(Debug, Default)]
pub struct NoopSink;

impl DecisionSink for NoopSink {
    fn record(&self, _decision: Decision) {}
}

/// Keeps decisions in memory so callers can inspect the trail.
#[derive(Debug, Default)]
pub struct CollectingSink {
    decisions: Mutex<Vec<Decision>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decisions(&self) -> Vec<Decision> {
        self.decisions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        self.decisions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl DecisionSink for CollectingSink {
    fn record(&self, decision: Decision) {
        self.decisions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(decision);
    }
}
