//! Write-only decision trail for selection and assignment runs.
//!
//! Services emit [`Decision`]s to an injected [`DecisionSink`]. Nothing in the
//! pipeline reads the trail back; it exists for operators and for tests that
//! assert on the decision stream.

mod decision;
mod sink;

pub use decision::{Decision, SettleReason};
pub use sink::{CollectingSink, DecisionSink, NoopSink, TracingSink};
