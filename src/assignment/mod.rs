pub mod consolidation;
mod errors;
pub mod index;
pub mod rules;
pub mod service;

pub use consolidation::consolidate;
pub use errors::AssignmentError;
pub use index::CrewIndex;
pub use rules::{Rule, RuleKind, RuleSet};
pub use service::{
    AssignmentService, AssignmentServiceBuilder, FlotillaScore, OptimizeReport, RuleOutcome,
};
