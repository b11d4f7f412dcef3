// Library crate for the flotilla crew scheduler
// This file exposes the public API for integration tests and the CLI

pub mod assignment;
pub mod config;
pub mod diagnostics;
pub mod flotilla;
pub mod ranking;
pub mod roster;
pub mod season;
pub mod selection;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use assignment::{consolidate, AssignmentService, RuleKind};
pub use config::PipelineConfig;
pub use diagnostics::{CollectingSink, Decision, DecisionSink, TracingSink};
pub use flotilla::{BoatAssignment, Flotilla, FlotillaRepository, InMemoryFlotillaRepository};
pub use ranking::{Rank, RankingService};
pub use roster::{Boat, Crew, Event, Placement, RosterFile, Season, MAX_SKILL};
pub use season::SeasonService;
pub use selection::{Selection, SelectionService};
pub use shared::AppError;
