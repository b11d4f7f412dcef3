pub mod service;
mod tiebreak;

pub use service::{Selection, SelectionService};
pub use tiebreak::{event_seed, Ranked, TieBreaker};
