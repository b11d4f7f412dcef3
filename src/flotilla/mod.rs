pub mod models;
pub mod repository;

pub use models::{BoatAssignment, Flotilla};
pub use repository::{FlotillaRepository, InMemoryFlotillaRepository};
