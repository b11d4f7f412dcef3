mod errors;
pub mod models;
mod validation;

pub use errors::RosterError;
pub use models::*;
pub use validation::validate;
