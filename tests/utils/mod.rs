pub mod builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::{date, FlotillaBuilder, RosterBuilder};
#[allow(unused_imports)]
pub use setup::{assigned_keys, pipeline};
