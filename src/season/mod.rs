pub mod service;

pub use service::SeasonService;
