mod rank;
pub mod service;

pub use rank::{Rank, RANK_WIDTH};
pub use service::RankingService;
