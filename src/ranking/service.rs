use tracing::{debug, instrument};

use super::Rank;
use crate::roster::{Boat, Crew, EventId};

/// Derives selection ranks from an entity's attributes and history.
///
/// Ranks are computed against the upcoming events of the season: an entity
/// that has declared itself unavailable for more of them ranks lower.
#[derive(Debug, Clone, Default)]
pub struct RankingService {
    upcoming: Vec<EventId>,
}

impl RankingService {
    pub fn new(upcoming: Vec<EventId>) -> Self {
        Self { upcoming }
    }

    /// `[flexibility, absence]`
    pub fn boat_rank(&self, boat: &Boat) -> Rank {
        let flexibility = self
            .upcoming
            .iter()
            .filter(|event| !boat.is_available(event))
            .count();
        let absence = boat.history.values().filter(|took_part| !**took_part).count();
        Rank::new(&[flexibility as i64, absence as i64])
    }

    /// `[commitment, membership, absence]`
    pub fn crew_rank(&self, crew: &Crew) -> Rank {
        let commitment = self
            .upcoming
            .iter()
            .filter(|event| !crew.is_available(event))
            .count();
        let membership = if crew.member { 0 } else { 1 };
        Rank::new(&[
            commitment as i64,
            membership,
            crew.times_unassigned() as i64,
        ])
    }

    #[instrument(skip_all, fields(boats = boats.len()))]
    pub fn refresh_boats(&self, boats: &mut [Boat]) {
        for boat in boats.iter_mut() {
            boat.rank = self.boat_rank(boat);
            debug!(boat = %boat.key, rank = %boat.rank, "Boat rank refreshed");
        }
    }

    #[instrument(skip_all, fields(crews = crews.len()))]
    pub fn refresh_crews(&self, crews: &mut [Crew]) {
        for crew in crews.iter_mut() {
            crew.rank = self.crew_rank(crew);
            debug!(crew = %crew.key, rank = %crew.rank, "Crew rank refreshed");
        }
    }
}
