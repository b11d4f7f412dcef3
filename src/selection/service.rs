use std::sync::Arc;

use tracing::{debug, instrument};

use super::tiebreak::TieBreaker;
use crate::{
    config::SelectionLimits,
    diagnostics::{Decision, DecisionSink},
    ranking::RankingService,
    roster::{Boat, Crew, EventId},
};

/// Outcome of matching available crew against available berths for one event.
#[derive(Debug, Clone)]
pub struct Selection {
    pub event_id: EventId,
    pub boats: Vec<Boat>,
    pub crews: Vec<Crew>,
    pub waitlist_boats: Vec<Boat>,
    pub waitlist_crews: Vec<Crew>,
    /// Tie order the selection was taken from.
    pub attempt: usize,
}

/// One walk over a tie order, kept as indices into the ranked pools.
struct Plan {
    attempt: usize,
    selected_boats: Vec<usize>,
    waitlisted_boats: Vec<usize>,
    crew_order: Vec<usize>,
    selected_crews: usize,
}

impl Plan {
    fn waitlisted_crews(&self) -> usize {
        self.crew_order.len() - self.selected_crews
    }

    fn settled(&self) -> bool {
        self.waitlisted_crews() == 0 || self.waitlisted_boats.is_empty()
    }
}

pub struct SelectionService {
    ranking: RankingService,
    limits: SelectionLimits,
    sink: Arc<dyn DecisionSink>,
}

impl SelectionService {
    pub fn new(
        ranking: RankingService,
        limits: SelectionLimits,
        sink: Arc<dyn DecisionSink>,
    ) -> Self {
        Self {
            ranking,
            limits,
            sink,
        }
    }

    /// Splits the boats and crew available for `event_id` into selected and
    /// waitlisted, highest priority first.
    #[instrument(skip(self, boats, crews), fields(boats = boats.len(), crews = crews.len()))]
    pub fn select(&self, event_id: &str, mut boats: Vec<Boat>, mut crews: Vec<Crew>) -> Selection {
        self.ranking.refresh_boats(&mut boats);
        self.ranking.refresh_crews(&mut crews);

        let tie = TieBreaker::for_event(event_id);
        let mut best: Option<Plan> = None;

        for attempt in 0..self.limits.global.max(1) {
            let plan = self.plan(&boats, &crews, &tie, attempt);
            debug!(
                attempt,
                selected_boats = plan.selected_boats.len(),
                waitlisted_crews = plan.waitlisted_crews(),
                "Selection walk finished"
            );

            let improves = best
                .as_ref()
                .map_or(true, |current| plan.waitlisted_crews() < current.waitlisted_crews());
            if improves {
                best = Some(plan);
            }
            if best.as_ref().is_some_and(Plan::settled) {
                break;
            }
        }

        let plan = match best {
            Some(plan) => plan,
            None => self.plan(&boats, &crews, &tie, 0),
        };
        let selection = Self::materialize(event_id, &boats, &crews, plan);
        self.record(&selection);
        selection
    }

    fn plan(&self, boats: &[Boat], crews: &[Crew], tie: &TieBreaker, attempt: usize) -> Plan {
        let boat_order = tie.order(boats, attempt);
        let crew_order = tie.order(crews, attempt);
        let crew_count = crews.len();

        let mut selected_boats = Vec::new();
        let mut waitlisted_boats = Vec::new();
        let mut min_total = 0;
        let mut max_total = 0;
        let mut skips = 0;

        for index in boat_order {
            let boat = &boats[index];
            if max_total >= crew_count || skips >= self.limits.local {
                waitlisted_boats.push(index);
                continue;
            }
            if min_total + boat.min_berths > crew_count {
                // Never crew a boat below its minimum.
                skips += 1;
                waitlisted_boats.push(index);
                continue;
            }
            min_total += boat.min_berths;
            max_total += boat.max_berths;
            selected_boats.push(index);
        }

        Plan {
            attempt,
            selected_boats,
            waitlisted_boats,
            crew_order,
            selected_crews: crew_count.min(max_total),
        }
    }

    fn materialize(event_id: &str, boats: &[Boat], crews: &[Crew], plan: Plan) -> Selection {
        let pick_boats =
            |indices: &[usize]| -> Vec<Boat> { indices.iter().map(|&i| boats[i].clone()).collect() };
        let pick_crews =
            |indices: &[usize]| -> Vec<Crew> { indices.iter().map(|&i| crews[i].clone()).collect() };
        let (selected_crews, waitlisted_crews) = plan.crew_order.split_at(plan.selected_crews);

        Selection {
            event_id: event_id.to_string(),
            boats: pick_boats(&plan.selected_boats),
            crews: pick_crews(selected_crews),
            waitlist_boats: pick_boats(&plan.waitlisted_boats),
            waitlist_crews: pick_crews(waitlisted_crews),
            attempt: plan.attempt,
        }
    }

    fn record(&self, selection: &Selection) {
        let boat_keys =
            |boats: &[Boat]| -> Vec<String> { boats.iter().map(|b| b.key.clone()).collect() };
        let crew_keys =
            |crews: &[Crew]| -> Vec<String> { crews.iter().map(|c| c.key.clone()).collect() };

        self.sink.record(Decision::Selected {
            event_id: selection.event_id.clone(),
            attempt: selection.attempt,
            boats: boat_keys(&selection.boats),
            crews: crew_keys(&selection.crews),
            waitlist_boats: boat_keys(&selection.waitlist_boats),
            waitlist_crews: crew_keys(&selection.waitlist_crews),
        });
    }
}
