use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::{
    assignment::{consolidate, AssignmentService},
    config::PipelineConfig,
    diagnostics::DecisionSink,
    flotilla::{Flotilla, FlotillaRepository},
    ranking::RankingService,
    roster::{validate, Boat, Crew, EventId, Season},
    selection::SelectionService,
    shared::AppError,
};

/// Runs Selection, Consolidation and Assignment for every upcoming event of a
/// season, one event at a time, and stores the resulting flotillas.
pub struct SeasonService {
    config: PipelineConfig,
    repository: Arc<dyn FlotillaRepository>,
    sink: Arc<dyn DecisionSink>,
}

impl SeasonService {
    pub fn new(
        config: PipelineConfig,
        repository: Arc<dyn FlotillaRepository>,
        sink: Arc<dyn DecisionSink>,
    ) -> Self {
        Self {
            config,
            repository,
            sink,
        }
    }

    /// Rebuilds the flotilla of every event on or after `today`.
    ///
    /// Ranks on `boats` and `crews` are refreshed in place. Only the next
    /// upcoming event is optimized; later events keep their round-robin
    /// assignment until they become next.
    #[instrument(skip(self, season, boats, crews), fields(events = season.events.len()))]
    pub async fn update_season(
        &self,
        season: &Season,
        boats: &mut [Boat],
        crews: &mut [Crew],
        today: NaiveDate,
    ) -> Result<Vec<Flotilla>, AppError> {
        validate(boats, crews)?;

        let upcoming: Vec<EventId> = season
            .upcoming(today)
            .into_iter()
            .map(|event| event.id.clone())
            .collect();
        info!(upcoming = upcoming.len(), "Updating season");

        let ranking = RankingService::new(upcoming.clone());
        ranking.refresh_boats(boats);
        ranking.refresh_crews(crews);

        let selection = SelectionService::new(ranking, self.config.selection, self.sink.clone());
        let assignment = AssignmentService::builder(self.sink.clone())
            .with_weights(&self.config.weights)
            .build();

        let mut flotillas = Vec::with_capacity(upcoming.len());
        for (position, event_id) in upcoming.iter().enumerate() {
            let flotilla = Self::plan_event(
                &selection,
                (position == 0).then_some(&assignment),
                event_id,
                boats,
                crews,
            )?;
            self.repository.save(&flotilla).await?;
            flotillas.push(flotilla);
        }

        Ok(flotillas)
    }

    fn plan_event(
        selection: &SelectionService,
        assignment: Option<&AssignmentService>,
        event_id: &str,
        boats: &[Boat],
        crews: &[Crew],
    ) -> Result<Flotilla, AppError> {
        let available_boats: Vec<Boat> = boats
            .iter()
            .filter(|boat| boat.is_available(event_id))
            .cloned()
            .collect();
        let available_crews: Vec<Crew> = crews
            .iter()
            .filter(|crew| crew.is_available(event_id))
            .cloned()
            .collect();

        let mut flotilla = consolidate(selection.select(event_id, available_boats, available_crews));

        if let Some(assignment) = assignment {
            let report = assignment.optimize(&mut flotilla)?;
            info!(
                event_id,
                swaps = report.total_swaps(),
                weighted_loss = assignment.score(&flotilla).weighted,
                "Next event optimized"
            );
        }

        info!(
            event_id,
            boats = flotilla.crewed_boats.len(),
            crews = flotilla.crew_count(),
            waitlist_boats = flotilla.waitlist_boats.len(),
            waitlist_crews = flotilla.waitlist_crews.len(),
            "Flotilla planned"
        );
        Ok(flotilla)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, Decision};
    use crate::flotilla::InMemoryFlotillaRepository;
    use crate::roster::Event;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, day).unwrap()
    }

    fn season() -> Season {
        Season::new(vec![
            Event { id: "past".into(), date: date(1) },
            Event { id: "race-2".into(), date: date(14) },
            Event { id: "race-1".into(), date: date(7) },
        ])
    }

    fn available_boat(key: &str, min: usize, max: usize) -> Boat {
        let mut boat = Boat::new(key, min, max);
        for event in ["past", "race-1", "race-2"] {
            boat.availability.insert(event.into(), true);
        }
        boat
    }

    fn available_crew(key: &str, skill: u8) -> Crew {
        let mut crew = Crew::new(key, skill);
        for event in ["past", "race-1", "race-2"] {
            crew.availability.insert(event.into(), true);
        }
        crew
    }

    fn setup() -> (SeasonService, Arc<InMemoryFlotillaRepository>, Arc<CollectingSink>) {
        let repository = Arc::new(InMemoryFlotillaRepository::new());
        let sink = Arc::new(CollectingSink::new());
        let service = SeasonService::new(PipelineConfig::default(), repository.clone(), sink.clone());
        (service, repository, sink)
    }

    #[tokio::test]
    async fn plans_each_upcoming_event_and_optimizes_only_the_next() {
        let (service, repository, sink) = setup();
        let mut boats = vec![available_boat("a", 1, 3), available_boat("b", 1, 3)];
        let mut crews: Vec<Crew> = (0..4).map(|i| available_crew(&format!("c{i}"), 1)).collect();
        crews[3].availability.insert("race-2".into(), false);

        let flotillas = service
            .update_season(&season(), &mut boats, &mut crews, date(2))
            .await
            .unwrap();

        let ids: Vec<&str> = flotillas.iter().map(|f| f.event_id.as_str()).collect();
        assert_eq!(ids, vec!["race-1", "race-2"]);
        assert_eq!(flotillas[0].crew_count(), 4);
        assert_eq!(flotillas[1].crew_count(), 3);
        assert!(repository.get("past").await.unwrap().is_none());
        assert_eq!(repository.list().await.unwrap().len(), 2);

        let settled = sink
            .decisions()
            .into_iter()
            .filter(|d| matches!(d, Decision::RuleSettled { .. }))
            .count();
        assert_eq!(settled, 5);
    }

    #[tokio::test]
    async fn refreshes_ranks_in_place() {
        let (service, _, _) = setup();
        let mut boats = vec![available_boat("a", 1, 3)];
        let mut crews = vec![available_crew("c1", 1)];
        crews[0].availability.insert("race-2".into(), false);

        service
            .update_season(&season(), &mut boats, &mut crews, date(2))
            .await
            .unwrap();

        assert_eq!(crews[0].rank.dimensions(), &[1, 1, 0]);
        assert_eq!(boats[0].rank.dimensions(), &[0, 0, 0]);
    }

    #[tokio::test]
    async fn rerun_overwrites_stored_flotillas() {
        let (service, repository, _) = setup();
        let mut boats = vec![available_boat("a", 1, 3)];
        let mut crews = vec![available_crew("c1", 1), available_crew("c2", 1)];

        service
            .update_season(&season(), &mut boats, &mut crews, date(2))
            .await
            .unwrap();
        crews[1].availability.insert("race-1".into(), false);
        service
            .update_season(&season(), &mut boats, &mut crews, date(2))
            .await
            .unwrap();

        let stored = repository.get("race-1").await.unwrap().unwrap();
        assert_eq!(stored.crew_count(), 1);
        assert_eq!(repository.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rejects_invalid_roster() {
        let (service, repository, _) = setup();
        let mut boats = vec![available_boat("a", 1, 3)];
        let mut crews = vec![available_crew("c1", 5)];

        let result = service
            .update_season(&season(), &mut boats, &mut crews, date(2))
            .await;

        assert!(matches!(result, Err(AppError::Roster(_))));
        assert!(repository.list().await.unwrap().is_empty());
    }
}
