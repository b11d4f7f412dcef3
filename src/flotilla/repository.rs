use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::Flotilla;
use crate::shared::AppError;

/// Storage for the latest flotilla of each event.
#[async_trait]
pub trait FlotillaRepository: Send + Sync {
    /// Replaces whatever was stored for the flotilla's event.
    async fn save(&self, flotilla: &Flotilla) -> Result<(), AppError>;
    async fn get(&self, event_id: &str) -> Result<Option<Flotilla>, AppError>;
    async fn list(&self) -> Result<Vec<Flotilla>, AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryFlotillaRepository {
    flotillas: Arc<RwLock<HashMap<String, Flotilla>>>,
}

impl InMemoryFlotillaRepository {
    pub fn new() -> Self {
        Self {
            flotillas: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl FlotillaRepository for InMemoryFlotillaRepository {
    #[instrument(skip(self, flotilla), fields(event_id = %flotilla.event_id))]
    async fn save(&self, flotilla: &Flotilla) -> Result<(), AppError> {
        let mut flotillas = self.flotillas.write().await;
        let replaced = flotillas
            .insert(flotilla.event_id.clone(), flotilla.clone())
            .is_some();
        debug!(replaced, "Flotilla stored");
        Ok(())
    }

    async fn get(&self, event_id: &str) -> Result<Option<Flotilla>, AppError> {
        let flotillas = self.flotillas.read().await;
        Ok(flotillas.get(event_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Flotilla>, AppError> {
        let flotillas = self.flotillas.read().await;
        let mut all: Vec<Flotilla> = flotillas.values().cloned().collect();
        all.sort_by(|a, b| a.event_id.cmp(&b.event_id));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flotilla::BoatAssignment;
    use crate::roster::{Boat, Crew};

    fn flotilla(event_id: &str, crew_keys: &[&str]) -> Flotilla {
        let mut assignment = BoatAssignment::new(Boat::new("a", 0, 4));
        assignment.crews = crew_keys.iter().map(|key| Crew::new(*key, 1)).collect();
        Flotilla {
            event_id: event_id.to_string(),
            crewed_boats: vec![assignment],
            waitlist_boats: vec![],
            waitlist_crews: vec![],
            settled: None,
        }
    }

    #[tokio::test]
    async fn save_overwrites_previous_flotilla() {
        let repo = InMemoryFlotillaRepository::new();
        repo.save(&flotilla("e1", &["c1", "c2"])).await.unwrap();
        repo.save(&flotilla("e1", &["c3"])).await.unwrap();

        let stored = repo.get("e1").await.unwrap().unwrap();
        assert_eq!(stored.crew_count(), 1);
        assert_eq!(stored.boat_of("c3"), Some("a"));
        assert_eq!(stored.boat_of("c1"), None);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn get_missing_event_returns_none() {
        let repo = InMemoryFlotillaRepository::new();
        assert!(repo.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_ordered_by_event() {
        let repo = InMemoryFlotillaRepository::new();
        repo.save(&flotilla("e2", &[])).await.unwrap();
        repo.save(&flotilla("e1", &[])).await.unwrap();

        let ids: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.event_id)
            .collect();
        assert_eq!(ids, vec!["e1", "e2"]);
    }
}
