//! Pipeline wiring shared by the integration tests
#![allow(dead_code)] // Test utilities may not all be used in every test

use std::sync::Arc;

use flotilla::{
    CollectingSink, Flotilla, InMemoryFlotillaRepository, PipelineConfig, SeasonService,
};

/// Season service backed by an in-memory repository and a collecting sink.
pub fn pipeline() -> (
    SeasonService,
    Arc<InMemoryFlotillaRepository>,
    Arc<CollectingSink>,
) {
    let repository = Arc::new(InMemoryFlotillaRepository::new());
    let sink = Arc::new(CollectingSink::new());
    let service = SeasonService::new(PipelineConfig::default(), repository.clone(), sink.clone());
    (service, repository, sink)
}

/// Every assigned crew key, sorted.
pub fn assigned_keys(flotilla: &Flotilla) -> Vec<String> {
    let mut keys: Vec<String> = flotilla
        .crewed_boats
        .iter()
        .flat_map(|b| b.crews.iter().map(|c| c.key.clone()))
        .collect();
    keys.sort();
    keys
}
