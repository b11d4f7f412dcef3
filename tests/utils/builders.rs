//! Roster and flotilla builders - fluent API for arranging test scenarios
#![allow(dead_code)] // Test utilities may not all be used in every test

use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};

use flotilla::{Boat, BoatAssignment, Crew, Event, Flotilla, Placement, RosterFile, Season};

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("test dates are ISO formatted")
}

// ============================================================================
// Roster Builder
// ============================================================================

/// Builds a roster where every boat and crew is available for every event
/// unless stated otherwise.
pub struct RosterBuilder {
    events: Vec<Event>,
    boats: Vec<Boat>,
    crews: Vec<Crew>,
    unavailable: Vec<(String, String)>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self {
            events: vec![],
            boats: vec![],
            crews: vec![],
            unavailable: vec![],
        }
    }

    pub fn with_event(mut self, id: &str, on: &str) -> Self {
        self.events.push(Event {
            id: id.to_string(),
            date: date(on),
        });
        self
    }

    pub fn with_boat(mut self, key: &str, min: usize, max: usize) -> Self {
        self.boats.push(Boat::new(key, min, max));
        self
    }

    pub fn with_assisted_boat(mut self, key: &str, min: usize, max: usize) -> Self {
        let mut boat = Boat::new(key, min, max);
        boat.assistance_required = true;
        self.boats.push(boat);
        self
    }

    /// Adds a club member.
    pub fn with_crew(mut self, key: &str, skill: u8) -> Self {
        let mut crew = Crew::new(key, skill);
        crew.member = true;
        self.crews.push(crew);
        self
    }

    pub fn with_guest(mut self, key: &str, skill: u8) -> Self {
        self.crews.push(Crew::new(key, skill));
        self
    }

    /// Marks a boat or crew as unavailable for an event.
    pub fn unavailable(mut self, key: &str, event_id: &str) -> Self {
        self.unavailable
            .push((key.to_string(), event_id.to_string()));
        self
    }

    pub fn build(self) -> RosterFile {
        let events = self.events;
        let unavailable = self.unavailable;
        let available = |key: &str, event_id: &str| {
            !unavailable
                .iter()
                .any(|(k, e)| k == key && e == event_id)
        };

        let boats = self
            .boats
            .into_iter()
            .map(|mut boat| {
                for event in &events {
                    let flag = available(&boat.key, &event.id);
                    boat.availability.insert(event.id.clone(), flag);
                }
                boat
            })
            .collect();
        let crews = self
            .crews
            .into_iter()
            .map(|mut crew| {
                for event in &events {
                    let flag = available(&crew.key, &event.id);
                    crew.availability.insert(event.id.clone(), flag);
                }
                crew
            })
            .collect();

        RosterFile {
            season: Season::new(events),
            boats,
            crews,
        }
    }
}

// ============================================================================
// Flotilla Builder
// ============================================================================

/// Generates assorted flotillas from a seed for property-style tests.
pub struct FlotillaBuilder {
    rng: StdRng,
}

impl FlotillaBuilder {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn build(mut self) -> Flotilla {
        let boat_count = self.rng.random_range(2..=5);
        let boat_keys: Vec<String> = (0..boat_count).map(|i| format!("boat-{i}")).collect();

        let mut crewed_boats = Vec::new();
        let mut crew_keys = Vec::new();
        for key in &boat_keys {
            let mut boat = Boat::new(key.as_str(), 1, 4);
            boat.assistance_required = self.rng.random_bool(0.4);
            let mut assignment = BoatAssignment::new(boat);

            for _ in 0..self.rng.random_range(1..=4) {
                let crew_key = format!("crew-{}", crew_keys.len());
                let mut crew = Crew::new(crew_key.as_str(), self.rng.random_range(0..=2));
                for boat_key in &boat_keys {
                    if self.rng.random_bool(0.3) {
                        crew.whitelist.insert(boat_key.clone());
                    }
                }
                for event in 0..self.rng.random_range(0..4) {
                    let placement = if self.rng.random_bool(0.25) {
                        Placement::Unassigned
                    } else {
                        let pick = self.rng.random_range(0..boat_keys.len());
                        Placement::Boat(boat_keys[pick].clone())
                    };
                    crew.history.insert(format!("past-{event}"), placement);
                }
                crew_keys.push(crew_key);
                assignment.crews.push(crew);
            }
            crewed_boats.push(assignment);
        }

        // Partners point backwards so every reference names an existing crew.
        for assignment in &mut crewed_boats {
            for crew in &mut assignment.crews {
                let own: usize = crew.key["crew-".len()..].parse().unwrap();
                if own > 0 && self.rng.random_bool(0.3) {
                    let partner = self.rng.random_range(0..own);
                    crew.partner = Some(format!("crew-{partner}"));
                }
            }
        }

        Flotilla {
            event_id: "generated".to_string(),
            crewed_boats,
            waitlist_boats: vec![],
            waitlist_crews: vec![],
            settled: None,
        }
    }
}
