use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ranking::Rank;

pub type BoatKey = String;
pub type CrewKey = String;
pub type EventId = String;

/// Highest crew skill level. Skills range over `0..=MAX_SKILL`.
pub const MAX_SKILL: u8 = 2;

/// A scheduled sailing event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Season {
    pub events: Vec<Event>,
}

impl Season {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Events on or after `today`, ordered by date then id.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> = self.events.iter().filter(|e| e.date >= today).collect();
        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        upcoming
    }

    pub fn next_event(&self, today: NaiveDate) -> Option<&Event> {
        self.upcoming(today).into_iter().next()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    pub key: BoatKey,
    pub min_berths: usize,
    pub max_berths: usize,
    #[serde(default)]
    pub assistance_required: bool,
    /// Declared availability per event; a missing entry means unavailable.
    #[serde(default)]
    pub availability: BTreeMap<EventId, bool>,
    /// Past events and whether the boat took part.
    #[serde(default)]
    pub history: BTreeMap<EventId, bool>,
    #[serde(default)]
    pub rank: Rank,
}

impl Boat {
    pub fn new(key: impl Into<BoatKey>, min_berths: usize, max_berths: usize) -> Self {
        Self {
            key: key.into(),
            min_berths,
            max_berths,
            assistance_required: false,
            availability: BTreeMap::new(),
            history: BTreeMap::new(),
            rank: Rank::default(),
        }
    }

    pub fn is_available(&self, event_id: &str) -> bool {
        self.availability.get(event_id).copied().unwrap_or(false)
    }
}

/// Where a crew member ended up for one past event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Boat(BoatKey),
    Unassigned,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crew {
    pub key: CrewKey,
    pub skill: u8,
    #[serde(default)]
    pub partner: Option<CrewKey>,
    #[serde(default)]
    pub member: bool,
    /// Boats this crew member prefers to sail on.
    #[serde(default)]
    pub whitelist: BTreeSet<BoatKey>,
    #[serde(default)]
    pub availability: BTreeMap<EventId, bool>,
    #[serde(default)]
    pub history: BTreeMap<EventId, Placement>,
    #[serde(default)]
    pub rank: Rank,
}

impl Crew {
    pub fn new(key: impl Into<CrewKey>, skill: u8) -> Self {
        Self {
            key: key.into(),
            skill,
            partner: None,
            member: false,
            whitelist: BTreeSet::new(),
            availability: BTreeMap::new(),
            history: BTreeMap::new(),
            rank: Rank::default(),
        }
    }

    pub fn is_available(&self, event_id: &str) -> bool {
        self.availability.get(event_id).copied().unwrap_or(false)
    }

    /// Number of past events this crew member sailed on `boat_key`.
    pub fn times_on(&self, boat_key: &str) -> usize {
        self.history
            .values()
            .filter(|p| matches!(p, Placement::Boat(key) if key == boat_key))
            .count()
    }

    pub fn times_unassigned(&self) -> usize {
        self.history
            .values()
            .filter(|p| **p == Placement::Unassigned)
            .count()
    }
}

/// On-disk roster consumed by the command line entry point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    pub season: Season,
    pub boats: Vec<Boat>,
    pub crews: Vec<Crew>,
}
