use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::roster::{Boat, Crew, EventId};

/// A boat together with the crew sailing on it, in berth order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatAssignment {
    pub boat: Boat,
    pub crews: Vec<Crew>,
}

impl BoatAssignment {
    pub fn new(boat: Boat) -> Self {
        Self {
            boat,
            crews: Vec::new(),
        }
    }

    pub fn within_berths(&self) -> bool {
        (self.boat.min_berths..=self.boat.max_berths).contains(&self.crews.len())
    }

    pub fn has_crew(&self, crew_key: &str) -> bool {
        self.crews.iter().any(|crew| crew.key == crew_key)
    }
}

/// Boat and crew assignment, plus waitlists, for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flotilla {
    pub event_id: EventId,
    pub crewed_boats: Vec<BoatAssignment>,
    pub waitlist_boats: Vec<Boat>,
    pub waitlist_crews: Vec<Crew>,
    /// Fingerprint of `crewed_boats` as the optimizer last left them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settled: Option<u64>,
}

impl Flotilla {
    pub fn crew_count(&self) -> usize {
        self.crewed_boats.iter().map(|b| b.crews.len()).sum()
    }

    /// Key of the boat `crew_key` is assigned to, if any.
    pub fn boat_of(&self, crew_key: &str) -> Option<&str> {
        self.crewed_boats
            .iter()
            .find(|assignment| assignment.has_crew(crew_key))
            .map(|assignment| assignment.boat.key.as_str())
    }

    /// Crew keys per boat, in boat order. Handy for comparing assignments.
    pub fn layout(&self) -> Vec<(String, Vec<String>)> {
        self.crewed_boats
            .iter()
            .map(|assignment| {
                (
                    assignment.boat.key.clone(),
                    assignment.crews.iter().map(|c| c.key.clone()).collect(),
                )
            })
            .collect()
    }

    pub fn is_stable(&self) -> bool {
        self.crewed_boats.iter().all(BoatAssignment::within_berths)
    }

    /// Digest of the crewed boats, crew attributes and berth order included.
    pub fn fingerprint(&self) -> Option<u64> {
        let bytes = serde_json::to_vec(&self.crewed_boats).ok()?;
        let digest = Sha256::digest(&bytes);
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest[..8]);
        Some(u64::from_be_bytes(head))
    }

    /// Whether the crewed boats are exactly as the optimizer last left them.
    pub fn is_settled(&self) -> bool {
        self.settled.is_some() && self.settled == self.fingerprint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flotilla() -> Flotilla {
        let mut a = BoatAssignment::new(Boat::new("a", 1, 2));
        a.crews = vec![Crew::new("c1", 0), Crew::new("c2", 2)];
        let mut b = BoatAssignment::new(Boat::new("b", 2, 3));
        b.crews = vec![Crew::new("c3", 1)];

        Flotilla {
            event_id: "e1".into(),
            crewed_boats: vec![a, b],
            waitlist_boats: vec![],
            waitlist_crews: vec![Crew::new("c4", 1)],
            settled: None,
        }
    }

    #[test]
    fn locates_crew() {
        let flotilla = flotilla();
        assert_eq!(flotilla.boat_of("c2"), Some("a"));
        assert_eq!(flotilla.boat_of("c3"), Some("b"));
        assert_eq!(flotilla.boat_of("c4"), None);
        assert_eq!(flotilla.crew_count(), 3);
    }

    #[test]
    fn stability_follows_berth_ranges() {
        let mut flotilla = flotilla();
        assert!(flotilla.crewed_boats[0].within_berths());
        assert!(!flotilla.crewed_boats[1].within_berths());
        assert!(!flotilla.is_stable());

        let moved = flotilla.crewed_boats[0].crews.pop().unwrap();
        flotilla.crewed_boats[1].crews.push(moved);
        assert!(flotilla.is_stable());
    }

    #[test]
    fn settled_marker_tracks_any_change() {
        let mut flotilla = flotilla();
        assert!(!flotilla.is_settled());

        flotilla.settled = flotilla.fingerprint();
        assert!(flotilla.is_settled());

        flotilla.crewed_boats[1].crews[0].whitelist.insert("a".into());
        assert!(!flotilla.is_settled());

        flotilla.settled = flotilla.fingerprint();
        let moved = flotilla.crewed_boats[0].crews.pop().unwrap();
        flotilla.crewed_boats[1].crews.push(moved);
        assert!(!flotilla.is_settled());
    }

    #[test]
    fn serializes_with_nested_crews() {
        let json = serde_json::to_value(flotilla()).unwrap();
        assert_eq!(json["event_id"], "e1");
        assert_eq!(json["crewed_boats"][0]["boat"]["key"], "a");
        assert_eq!(json["crewed_boats"][0]["crews"][1]["key"], "c2");
        assert_eq!(json["waitlist_crews"][0]["key"], "c4");
        assert!(json.get("settled").is_none());
    }
}
