use std::collections::HashMap;

use super::{AssignmentError, RuleKind};
use crate::flotilla::BoatAssignment;
use crate::roster::CrewKey;

/// Position of a crew member: boat index, then slot index on that boat.
pub type Slot = (usize, usize);

/// Crew key to slot lookup for the current assignment.
#[derive(Debug, Default)]
pub struct CrewIndex {
    slots: HashMap<CrewKey, Slot>,
}

impl CrewIndex {
    pub fn build(boats: &[BoatAssignment]) -> Result<Self, AssignmentError> {
        let mut slots = HashMap::new();
        for (boat_index, assignment) in boats.iter().enumerate() {
            for (slot_index, crew) in assignment.crews.iter().enumerate() {
                if slots
                    .insert(crew.key.clone(), (boat_index, slot_index))
                    .is_some()
                {
                    return Err(AssignmentError::DuplicateCrew(crew.key.clone()));
                }
            }
        }
        Ok(Self { slots })
    }

    pub fn locate(&self, rule: RuleKind, crew_key: &str) -> Result<Slot, AssignmentError> {
        self.slots
            .get(crew_key)
            .copied()
            .ok_or_else(|| AssignmentError::UnknownCrew {
                rule,
                crew: crew_key.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
