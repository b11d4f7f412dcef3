use std::collections::HashSet;

use super::{Boat, Crew, RosterError, MAX_SKILL};

/// Checks the pool invariants the pipeline relies on.
pub fn validate(boats: &[Boat], crews: &[Crew]) -> Result<(), RosterError> {
    let mut boat_keys = HashSet::new();
    for boat in boats {
        if !boat_keys.insert(boat.key.as_str()) {
            return Err(RosterError::DuplicateBoat(boat.key.clone()));
        }
        if boat.min_berths > boat.max_berths {
            return Err(RosterError::InvalidBerths {
                boat: boat.key.clone(),
                min: boat.min_berths,
                max: boat.max_berths,
            });
        }
    }

    let mut crew_keys = HashSet::new();
    for crew in crews {
        if !crew_keys.insert(crew.key.as_str()) {
            return Err(RosterError::DuplicateCrew(crew.key.clone()));
        }
        if crew.skill > MAX_SKILL {
            return Err(RosterError::SkillOutOfRange {
                crew: crew.key.clone(),
                skill: crew.skill,
                max: MAX_SKILL,
            });
        }
    }

    // Partners are not required to be mutual.
    for crew in crews {
        if let Some(partner) = &crew.partner {
            if *partner == crew.key {
                return Err(RosterError::SelfPartner(crew.key.clone()));
            }
            if !crew_keys.contains(partner.as_str()) {
                return Err(RosterError::UnknownPartner {
                    crew: crew.key.clone(),
                    partner: partner.clone(),
                });
            }
        }
    }

    Ok(())
}
