use super::{Rule, RuleKind};
use crate::flotilla::BoatAssignment;
use crate::roster::Crew;

/// Crew should not keep sailing the same boat.
pub struct RepeatRule;

impl Rule for RepeatRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Repeat
    }

    fn loss(&self, crew: &Crew, boat: &BoatAssignment) -> u32 {
        crew.times_on(&boat.boat.key) as u32
    }

    fn grad(&self, crew: &Crew) -> u32 {
        crew.times_unassigned() as u32
    }
}
