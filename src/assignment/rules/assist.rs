use super::{Rule, RuleKind};
use crate::flotilla::BoatAssignment;
use crate::roster::{Crew, MAX_SKILL};

/// A boat that needs assistance must carry at least one fully skilled crew.
pub struct AssistRule;

impl Rule for AssistRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Assist
    }

    fn loss(&self, crew: &Crew, boat: &BoatAssignment) -> u32 {
        if !boat.boat.assistance_required || boat.crews.iter().any(|c| c.skill == MAX_SKILL) {
            return 0;
        }
        u32::from(MAX_SKILL.saturating_sub(crew.skill))
    }

    fn grad(&self, crew: &Crew) -> u32 {
        u32::from(crew.skill)
    }
}
