use super::{Rule, RuleKind};
use crate::flotilla::BoatAssignment;
use crate::roster::{Crew, MAX_SKILL};

/// Boats spanning the full skill range should swap an extreme for a
/// middle-skilled crew.
pub struct SkillSpreadRule;

impl Rule for SkillSpreadRule {
    fn kind(&self) -> RuleKind {
        RuleKind::SkillSpread
    }

    fn loss(&self, crew: &Crew, boat: &BoatAssignment) -> u32 {
        let skills = boat.crews.iter().map(|c| c.skill);
        let spread = match (skills.clone().max(), skills.min()) {
            (Some(max), Some(min)) => max - min,
            _ => return 0,
        };
        let extreme = crew.skill == 0 || crew.skill == MAX_SKILL;
        u32::from(spread == MAX_SKILL && extreme)
    }

    fn grad(&self, crew: &Crew) -> u32 {
        u32::from(crew.skill == 1)
    }
}
