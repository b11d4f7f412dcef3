use super::{Rule, RuleKind};
use crate::flotilla::BoatAssignment;
use crate::roster::Crew;

/// Crew should sail on a boat from their own whitelist.
pub struct WhitelistRule;

impl Rule for WhitelistRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Whitelist
    }

    fn loss(&self, crew: &Crew, boat: &BoatAssignment) -> u32 {
        if crew.whitelist.contains(&boat.boat.key) {
            0
        } else {
            1
        }
    }

    fn grad(&self, crew: &Crew) -> u32 {
        crew.whitelist.len() as u32
    }
}
