use super::{Rule, RuleKind};
use crate::flotilla::BoatAssignment;
use crate::roster::Crew;

/// Designated partners are kept on separate boats.
pub struct PartnerRule;

impl Rule for PartnerRule {
    fn kind(&self) -> RuleKind {
        RuleKind::Partner
    }

    fn loss(&self, crew: &Crew, boat: &BoatAssignment) -> u32 {
        match &crew.partner {
            Some(partner) => u32::from(boat.has_crew(partner)),
            None => 0,
        }
    }

    fn grad(&self, crew: &Crew) -> u32 {
        u32::from(crew.partner.is_none())
    }
}
