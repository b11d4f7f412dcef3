use std::fmt;

use serde::Serialize;

use crate::assignment::RuleKind;
use crate::roster::{BoatKey, CrewKey, EventId};

/// Why a rule stopped looking for swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleReason {
    /// No unlocked crew carries any loss for the rule.
    NoViolation,
    /// No unlocked crew would be a useful swap-in.
    NoGradient,
    /// A violation remains but no unlocked crew can take its place.
    NoCandidate,
    /// At most one crew member is still unlocked.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decision {
    Selected {
        event_id: EventId,
        attempt: usize,
        boats: Vec<BoatKey>,
        crews: Vec<CrewKey>,
        waitlist_boats: Vec<BoatKey>,
        waitlist_crews: Vec<CrewKey>,
    },
    HelperLocked {
        boat: BoatKey,
        crew: CrewKey,
    },
    Swapped {
        rule: RuleKind,
        target: CrewKey,
        target_boat: BoatKey,
        target_loss: u32,
        candidate: CrewKey,
        candidate_boat: BoatKey,
        candidate_loss: u32,
        unlocked_before: usize,
        unlocked_after: usize,
    },
    RuleSettled {
        rule: RuleKind,
        reason: SettleReason,
        swaps: usize,
    },
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Selected {
                event_id,
                attempt,
                boats,
                crews,
                waitlist_boats,
                waitlist_crews,
            } => write!(
                f,
                "{event_id}: selected boats [{}] crews [{}], waitlisted boats [{}] crews [{}] (attempt {attempt})",
                boats.join(", "),
                crews.join(", "),
                waitlist_boats.join(", "),
                waitlist_crews.join(", "),
            ),
            Decision::HelperLocked { boat, crew } => {
                write!(f, "{crew} locked as helper on {boat}")
            }
            Decision::Swapped {
                rule,
                target,
                target_boat,
                target_loss,
                candidate,
                candidate_boat,
                candidate_loss,
                unlocked_after,
                ..
            } => write!(
                f,
                "{rule}: {target} (loss {target_loss}) on {target_boat} <-> {candidate} (loss {candidate_loss}) on {candidate_boat}, {unlocked_after} unlocked",
            ),
            Decision::RuleSettled {
                rule,
                reason,
                swaps,
            } => write!(f, "{rule}: settled after {swaps} swaps ({reason:?})"),
        }
    }
}
