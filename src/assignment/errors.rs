use thiserror::Error;

use super::RuleKind;

/// Integrity failures inside the optimizer. These indicate inconsistent
/// input or a defect, never an ordinary "nothing to improve" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("{rule}: crew {crew} is not part of the flotilla")]
    UnknownCrew { rule: RuleKind, crew: String },

    #[error("Crew {0} is assigned more than once")]
    DuplicateCrew(String),
}
