use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Duplicate boat key: {0}")]
    DuplicateBoat(String),

    #[error("Duplicate crew key: {0}")]
    DuplicateCrew(String),

    #[error("Crew {crew} has skill {skill}, above the maximum of {max}")]
    SkillOutOfRange { crew: String, skill: u8, max: u8 },

    #[error("Crew {crew} names unknown partner {partner}")]
    UnknownPartner { crew: String, partner: String },

    #[error("Crew {0} names itself as partner")]
    SelfPartner(String),

    #[error("Boat {boat} has min berths {min} above max berths {max}")]
    InvalidBerths { boat: String, min: usize, max: usize },
}
