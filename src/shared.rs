use thiserror::Error;

use crate::assignment::AssignmentError;
use crate::roster::RosterError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid roster: {0}")]
    Roster(#[from] RosterError),

    #[error("Assignment failed: {0}")]
    Assignment(#[from] AssignmentError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed roster file: {0}")]
    Parse(#[from] serde_json::Error),
}
