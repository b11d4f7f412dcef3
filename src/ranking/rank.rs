use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of dimensions every rank carries.
pub const RANK_WIDTH: usize = 3;

/// Selection priority of a boat or crew member.
///
/// Dimensions are compared left to right and a lower rank is selected
/// earlier. Boats use fewer dimensions than crews; the unused trailing
/// dimensions are zero so ranks of different origins still compare.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Rank([i64; RANK_WIDTH]);

impl Rank {
    /// Builds a rank from leading dimensions, padding the rest with zero.
    /// Dimensions beyond `RANK_WIDTH` are dropped.
    pub fn new(dimensions: &[i64]) -> Self {
        let mut values = [0; RANK_WIDTH];
        for (slot, value) in values.iter_mut().zip(dimensions) {
            *slot = *value;
        }
        Self(values)
    }

    pub fn dimensions(&self) -> &[i64; RANK_WIDTH] {
        &self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}
