use std::collections::HashMap;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use sha2::{Digest, Sha256};

use crate::ranking::Rank;
use crate::roster::{Boat, Crew};

/// Anything the selection walk can order.
pub trait Ranked {
    fn key(&self) -> &str;
    fn rank(&self) -> Rank;
}

impl Ranked for Boat {
    fn key(&self) -> &str {
        &self.key
    }

    fn rank(&self) -> Rank {
        self.rank
    }
}

impl Ranked for Crew {
    fn key(&self) -> &str {
        &self.key
    }

    fn rank(&self) -> Rank {
        self.rank
    }
}

/// Stable seed derived from an event id: the leading eight bytes of its SHA-256.
pub fn event_seed(event_id: &str) -> u64 {
    let digest = Sha256::digest(event_id.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Orders equally ranked entities by a permutation seeded from the event,
/// so ties resolve the same way on every run for that event.
#[derive(Debug, Clone, Copy)]
pub struct TieBreaker {
    seed: u64,
}

impl TieBreaker {
    pub fn for_event(event_id: &str) -> Self {
        Self {
            seed: event_seed(event_id),
        }
    }

    fn positions<'a, T: Ranked>(&self, items: &'a [T], attempt: usize) -> HashMap<&'a str, usize> {
        let mut keys: Vec<&str> = items.iter().map(Ranked::key).collect();
        keys.sort_unstable();

        let mut rng = StdRng::seed_from_u64(self.seed ^ attempt as u64);
        keys.shuffle(&mut rng);

        keys.into_iter()
            .enumerate()
            .map(|(position, key)| (key, position))
            .collect()
    }

    /// Indices into `items`, ascending by rank with ties broken by the
    /// permutation for `attempt`.
    pub fn order<T: Ranked>(&self, items: &[T], attempt: usize) -> Vec<usize> {
        let positions = self.positions(items, attempt);
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by_key(|&index| {
            let item = &items[index];
            (
                item.rank(),
                positions.get(item.key()).copied().unwrap_or(usize::MAX),
            )
        });
        order
    }
}
