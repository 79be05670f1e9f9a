//! The record of shots taken against a single player.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::grid::Spot;

/// Error returned when recording a shot at a spot that already has an
/// outcome. Duplicate shots are rejected rather than silently reclassified.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("spot {spot} already has a recorded shot")]
pub struct DuplicateShot {
    spot: Spot,
}

impl DuplicateShot {
    fn new(spot: Spot) -> Self {
        Self { spot }
    }

    /// The spot that was shot twice.
    pub fn spot(&self) -> Spot {
        self.spot
    }
}

/// An immutable record of the shots one player has received, mapping each
/// shot spot to whether it hit. A spot appears at most once;
/// [`Board::with_shot`] produces a new board rather than mutating this one.
///
/// For every spot, exactly one of [`is_hit`][Board::is_hit],
/// [`is_miss`][Board::is_miss], and [`is_no_shot`][Board::is_no_shot] holds.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    shots: BTreeMap<Spot, bool>,
}

impl Board {
    /// An empty board with no shots recorded.
    pub fn new() -> Self {
        Self {
            shots: BTreeMap::new(),
        }
    }

    /// Produce a new board with the given shot recorded. Fails if the spot
    /// already has an outcome.
    pub fn with_shot(&self, spot: Spot, hit: bool) -> Result<Board, DuplicateShot> {
        if self.shots.contains_key(&spot) {
            return Err(DuplicateShot::new(spot));
        }
        let mut shots = self.shots.clone();
        shots.insert(spot, hit);
        Ok(Board { shots })
    }

    /// True iff a shot at the spot was recorded as a hit.
    pub fn is_hit(&self, spot: Spot) -> bool {
        self.shots.get(&spot) == Some(&true)
    }

    /// True iff a shot at the spot was recorded as a miss.
    pub fn is_miss(&self, spot: Spot) -> bool {
        self.shots.get(&spot) == Some(&false)
    }

    /// True iff no shot at the spot has been recorded.
    pub fn is_no_shot(&self, spot: Spot) -> bool {
        !self.shots.contains_key(&spot)
    }

    /// Number of shots recorded.
    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    /// Iterate the recorded shots in spot order, with their outcomes.
    pub fn shots(&self) -> impl Iterator<Item = (Spot, bool)> + '_ {
        self.shots.iter().map(|(&spot, &hit)| (spot, hit))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
