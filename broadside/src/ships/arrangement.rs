// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Arrangements: a full fleet of non-overlapping placements, with exhaustive
//! and randomized generation.

use crate::{
    board::Board,
    grid::{Line, Spot},
    ships::{OverlapError, Placement, ShipKind},
};

#[cfg(feature = "rng_gen")]
use rand::Rng;

/// A validated collection of placements for one player's fleet: no two
/// placements' lines intersect. Built once at game start and immutable
/// thereafter; hits against it are tracked in the defender's [`Board`], not
/// here.
///
/// An arrangement is a player's private secret. It is consulted only by that
/// player's own shot classification and never exposed to the opponent.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Arrangement {
    ships: Vec<Placement>,
}

impl Arrangement {
    /// Build an arrangement from the given placements, in the given order.
    /// Fails if any two placements intersect.
    pub fn new(ships: Vec<Placement>) -> Result<Self, OverlapError> {
        for (i, first) in ships.iter().enumerate() {
            for second in &ships[i + 1..] {
                if first.line().intersects(&second.line()) {
                    return Err(OverlapError::new(*first, *second));
                }
            }
        }
        Ok(Self { ships })
    }

    /// The member placements, in construction order.
    pub fn ships(&self) -> &[Placement] {
        &self.ships
    }

    /// Number of placements in the arrangement.
    pub fn size(&self) -> usize {
        self.ships.len()
    }

    /// True iff the spot falls within any member placement's line.
    pub fn contains(&self, spot: Spot) -> bool {
        self.ships.iter().any(|placed| placed.contains(spot))
    }

    /// True iff any member placement's line intersects the given line.
    pub fn intersects(&self, line: &Line) -> bool {
        self.ships.iter().any(|placed| placed.line().intersects(line))
    }

    /// The placement covering the given spot, if any.
    pub fn placement_at(&self, spot: Spot) -> Option<&Placement> {
        self.ships.iter().find(|placed| placed.contains(spot))
    }

    /// Classify an incoming shot against this arrangement: whether it hits,
    /// and which ship it sinks if the shot completes one. `board` is the
    /// defender's shot record *before* this shot; a spot already hit does not
    /// count twice toward sinking.
    ///
    /// This is the privileged, ship-owning side of the turn protocol and is
    /// a pure function of the arrangement and the board snapshot.
    pub fn classify_shot(&self, board: &Board, shot: Spot) -> (bool, Option<ShipKind>) {
        match self.placement_at(shot) {
            None => (false, None),
            Some(placed) => {
                let sunk = placed
                    .line()
                    .spots()
                    .all(|spot| spot == shot || board.is_hit(spot));
                (true, if sunk { Some(placed.kind()) } else { None })
            }
        }
    }

    /// A uniformly random legal arrangement of the given kinds: each ship in
    /// turn draws random lines until one clears every ship placed so far.
    /// Retries indefinitely; termination is almost sure on any grid the fleet
    /// actually fits.
    #[cfg(feature = "rng_gen")]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, kinds: &[ShipKind]) -> Self {
        let mut ships: Vec<Placement> = Vec::with_capacity(kinds.len());
        for &kind in kinds {
            let placed = random_placement(rng, kind, |candidate| {
                !ships
                    .iter()
                    .any(|placed| placed.line().intersects(&candidate.line()))
            });
            ships.push(placed);
        }
        Self { ships }
    }
}

/// Draw random placements of the given kind until one satisfies the
/// acceptance predicate. Retries indefinitely, so the predicate must be
/// satisfiable.
#[cfg(feature = "rng_gen")]
pub fn random_placement<R, F>(rng: &mut R, kind: ShipKind, accept: F) -> Placement
where
    R: Rng + ?Sized,
    F: Fn(&Placement) -> bool,
{
    loop {
        let line = Line::random(rng, kind.length());
        // Random lines are drawn at the ship's own length.
        let placed = Placement::new(kind, line).unwrap();
        if accept(&placed) {
            return placed;
        }
    }
}

/// Enumerate every legal arrangement of the given kinds by backtracking:
/// each kind in turn is placed on every line of its length that misses all
/// placements already fixed, and rejected branches are pruned without being
/// materialized. The output order is deterministic for a fixed input order.
///
/// Do not call this for the full five-ship catalog; the arrangement count is
/// combinatorially explosive and the only pruning is pairwise non-overlap.
pub fn enumerate_arrangements(kinds: &[ShipKind]) -> Arrangements {
    Arrangements {
        candidates: kinds
            .iter()
            .map(|kind| Line::enumerate(kind.length()))
            .collect(),
        kinds: kinds.to_vec(),
        cursors: vec![0; kinds.len()],
        chosen: Vec::with_capacity(kinds.len()),
        done: false,
    }
}

/// Iterator over every legal arrangement of a sequence of ship kinds. See
/// [`enumerate_arrangements`].
#[derive(Debug, Clone)]
pub struct Arrangements {
    kinds: Vec<ShipKind>,
    /// Legal lines per fleet slot, precomputed at the slot's ship length.
    candidates: Vec<Vec<Line>>,
    /// Next candidate index to try at each depth.
    cursors: Vec<usize>,
    /// Placements fixed so far, one per depth below the current one.
    chosen: Vec<Placement>,
    done: bool,
}

impl Iterator for Arrangements {
    type Item = Arrangement;

    fn next(&mut self) -> Option<Arrangement> {
        if self.done {
            return None;
        }
        if self.kinds.is_empty() {
            // An empty fleet has exactly one arrangement: the empty one.
            self.done = true;
            return Some(Arrangement { ships: Vec::new() });
        }
        loop {
            let depth = self.chosen.len();
            if depth == self.kinds.len() {
                // Every slot is filled: emit, then resume at the last slot.
                let arrangement = Arrangement {
                    ships: self.chosen.clone(),
                };
                self.chosen.pop();
                return Some(arrangement);
            }
            let mut advanced = false;
            while self.cursors[depth] < self.candidates[depth].len() {
                let line = self.candidates[depth][self.cursors[depth]];
                self.cursors[depth] += 1;
                if !self
                    .chosen
                    .iter()
                    .any(|placed| placed.line().intersects(&line))
                {
                    // Candidate lines are enumerated at the ship's own length.
                    self.chosen
                        .push(Placement::new(self.kinds[depth], line).unwrap());
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                // This slot is exhausted under the current prefix; rewind it
                // and backtrack to the previous slot.
                self.cursors[depth] = 0;
                match self.chosen.pop() {
                    Some(_) => {}
                    None => {
                        self.done = true;
                        return None;
                    }
                }
            }
        }
    }
}
