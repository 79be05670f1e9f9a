//! The action/response pair exchanged on every turn.

use std::fmt;

use crate::{
    board::DuplicateShot,
    game::{GameState, Player, ProtocolError},
    grid::Spot,
    ships::ShipKind,
};

/// A player's chosen move for their turn: a shot at one spot of the
/// opponent's grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Action {
    /// The player taking the shot.
    pub actor: Player,
    /// The targeted spot.
    pub target: Spot,
}

impl Action {
    pub fn new(actor: Player, target: Spot) -> Self {
        Self { actor, target }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} fires at {}", self.actor, self.target)
    }
}

/// The defender's classification of a shot against their hidden arrangement:
/// hit or miss, and which ship it sank if it completed one. A sunk report
/// implies a hit; construction enforces that.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Response {
    defender: Player,
    shot: Spot,
    hit: bool,
    sunk: Option<ShipKind>,
}

impl Response {
    /// Assemble a response. `defender` names the player whose grid was fired
    /// upon; their board and sunk set are the ones a later
    /// [`apply`][Response::apply] will update. Fails if `sunk` is given
    /// without `hit`.
    pub fn new(
        defender: Player,
        shot: Spot,
        hit: bool,
        sunk: Option<ShipKind>,
    ) -> Result<Self, ProtocolError> {
        if sunk.is_some() && !hit {
            Err(ProtocolError::SunkWithoutHit { shot })
        } else {
            Ok(Self {
                defender,
                shot,
                hit,
                sunk,
            })
        }
    }

    /// The player whose grid was fired upon.
    pub fn defender(&self) -> Player {
        self.defender
    }

    /// The spot that was shot.
    pub fn shot(&self) -> Spot {
        self.shot
    }

    /// Whether the shot hit a ship.
    pub fn hit(&self) -> bool {
        self.hit
    }

    /// The ship the shot sank, if it completed one.
    pub fn sunk(&self) -> Option<ShipKind> {
        self.sunk
    }

    /// Apply this response to a snapshot, producing the next one: the shot is
    /// recorded on the defender's board, and a sunk ship joins the defender's
    /// sunk set. Fails if the spot already had an outcome.
    pub fn apply(&self, state: &GameState) -> Result<GameState, DuplicateShot> {
        let mut player = state.player(self.defender).with_shot(self.shot, self.hit)?;
        if let Some(kind) = self.sunk {
            player = player.with_sunk(kind);
        }
        Ok(state.with_player(self.defender, player))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.shot,
            if self.hit { "HIT" } else { "MISS" }
        )?;
        match self.sunk {
            Some(kind) => write!(f, ", sunk {}", kind),
            None => Ok(()),
        }
    }
}
