//! Errors raised while assembling and applying turns.

use std::io;

use thiserror::Error;

use crate::{
    board::DuplicateShot,
    game::Player,
    grid::Spot,
};

/// Violation of the action/response contract. A single malformed action or
/// response aborts the turn being processed; it is fatal to the current game
/// run, not to the process.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ProtocolError {
    /// A response reported a sunk ship on a miss.
    #[error("a miss at {shot} cannot sink a ship")]
    SunkWithoutHit { shot: Spot },

    /// A player produced an action attributed to someone else.
    #[error("{expected} chose an action attributed to {found}")]
    ForeignAction { expected: Player, found: Player },

    /// A defender produced a response attributed to someone else.
    #[error("{expected} answered a shot on behalf of {found}")]
    ForeignResponse { expected: Player, found: Player },

    /// A response answered a different spot than the one targeted.
    #[error("response answers {found} but the shot targeted {expected}")]
    MismatchedResponse { expected: Spot, found: Spot },
}

/// Error produced while running a turn of the game loop.
#[derive(Debug, Error)]
pub enum TurnError {
    /// Reading or writing the player's terminal failed. Treated as an abrupt
    /// end of the session.
    #[error("terminal interaction failed")]
    Io(#[from] io::Error),

    /// The action/response contract was violated.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The turn re-targeted an already-shot spot.
    #[error(transparent)]
    DuplicateShot(#[from] DuplicateShot),
}
