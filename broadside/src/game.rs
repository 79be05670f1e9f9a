//! The immutable game state and the turn protocol that drives it.
//!
//! [`GameState`] is the single source of truth threaded through the turn
//! loop: every transition consumes a state value and produces a new one. The
//! state holds, per player, the record of shots *received* by that player and
//! the set of that player's ships that have been sunk; updates are always
//! keyed by the defender, the player whose ships were fired upon. A player
//! has lost once their whole catalog is sunk, and [`GameState::winner`]
//! reports the opponent.

use std::fmt;

use enumflags2::BitFlags;

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{
    board::{Board, DuplicateShot},
    grid::Spot,
    ships::ShipKind,
};

pub use self::{
    engine::GameLoop,
    errors::{ProtocolError, TurnError},
    protocol::{Action, Response},
};

mod engine;
mod errors;
mod protocol;

/// Identity of one of the two players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::P1 => f.pad("player 1"),
            Player::P2 => f.pad("player 2"),
        }
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Player> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        if rng.gen() {
            Player::P1
        } else {
            Player::P2
        }
    }
}

/// One player's slice of the game state: the shots recorded against them and
/// the kinds of their ships that have been sunk.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerState {
    board: Board,
    sunk: BitFlags<ShipKind>,
}

impl PlayerState {
    /// An untouched player: no shots received, no ships sunk.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            sunk: BitFlags::empty(),
        }
    }

    /// The shots recorded against this player.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The kinds of this player's ships that have been sunk.
    pub fn sunk(&self) -> BitFlags<ShipKind> {
        self.sunk
    }

    /// True iff every ship kind in the catalog has been sunk.
    pub fn is_lost(&self) -> bool {
        self.sunk.is_all()
    }

    /// Produce a new state with the given shot recorded against this player.
    pub fn with_shot(&self, spot: Spot, hit: bool) -> Result<PlayerState, DuplicateShot> {
        Ok(PlayerState {
            board: self.board.with_shot(spot, hit)?,
            sunk: self.sunk,
        })
    }

    /// Produce a new state with the given ship kind marked sunk.
    pub fn with_sunk(&self, kind: ShipKind) -> PlayerState {
        PlayerState {
            board: self.board.clone(),
            sunk: self.sunk | kind,
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete immutable snapshot of a game: both players' states.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    players: [PlayerState; 2],
}

impl GameState {
    /// The opening state: neither player has received a shot.
    pub fn new() -> Self {
        Self {
            players: [PlayerState::new(), PlayerState::new()],
        }
    }

    /// The given player's slice of the state.
    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player.index()]
    }

    /// Produce a new snapshot with the given player's slice replaced.
    pub fn with_player(&self, player: Player, state: PlayerState) -> GameState {
        let mut players = self.players.clone();
        players[player.index()] = state;
        GameState { players }
    }

    /// The winner, if either player's whole fleet has been sunk. The player
    /// whose catalog is exhausted has lost; their opponent wins.
    pub fn winner(&self) -> Option<Player> {
        for &player in &[Player::P1, Player::P2] {
            if self.player(player).is_lost() {
                return Some(player.opponent());
            }
        }
        None
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(label: &str) -> Spot {
        label.parse().unwrap()
    }

    #[test]
    fn fresh_state_has_no_winner() {
        assert_eq!(GameState::new().winner(), None);
    }

    #[test]
    fn player_is_lost_only_at_the_full_catalog() {
        let mut state = PlayerState::new();
        for (i, &kind) in ShipKind::ALL.iter().enumerate() {
            assert!(!state.is_lost(), "lost after {} kinds", i);
            state = state.with_sunk(kind);
        }
        assert!(state.is_lost());
    }

    #[test]
    fn sinking_the_same_kind_twice_does_not_advance_the_count() {
        let state = PlayerState::new()
            .with_sunk(ShipKind::Carrier)
            .with_sunk(ShipKind::Carrier);
        assert_eq!(state.sunk().iter().count(), 1);
    }

    #[test]
    fn winner_is_the_opponent_of_the_exhausted_player() {
        let mut p1 = PlayerState::new();
        for &kind in &ShipKind::ALL {
            p1 = p1.with_sunk(kind);
        }
        let state = GameState::new().with_player(Player::P1, p1);
        assert_eq!(state.winner(), Some(Player::P2));
    }

    #[test]
    fn with_shot_updates_only_the_named_player() {
        let state = GameState::new();
        let hit = state.player(Player::P2).with_shot(spot("D4"), true).unwrap();
        let next = state.with_player(Player::P2, hit);
        assert!(next.player(Player::P2).board().is_hit(spot("D4")));
        assert!(next.player(Player::P1).board().is_no_shot(spot("D4")));
        // The prior snapshot is untouched.
        assert!(state.player(Player::P2).board().is_no_shot(spot("D4")));
    }

    #[test]
    fn duplicate_shots_surface_from_player_state() {
        let state = PlayerState::new().with_shot(spot("A1"), false).unwrap();
        assert!(state.with_shot(spot("A1"), true).is_err());
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_player_draws_both_identities() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 2];
        for _ in 0..50 {
            let player: Player = rng.gen();
            seen[player.index()] = true;
        }
        assert!(seen[0] && seen[1]);
    }
}
