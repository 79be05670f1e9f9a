//! The computer opponent: uniform-random legal shots over a private fleet.

use log::debug;
use rand::Rng;

use crate::{
    game::{Action, GameState, Player, Response, TurnError},
    grid::Spot,
    player::Strategy,
    ships::Arrangement,
};

/// A strategy that fires at uniformly random un-shot spots and defends a
/// fixed private [`Arrangement`]. The generator is supplied by the caller so
/// games can be made reproducible.
pub struct RandomStrategy<R> {
    name: String,
    rng: R,
    fleet: Arrangement,
}

impl<R: Rng> RandomStrategy<R> {
    /// Build the strategy around an existing fleet.
    pub fn new(name: impl Into<String>, fleet: Arrangement, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
            fleet,
        }
    }

    /// Build the strategy with a freshly randomized fleet drawn from the
    /// same generator.
    pub fn with_random_fleet(name: impl Into<String>, mut rng: R) -> Self {
        use crate::ships::ShipKind;

        let fleet = Arrangement::random(&mut rng, &ShipKind::ALL);
        Self::new(name, fleet, rng)
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self, me: Player, state: &GameState) -> Result<Action, TurnError> {
        // Shots land on the opponent's grid, so the record of spots already
        // tried lives under the opponent's key. Redraw until a fresh spot
        // comes up.
        let tried = state.player(me.opponent()).board();
        loop {
            let target: Spot = self.rng.gen();
            if tried.is_no_shot(target) {
                return Ok(Action::new(me, target));
            }
        }
    }

    fn classify_shot(
        &mut self,
        me: Player,
        state: &GameState,
        action: &Action,
    ) -> Result<Response, TurnError> {
        let (hit, sunk) = self
            .fleet
            .classify_shot(state.player(me).board(), action.target);
        match sunk {
            Some(kind) => debug!("{}: HIT, SUNK {}", self.name, kind),
            None if hit => debug!("{}: HIT", self.name),
            None => debug!("{}: MISS", self.name),
        }
        Ok(Response::new(me, action.target, hit, sunk)?)
    }

    fn register_response(
        &mut self,
        _actor: Player,
        _prior: &GameState,
        _action: &Action,
        _response: &Response,
    ) {
        // Nothing to record: the result of our own action arrives in the
        // next state snapshot passed to choose_action.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::{game::PlayerState, grid::SIZE};

    fn strategy(seed: u64) -> RandomStrategy<StdRng> {
        RandomStrategy::with_random_fleet("Computer", StdRng::seed_from_u64(seed))
    }

    #[test]
    fn shots_avoid_previously_tried_spots() {
        let mut player = strategy(99);

        // Fill the opponent's record with everything except J10.
        let mut opponent = PlayerState::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if (row, col) != (SIZE - 1, SIZE - 1) {
                    opponent = opponent.with_shot(Spot::new(row, col), false).unwrap();
                }
            }
        }
        let state = GameState::new().with_player(Player::P2, opponent);

        let action = player.choose_action(Player::P1, &state).unwrap();
        assert_eq!(action.target, Spot::new(SIZE - 1, SIZE - 1));
        assert_eq!(action.actor, Player::P1);
    }

    #[test]
    fn classification_reflects_the_private_fleet() {
        let mut player = strategy(7);
        let state = GameState::new();

        // Classify every spot on the grid against an empty record: the hits
        // must be exactly the fleet's 17 covered spots, and with no prior
        // hits recorded nothing can be reported sunk.
        let mut hits = 0;
        for row in 0..SIZE {
            for col in 0..SIZE {
                let action = Action::new(Player::P1, Spot::new(row, col));
                let response = player.classify_shot(Player::P2, &state, &action).unwrap();
                if response.hit() {
                    hits += 1;
                }
                assert_eq!(response.sunk(), None);
            }
        }
        assert_eq!(hits, 17);
    }
}
