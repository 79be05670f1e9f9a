//! The alternating-turn driver.

use log::{debug, info};

use crate::{
    game::{GameState, Player, ProtocolError, TurnError},
    player::Strategy,
};

/// Drives the turn cycle: ask the acting player for an action, route it to
/// the defender for classification, broadcast the outcome to both players,
/// fold the response into the state, and advance to the next player.
///
/// The loop owns the only mutable handle on the game; each turn consumes the
/// current [`GameState`] snapshot and installs the one the response produces.
pub struct GameLoop {
    players: [Box<dyn Strategy>; 2],
    state: GameState,
    next: Player,
}

impl GameLoop {
    /// Build a loop over the two players' strategies. Player 1 acts first.
    pub fn new(p1: Box<dyn Strategy>, p2: Box<dyn Strategy>) -> Self {
        Self {
            players: [p1, p2],
            state: GameState::new(),
            next: Player::P1,
        }
    }

    /// The current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The player whose turn is next.
    pub fn current(&self) -> Player {
        self.next
    }

    /// Run a single turn. Returns the winner once one player's whole fleet
    /// is sunk, or `None` while the game continues.
    ///
    /// A malformed action or response, a terminal failure, or a shot at an
    /// already-shot spot aborts the turn with an error; the loop makes no
    /// attempt to retry on behalf of a misbehaving strategy.
    pub fn turn(&mut self) -> Result<Option<Player>, TurnError> {
        let actor = self.next;
        let defender = actor.opponent();

        let action = self.players[actor.index()].choose_action(actor, &self.state)?;
        if action.actor != actor {
            return Err(ProtocolError::ForeignAction {
                expected: actor,
                found: action.actor,
            }
            .into());
        }
        debug!("{}", action);

        let response =
            self.players[defender.index()].classify_shot(defender, &self.state, &action)?;
        if response.defender() != defender {
            return Err(ProtocolError::ForeignResponse {
                expected: defender,
                found: response.defender(),
            }
            .into());
        }
        if response.shot() != action.target {
            return Err(ProtocolError::MismatchedResponse {
                expected: action.target,
                found: response.shot(),
            }
            .into());
        }
        debug!("{}", response);

        // Broadcast before the update: every player sees the prior snapshot
        // alongside the action and its classification. Bookkeeping only; the
        // authoritative transition is the `apply` below.
        let state = &self.state;
        for strategy in self.players.iter_mut() {
            strategy.register_response(actor, state, &action, &response);
        }

        self.state = response.apply(&self.state)?;
        self.next = defender;

        let winner = self.state.winner();
        if let Some(winner) = winner {
            info!("{} wins", winner);
        }
        Ok(winner)
    }

    /// Run turns until the game produces a winner.
    pub fn run(&mut self) -> Result<Player, TurnError> {
        loop {
            if let Some(winner) = self.turn()? {
                return Ok(winner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, rc::Rc};

    use crate::{
        game::{Action, Response},
        grid::{Line, Spot},
        ships::{Arrangement, Placement, ShipKind},
    };

    fn spot(label: &str) -> Spot {
        label.parse().unwrap()
    }

    fn placed(kind: ShipKind, a: &str, b: &str) -> Placement {
        let line = Line::new(spot(a), spot(b)).unwrap();
        Placement::new(kind, line).unwrap()
    }

    fn full_fleet() -> Arrangement {
        Arrangement::new(vec![
            placed(ShipKind::Carrier, "A1", "A5"),
            placed(ShipKind::Battleship, "C1", "C4"),
            placed(ShipKind::Destroyer, "E1", "E3"),
            placed(ShipKind::Submarine, "G1", "G3"),
            placed(ShipKind::PatrolBoat, "I1", "I2"),
        ])
        .unwrap()
    }

    /// The 17 spots of [`full_fleet`], fleet order.
    fn fleet_spots() -> Vec<Spot> {
        full_fleet()
            .ships()
            .iter()
            .flat_map(|p| p.line().spots())
            .collect()
    }

    /// Replays a fixed shot sequence and classifies against a fixed fleet.
    struct Scripted {
        fleet: Arrangement,
        shots: Vec<Spot>,
        cursor: usize,
        broadcasts: Rc<Cell<usize>>,
    }

    impl Scripted {
        fn new(fleet: Arrangement, shots: Vec<Spot>) -> Self {
            Self {
                fleet,
                shots,
                cursor: 0,
                broadcasts: Rc::new(Cell::new(0)),
            }
        }
    }

    impl Strategy for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_action(&mut self, me: Player, _state: &GameState) -> Result<Action, TurnError> {
            let target = self.shots[self.cursor];
            self.cursor += 1;
            Ok(Action::new(me, target))
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
            Ok(Response::new(me, action.target, hit, sunk)?)
        }

        fn register_response(
            &mut self,
            _actor: Player,
            _prior: &GameState,
            _action: &Action,
            _response: &Response,
        ) {
            self.broadcasts.set(self.broadcasts.get() + 1);
        }
    }

    #[test]
    fn scripted_game_runs_to_the_expected_winner() {
        // P1 shoots out every spot of P2's fleet; P2 pelts empty water.
        let p1_shots = fleet_spots();
        let p2_shots: Vec<Spot> = (1..=10)
            .map(|n| format!("J{}", n).parse().unwrap())
            .chain((1..=6).map(|n| format!("B{}", n).parse().unwrap()))
            .collect();
        assert_eq!(p1_shots.len(), 17);
        assert_eq!(p2_shots.len(), 16);

        let mut game = GameLoop::new(
            Box::new(Scripted::new(full_fleet(), p1_shots)),
            Box::new(Scripted::new(full_fleet(), p2_shots)),
        );

        // 17 shots for P1 interleaved with 16 for P2: the game ends on turn
        // 33 and not a turn earlier.
        for turn in 1..33 {
            assert_eq!(game.turn().unwrap(), None, "winner after turn {}", turn);
        }
        assert_eq!(game.turn().unwrap(), Some(Player::P1));

        let state = game.state();
        assert!(state.player(Player::P2).is_lost());
        assert_eq!(state.player(Player::P2).board().shot_count(), 17);
        assert_eq!(state.player(Player::P1).board().shot_count(), 16);
        assert!(state
            .player(Player::P1)
            .board()
            .shots()
            .all(|(_, hit)| !hit));
    }

    #[test]
    fn every_player_hears_every_broadcast() {
        let p1 = Scripted::new(full_fleet(), fleet_spots());
        let p2 = Scripted::new(
            full_fleet(),
            (1..=10).map(|n| format!("J{}", n).parse().unwrap()).collect(),
        );
        let (heard1, heard2) = (p1.broadcasts.clone(), p2.broadcasts.clone());
        let mut game = GameLoop::new(Box::new(p1), Box::new(p2));
        for _ in 0..9 {
            game.turn().unwrap();
        }
        assert_eq!(heard1.get(), 9);
        assert_eq!(heard2.get(), 9);
    }

    #[test]
    fn foreign_actions_abort_the_turn() {
        /// Attributes its actions to the opponent.
        struct Mischievous;

        impl Strategy for Mischievous {
            fn name(&self) -> &str {
                "mischievous"
            }

            fn choose_action(
                &mut self,
                me: Player,
                _state: &GameState,
            ) -> Result<Action, TurnError> {
                Ok(Action::new(me.opponent(), spot("A1")))
            }

            fn classify_shot(
                &mut self,
                me: Player,
                _state: &GameState,
                action: &Action,
            ) -> Result<Response, TurnError> {
                Ok(Response::new(me, action.target, false, None)?)
            }

            fn register_response(
                &mut self,
                _actor: Player,
                _prior: &GameState,
                _action: &Action,
                _response: &Response,
            ) {
            }
        }

        let mut game = GameLoop::new(Box::new(Mischievous), Box::new(Mischievous));
        match game.turn() {
            Err(TurnError::Protocol(ProtocolError::ForeignAction { expected, found })) => {
                assert_eq!(expected, Player::P1);
                assert_eq!(found, Player::P2);
            }
            other => panic!("expected a foreign-action error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn duplicate_targets_abort_the_turn() {
        let p1 = Box::new(Scripted::new(
            full_fleet(),
            vec![spot("J10"), spot("J10")],
        ));
        let p2 = Box::new(Scripted::new(full_fleet(), vec![spot("J9"), spot("J8")]));
        let mut game = GameLoop::new(p1, p2);
        assert_eq!(game.turn().unwrap(), None);
        assert_eq!(game.turn().unwrap(), None);
        match game.turn() {
            Err(TurnError::DuplicateShot(err)) => assert_eq!(err.spot(), spot("J10")),
            other => panic!("expected a duplicate-shot error, got {:?}", other.map(|_| ())),
        }
    }
}
