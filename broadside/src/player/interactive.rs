//! The human player, speaking through a [`Terminal`].
//!
//! The human keeps their own arrangement outside the program (on paper, as
//! the board game is played), so the defending capability here relays the
//! human's answers rather than consulting an in-process fleet.

use crate::{
    game::{Action, GameState, Player, Response, TurnError},
    grid::Spot,
    player::{Strategy, Terminal},
    ships::ShipKind,
};

/// A strategy driven by query/response text exchanges with a human.
pub struct InteractiveStrategy<T> {
    name: String,
    terminal: T,
}

impl<T: Terminal> InteractiveStrategy<T> {
    pub fn new(name: impl Into<String>, terminal: T) -> Self {
        Self {
            name: name.into(),
            terminal,
        }
    }
}

impl<T: Terminal> Strategy for InteractiveStrategy<T> {
    fn name(&self) -> &str {
        &self.name
    }

    /// Prompt for a target spot, re-prompting until the label is legal and
    /// names a spot not already fired at. Re-targeting a spot would abort
    /// the turn at the duplicate-shot check, so catch it at the prompt.
    fn choose_action(&mut self, me: Player, state: &GameState) -> Result<Action, TurnError> {
        let tried = state.player(me.opponent()).board();
        loop {
            let input = self.terminal.query("Shot?")?;
            match input.trim().parse::<Spot>() {
                Ok(target) if tried.is_no_shot(target) => {
                    return Ok(Action::new(me, target));
                }
                Ok(target) => {
                    self.terminal
                        .info(&format!("You already fired at {}.", target));
                }
                Err(err) => self.terminal.info(&err.to_string()),
            }
        }
    }

    /// Ask the human to classify the incoming shot against their own board:
    /// first hit or miss, then, on a hit, which ship was sunk, if any.
    fn classify_shot(
        &mut self,
        me: Player,
        _state: &GameState,
        action: &Action,
    ) -> Result<Response, TurnError> {
        let hit = loop {
            let answer = self.terminal.query(&format!("{}?", action.target))?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "hit" | "h" => break true,
                "miss" | "m" => break false,
                _ => self.terminal.info("Answer hit or miss."),
            }
        };
        let sunk = if hit {
            // Anything that isn't a ship name means nothing was sunk.
            self.terminal.query("Sunk?")?.trim().parse::<ShipKind>().ok()
        } else {
            None
        };
        Ok(Response::new(me, action.target, hit, sunk)?)
    }

    fn register_response(
        &mut self,
        _actor: Player,
        _prior: &GameState,
        _action: &Action,
        response: &Response,
    ) {
        self.terminal.info(&response.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{collections::VecDeque, io};

    /// Terminal fed from a fixed script of answers.
    struct ScriptedTerminal {
        answers: VecDeque<&'static str>,
        transcript: Vec<String>,
    }

    impl ScriptedTerminal {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                transcript: Vec::new(),
            }
        }
    }

    impl Terminal for ScriptedTerminal {
        fn query(&mut self, prompt: &str) -> io::Result<String> {
            self.transcript.push(format!("? {}", prompt));
            Ok(self.answers.pop_front().expect("script exhausted").to_owned())
        }

        fn info(&mut self, message: &str) {
            self.transcript.push(format!("! {}", message));
        }
    }

    #[test]
    fn bad_spot_labels_reprompt() {
        let terminal = ScriptedTerminal::new(&["K11", "b7\n"]);
        let mut player = InteractiveStrategy::new("Human", terminal);
        let action = player.choose_action(Player::P1, &GameState::new()).unwrap();
        assert_eq!(action.target, "B7".parse().unwrap());
        // One rejection message between the two prompts.
        assert_eq!(player.terminal.transcript.len(), 3);
    }

    #[test]
    fn already_shot_spots_reprompt() {
        use crate::game::PlayerState;

        let opponent = PlayerState::new()
            .with_shot("B7".parse().unwrap(), false)
            .unwrap();
        let state = GameState::new().with_player(Player::P2, opponent);

        let terminal = ScriptedTerminal::new(&["B7", "C7"]);
        let mut player = InteractiveStrategy::new("Human", terminal);
        let action = player.choose_action(Player::P1, &state).unwrap();
        assert_eq!(action.target, "C7".parse().unwrap());
        assert!(player
            .terminal
            .transcript
            .iter()
            .any(|entry| entry.contains("already fired")));
    }

    #[test]
    fn classification_relays_the_answers() {
        let action = Action::new(Player::P1, "C3".parse().unwrap());

        let terminal = ScriptedTerminal::new(&["miss"]);
        let mut player = InteractiveStrategy::new("Human", terminal);
        let response = player
            .classify_shot(Player::P2, &GameState::new(), &action)
            .unwrap();
        assert!(!response.hit());
        assert_eq!(response.sunk(), None);

        let terminal = ScriptedTerminal::new(&["HIT", "sub"]);
        let mut player = InteractiveStrategy::new("Human", terminal);
        let response = player
            .classify_shot(Player::P2, &GameState::new(), &action)
            .unwrap();
        assert!(response.hit());
        assert_eq!(response.sunk(), Some(ShipKind::Submarine));

        let terminal = ScriptedTerminal::new(&["wat", "hit", "no"]);
        let mut player = InteractiveStrategy::new("Human", terminal);
        let response = player
            .classify_shot(Player::P2, &GameState::new(), &action)
            .unwrap();
        assert!(response.hit());
        assert_eq!(response.sunk(), None);
    }
}
