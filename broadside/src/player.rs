//! Player strategies and the capabilities the engine consumes.
//!
//! Every player is a single [`Strategy`] value: it chooses actions, hears
//! the broadcast of every turn's outcome, and, on the defending side,
//! classifies incoming shots. The classification capability is privileged:
//! only a party holding (or, for a human, remembering) the defender's
//! arrangement can implement it truthfully, and the engine only ever invokes
//! it on the player being fired upon.

use std::io;

use crate::game::{Action, GameState, Player, Response, TurnError};

#[cfg(feature = "rng_gen")]
pub use self::random::RandomStrategy;
pub use self::interactive::InteractiveStrategy;

mod interactive;
#[cfg(feature = "rng_gen")]
mod random;

/// The full capability set of one player, consumed by the game loop.
pub trait Strategy {
    /// Short display name for announcements.
    fn name(&self) -> &str;

    /// Choose this turn's action given the public state. The engine enforces
    /// no precondition on the choice beyond correct attribution; a strategy
    /// that targets an already-shot spot will see the turn rejected when the
    /// shot is recorded.
    fn choose_action(&mut self, me: Player, state: &GameState) -> Result<Action, TurnError>;

    /// Classify a shot against this player's own hidden arrangement. Only
    /// invoked on the defender.
    fn classify_shot(
        &mut self,
        me: Player,
        state: &GameState,
        action: &Action,
    ) -> Result<Response, TurnError>;

    /// Observe a completed turn: who acted, the state it was played from,
    /// and how the defender classified it. Broadcast to every player purely
    /// for bookkeeping; nothing returned here affects the state transition.
    fn register_response(
        &mut self,
        actor: Player,
        prior: &GameState,
        action: &Action,
        response: &Response,
    );
}

/// A line-oriented text console the interactive strategy speaks through.
/// The core treats it as an opaque collaborator; the command-line front end
/// provides the stdin/stdout implementation.
pub trait Terminal {
    /// Show a prompt and read one line of input.
    fn query(&mut self, prompt: &str) -> io::Result<String>;

    /// Show an informational message.
    fn info(&mut self, message: &str);
}
