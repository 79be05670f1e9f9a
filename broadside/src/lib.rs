//! Core engine for the classic game of Battleship on a 10x10 grid.
//!
//! The engine is split between the geometry and combinatorics of fleet
//! placement and the immutable state machine that plays the game out:
//!
//! - [`grid`] defines the cells and axis-aligned lines of the grid, with
//!   parsing to and from the usual `"A1"`..`"J10"` labels.
//! - [`ships`] defines the fixed five-ship catalog, placements of ships on
//!   lines, and [`Arrangement`][ships::Arrangement]: a validated
//!   non-overlapping fleet with exhaustive and randomized generation.
//! - [`board`] records the shots one player has received.
//! - [`game`] holds the immutable [`GameState`][game::GameState] snapshot,
//!   the action/response protocol, and the alternating-turn
//!   [`GameLoop`][game::GameLoop].
//! - [`player`] defines the [`Strategy`][player::Strategy] capability trait
//!   the loop consumes, plus the two reference strategies: a random-shot
//!   computer player and a terminal-driven human player.
//!
//! Arrangements are per-player secrets: the engine never hands one player's
//! fleet to the other, and every turn routes the shot to the defender's own
//! classification. All state transitions are value-to-value; nothing holds a
//! mutable back-reference to a [`GameState`][game::GameState].

pub mod board;
pub mod game;
pub mod grid;
pub mod player;
pub mod ships;
