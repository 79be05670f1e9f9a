//! Errors raised when building placements and arrangements.

use thiserror::Error;

use crate::{
    grid::Line,
    ships::{Placement, ShipKind},
};

/// Error returned when a ship kind fails to parse.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown ship {name:?}: expected carrier, battleship, destroyer, submarine, or patrol boat")]
pub struct ParseShipError {
    name: String,
}

impl ParseShipError {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// The name that was rejected.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Error returned when binding a ship to a line of the wrong length.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{kind} cannot occupy {line}: the lengths do not match")]
pub struct ShipSizeError {
    kind: ShipKind,
    line: Line,
}

impl ShipSizeError {
    pub(super) fn new(kind: ShipKind, line: Line) -> Self {
        Self { kind, line }
    }

    /// The ship that was being placed.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// The line that did not fit it.
    pub fn line(&self) -> Line {
        self.line
    }
}

/// Error returned when two placements of an arrangement share a spot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("{first} overlaps {second}")]
pub struct OverlapError {
    first: Placement,
    second: Placement,
}

impl OverlapError {
    pub(super) fn new(first: Placement, second: Placement) -> Self {
        Self { first, second }
    }

    /// The two placements that intersect.
    pub fn placements(&self) -> (Placement, Placement) {
        (self.first, self.second)
    }
}
