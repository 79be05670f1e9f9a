//! The fixed ship catalog and the binding of ships to grid positions.

use std::{fmt, str::FromStr};

use enumflags2::BitFlags;

use crate::{
    board::Board,
    grid::{Line, Spot},
};

pub use self::{
    arrangement::{enumerate_arrangements, Arrangement, Arrangements},
    errors::{OverlapError, ParseShipError, ShipSizeError},
};

pub mod arrangement;
mod errors;

/// A member of the fixed five-ship fleet. Declared as bitflags so that a set
/// of ship kinds (such as the sunk ships of one player) is a cheap
/// [`BitFlags<ShipKind>`] value.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum ShipKind {
    /// Carrier: length 5.
    Carrier = 0b00001,
    /// Battleship: length 4.
    Battleship = 0b00010,
    /// Destroyer: length 3.
    Destroyer = 0b00100,
    /// Submarine: length 3.
    Submarine = 0b01000,
    /// Patrol boat: length 2.
    PatrolBoat = 0b10000,
}

impl ShipKind {
    /// The full catalog, in fleet order.
    pub const ALL: [ShipKind; 5] = [
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Destroyer,
        ShipKind::Submarine,
        ShipKind::PatrolBoat,
    ];

    /// Number of spots a ship of this kind covers.
    pub fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Destroyer => 3,
            ShipKind::Submarine => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Submarine => "Submarine",
            ShipKind::PatrolBoat => "Patrol Boat",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ShipKind {
    type Err = ParseShipError;

    /// Parse a ship kind from its full name or the usual two-letter
    /// abbreviation, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "carrier" | "cv" => Ok(ShipKind::Carrier),
            "battleship" | "bb" => Ok(ShipKind::Battleship),
            "destroyer" | "dd" => Ok(ShipKind::Destroyer),
            "submarine" | "sub" | "ss" => Ok(ShipKind::Submarine),
            "patrol boat" | "patrolboat" | "patrol" | "pt" => Ok(ShipKind::PatrolBoat),
            _ => Err(ParseShipError::new(s)),
        }
    }
}

/// One ship bound to the line of spots it occupies. Placements are immutable;
/// per-cell hit bookkeeping lives in the defending player's [`Board`], so
/// whether a placement is sunk is the pure function [`Placement::sunk_by`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Placement {
    kind: ShipKind,
    line: Line,
}

impl Placement {
    /// Bind a ship to a line. Fails unless the line covers exactly as many
    /// spots as the ship's length.
    pub fn new(kind: ShipKind, line: Line) -> Result<Self, ShipSizeError> {
        if line.length() != kind.length() {
            Err(ShipSizeError::new(kind, line))
        } else {
            Ok(Self { kind, line })
        }
    }

    /// The kind of ship placed here.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// The line of spots the ship occupies.
    pub fn line(&self) -> Line {
        self.line
    }

    /// True iff the spot lies within this placement's line.
    pub fn contains(&self, spot: Spot) -> bool {
        self.line.contains(spot)
    }

    /// True iff every spot of this placement has a hit recorded against it.
    pub fn sunk_by(&self, board: &Board) -> bool {
        self.line.spots().all(|spot| board.is_hit(spot))
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} @ {}", self.kind, self.line)
    }
}
