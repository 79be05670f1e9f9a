//! Grid geometry: single cells ([`Spot`]) and axis-aligned runs of cells
//! ([`Line`]).
//!
//! Both axes are zero-based internally. The `row` axis maps to the letters
//! `A`..`J` and the `col` axis renders as the numbers `1`..`10`, so the label
//! for `Spot::new(0, 0)` is `"A1"` and the label for `Spot::new(9, 9)` is
//! `"J10"`. Spot ordering is `(row, col)` lexicographic, which matches label
//! order: `A1 < A2 < ... < A10 < B1`.

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(feature = "rng_gen")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

pub use self::errors::{GeometryError, ParseSpotError};

mod errors;

/// Width and height of the playing grid.
pub const SIZE: usize = 10;

/// Matcher for spot labels: a letter `A`-`J` (case-insensitive) followed by a
/// number `1`-`10`.
static SPOT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^([A-Ja-j])(10|[1-9])$").unwrap());

/// A single cell of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Spot {
    /// Letter axis, `0..10`, rendered `A`..`J`.
    row: usize,
    /// Number axis, `0..10`, rendered `1`..`10`.
    col: usize,
}

impl Spot {
    /// Construct a [`Spot`] from zero-based coordinates. Panics if either
    /// coordinate is out of bounds for the grid.
    pub fn new(row: usize, col: usize) -> Self {
        match Self::try_new(row, col) {
            Some(spot) => spot,
            None => panic!(
                "({}, {}) is out of bounds for a {}x{} grid",
                row, col, SIZE, SIZE
            ),
        }
    }

    /// Construct a [`Spot`] from zero-based coordinates. Returns `None` if
    /// either coordinate is out of bounds for the grid.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Zero-based row (letter axis).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based column (number axis).
    pub fn col(&self) -> usize {
        self.col
    }

    /// True iff the other spot is exactly one step away along one axis.
    pub fn is_adjacent(&self, other: Spot) -> bool {
        let dr = diff(self.row, other.row);
        let dc = diff(self.col, other.col);
        (dr == 0 && dc == 1) || (dr == 1 && dc == 0)
    }

    /// Iterate the in-bounds neighbors of this spot, up to four of them.
    pub fn neighbors(self) -> impl Iterator<Item = Spot> {
        const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        STEPS.iter().filter_map(move |&(dr, dc)| {
            let row = checked_step(self.row, dr)?;
            let col = checked_step(self.col, dc)?;
            Spot::try_new(row, col)
        })
    }
}

impl fmt::Display for Spot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.row as u8) as char, self.col + 1)
    }
}

impl FromStr for Spot {
    type Err = ParseSpotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = SPOT_PATTERN
            .captures(s)
            .ok_or_else(|| ParseSpotError::new(s))?;
        // The pattern guarantees a single letter and a number in range.
        let letter = captures[1].as_bytes()[0].to_ascii_uppercase();
        let number: usize = captures[2].parse().unwrap();
        Ok(Spot {
            row: (letter - b'A') as usize,
            col: number - 1,
        })
    }
}

#[cfg(feature = "rng_gen")]
impl Distribution<Spot> for Standard {
    /// Sample a uniformly random in-bounds [`Spot`].
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Spot {
        Spot {
            row: rng.gen_range(0, SIZE),
            col: rng.gen_range(0, SIZE),
        }
    }
}

fn diff(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

fn checked_step(base: usize, step: isize) -> Option<usize> {
    if step < 0 {
        base.checked_sub((-step) as usize)
    } else {
        Some(base + step as usize)
    }
}

/// An axis-aligned run of spots, normalized so `start <= finish` under spot
/// ordering. A line covering a single spot is permitted and counts as both
/// horizontal and vertical.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Line {
    start: Spot,
    finish: Spot,
}

impl Line {
    /// Construct the line joining two spots. The spots may be given in either
    /// order; fails if they share neither a row nor a column.
    pub fn new(a: Spot, b: Spot) -> Result<Self, GeometryError> {
        if a.row != b.row && a.col != b.col {
            Err(GeometryError::new(a, b))
        } else if a <= b {
            Ok(Self { start: a, finish: b })
        } else {
            Ok(Self { start: b, finish: a })
        }
    }

    /// Construct the degenerate line covering a single spot.
    pub fn spot(spot: Spot) -> Self {
        Self {
            start: spot,
            finish: spot,
        }
    }

    /// The lesser endpoint under spot ordering.
    pub fn start(&self) -> Spot {
        self.start
    }

    /// The greater endpoint under spot ordering.
    pub fn finish(&self) -> Spot {
        self.finish
    }

    /// True iff the line covers exactly one spot.
    pub fn is_spot(&self) -> bool {
        self.start == self.finish
    }

    /// True iff both endpoints share a column (number axis).
    pub fn is_vertical(&self) -> bool {
        self.start.col == self.finish.col
    }

    /// True iff both endpoints share a row (letter axis).
    pub fn is_horizontal(&self) -> bool {
        self.start.row == self.finish.row
    }

    /// Number of spots the line covers, including both endpoints.
    pub fn length(&self) -> usize {
        if self.is_vertical() {
            self.finish.row - self.start.row + 1
        } else {
            self.finish.col - self.start.col + 1
        }
    }

    /// True iff the given spot lies on this line.
    pub fn contains(&self, spot: Spot) -> bool {
        if self.is_vertical() {
            self.start.col == spot.col && self.contains_row(spot.row)
        } else {
            self.start.row == spot.row && self.contains_col(spot.col)
        }
    }

    fn contains_row(&self, row: usize) -> bool {
        self.start.row <= row && row <= self.finish.row
    }

    fn contains_col(&self, col: usize) -> bool {
        self.start.col <= col && col <= self.finish.col
    }

    /// True iff the two lines share at least one spot. Handles parallel
    /// overlap, T-junctions, and crossings; this is the sole overlap check
    /// used to reject illegal arrangements.
    pub fn intersects(&self, other: &Line) -> bool {
        if self.is_vertical() == other.is_vertical() {
            // Parallel (or both degenerate): endpoints are normalized, so the
            // spans overlap iff one line's start lies within the other.
            self.contains(other.start) || other.contains(self.start)
        } else if self.is_vertical() {
            self.contains_row(other.start.row) && other.contains_col(self.start.col)
        } else {
            self.contains_col(other.start.col) && other.contains_row(self.start.row)
        }
    }

    /// Iterate every spot from start to finish inclusive, in increasing
    /// order.
    pub fn spots(&self) -> Spots {
        Spots {
            line: *self,
            next: Some(self.start),
        }
    }

    /// Every line of the given length on the grid, both orientations, in a
    /// deterministic order. Length 1 yields 100 lines (the two orientations
    /// coincide on a single spot); length 5 yields 120.
    ///
    /// Panics if `length` is zero or exceeds the grid size.
    pub fn enumerate(length: usize) -> Vec<Line> {
        assert!(
            length >= 1 && length <= SIZE,
            "line length {} is not in 1..={}",
            length,
            SIZE
        );
        let mut lines = Vec::new();
        for row in 0..SIZE {
            for col in 0..=(SIZE - length) {
                lines.push(Line {
                    start: Spot::new(row, col),
                    finish: Spot::new(row, col + length - 1),
                });
            }
        }
        // Vertical runs of length 1 would duplicate the horizontal ones.
        if length > 1 {
            for col in 0..SIZE {
                for row in 0..=(SIZE - length) {
                    lines.push(Line {
                        start: Spot::new(row, col),
                        finish: Spot::new(row + length - 1, col),
                    });
                }
            }
        }
        lines
    }

    /// A uniformly random line of the given length: random orientation, then
    /// a random legal offset for that orientation.
    ///
    /// Panics if `length` is zero or exceeds the grid size.
    #[cfg(feature = "rng_gen")]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Line {
        assert!(
            length >= 1 && length <= SIZE,
            "line length {} is not in 1..={}",
            length,
            SIZE
        );
        let vertical = rng.gen::<bool>();
        let (row, col) = if vertical {
            (rng.gen_range(0, SIZE - length + 1), rng.gen_range(0, SIZE))
        } else {
            (rng.gen_range(0, SIZE), rng.gen_range(0, SIZE - length + 1))
        };
        let start = Spot::new(row, col);
        let finish = if vertical {
            Spot::new(row + length - 1, col)
        } else {
            Spot::new(row, col + length - 1)
        };
        // The endpoints share an axis by construction.
        Line::new(start, finish).unwrap()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.finish)
    }
}

/// Iterator over the spots of a [`Line`], start to finish inclusive.
#[derive(Debug, Clone)]
pub struct Spots {
    line: Line,
    next: Option<Spot>,
}

impl Iterator for Spots {
    type Item = Spot;

    fn next(&mut self) -> Option<Spot> {
        let current = self.next?;
        self.next = if current == self.line.finish {
            None
        } else if self.line.is_vertical() {
            Some(Spot::new(current.row + 1, current.col))
        } else {
            Some(Spot::new(current.row, current.col + 1))
        };
        Some(current)
    }
}
