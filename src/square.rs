//! Square coordinates on a quad.
//!
//! A [`Square`] is a plain `(row, col)` pair. Construction never fails; the
//! quad validates bounds when a square is used, so an off-board square
//! surfaces as [`QuadError::OutOfBounds`] at the call that needs it.

use std::fmt;
use std::str::FromStr;

use crate::constants::QUAD_SIZE;
use crate::error::{ParseError, QuadError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    pub const fn new(row: usize, col: usize) -> Self {
        Square { row, col }
    }

    /// True if both components lie in `[0, QUAD_SIZE)`.
    pub fn in_bounds(self) -> bool {
        self.row < QUAD_SIZE && self.col < QUAD_SIZE
    }

    /// Return the square unchanged if it is on the quad.
    pub fn checked(self) -> Result<Self, QuadError> {
        if self.in_bounds() {
            Ok(self)
        } else {
            Err(QuadError::OutOfBounds {
                row: self.row,
                col: self.col,
            })
        }
    }

    /// Absolute (row, col) distance to `other`.
    pub fn delta(self, other: Square) -> (usize, usize) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }

    /// Iterate over every square of a quad in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..QUAD_SIZE).flat_map(|row| (0..QUAD_SIZE).map(move |col| Square { row, col }))
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Square { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parse a square from text.
///
/// Accepts `r,c`, `(r, c)`, `r c`, or two bare digits such as `30`.
/// Bounds are not checked here.
impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::Square(s.to_string());
        let trimmed = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim();

        let parts: Vec<&str> = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let (row, col) = match parts.as_slice() {
            [r, c] => (r.parse().map_err(|_| bad())?, c.parse().map_err(|_| bad())?),
            [rc] if rc.len() == 2 && rc.bytes().all(|b| b.is_ascii_digit()) => {
                let bytes = rc.as_bytes();
                ((bytes[0] - b'0') as usize, (bytes[1] - b'0') as usize)
            }
            _ => return Err(bad()),
        };

        Ok(Square { row, col })
    }
}
