//! Move geometry and rule-set policy.
//!
//! A piece moves along a straight line (row or column) or a 45-degree
//! diagonal, at most [`MAX_RANGE`] squares along either axis. Shallow
//! "knight-like" offsets such as (2, 1) are never legal.
//!
//! The [`RuleSet::Standard`] rules check only that geometry plus piece
//! presence and destination occupancy. Intermediate squares and piece
//! ownership are not examined. [`RuleSet::Strict`] adds both checks.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_RANGE;
use crate::marker::Player;
use crate::quad::Quad;
use crate::square::Square;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RuleSet {
    /// Geometry, piece presence and destination occupancy only.
    #[default]
    Standard,
    /// Standard rules plus ownership and path-blocking checks.
    Strict,
}

impl RuleSet {
    pub fn name(self) -> &'static str {
        match self {
            RuleSet::Standard => "standard",
            RuleSet::Strict => "strict",
        }
    }

    pub fn checks_ownership(self) -> bool {
        self == RuleSet::Strict
    }

    pub fn checks_path(self) -> bool {
        self == RuleSet::Strict
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RuleSet::Standard),
            "strict" => Ok(RuleSet::Strict),
            other => Err(format!("unknown rule set '{other}' (expected 'standard' or 'strict')")),
        }
    }
}

/// Check the shape and range of a move, ignoring bounds and board contents.
///
/// Symmetric in `start` and `end`. A zero-length move is accepted.
pub fn is_valid_geometry(start: Square, end: Square) -> bool {
    let (dr, dc) = start.delta(end);
    if dr.max(dc) > MAX_RANGE {
        return false;
    }
    // Straight line, or a true diagonal with equal deltas
    dr == 0 || dc == 0 || dr == dc
}

/// Squares strictly between `start` and `end` along the line of movement.
///
/// Only meaningful for moves that pass [`is_valid_geometry`]; returns an
/// empty list for adjacent and zero-length moves.
pub fn path_between(start: Square, end: Square) -> Vec<Square> {
    let (dist_r, dist_c) = start.delta(end);
    let aligned = dist_r == 0 || dist_c == 0 || dist_r == dist_c;
    if !aligned {
        return Vec::new();
    }

    let step = |from: usize, to: usize| -> isize { (to as isize - from as isize).signum() };
    let dr = step(start.row, end.row);
    let dc = step(start.col, end.col);

    let steps = dist_r.max(dist_c);
    (1..steps)
        .map(|i| {
            let row = start.row as isize + dr * i as isize;
            let col = start.col as isize + dc * i as isize;
            Square::new(row as usize, col as usize)
        })
        .collect()
}

/// Every `(start, end)` pair that [`Quad::move_piece`] would accept for one
/// of `player`'s own pieces under the quad's rule set.
///
/// Only squares holding `player`'s marker are used as starts, whatever the
/// rule set. Standard rules still let a direct caller of `move_piece` move
/// any piece.
pub fn legal_moves(quad: &Quad, player: Player) -> Vec<(Square, Square)> {
    let mut moves = Vec::new();
    for start in Square::all() {
        if quad.marker_at(start) != Some(player.marker()) {
            continue;
        }
        for end in Square::all() {
            if quad.validate_move(start, end, player).is_ok() {
                moves.push((start, end));
            }
        }
    }
    moves
}
