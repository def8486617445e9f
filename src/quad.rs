//! A single 4x4 quad: piece placement, move validation, and move execution.
//!
//! The grid is row-major with row 0 at the top. After [`Quad::reset`] player 2
//! fills row 0, player 1 fills row 3, and the two middle rows are empty.
//!
//! Moves are checked in a fixed order so that the first failure is the one
//! reported:
//! 1. both squares are on the quad ([`QuadError::OutOfBounds`])
//! 2. a piece stands on the start square
//! 3. the piece belongs to the mover ([`RuleSet::Strict`] only)
//! 4. shape and range of the move
//! 5. the squares in between are empty ([`RuleSet::Strict`] only)
//! 6. the destination is empty
//!
//! A rejected move never touches the grid.

use std::fmt;
use std::str::FromStr;

use crate::constants::{PLAYER1_HOME_ROW, PLAYER2_HOME_ROW, QUAD_CELLS, QUAD_SIZE};
use crate::error::{ParseError, QuadError, Rejection};
use crate::marker::{Marker, MoveKind, Player};
use crate::rules::{self, RuleSet};
use crate::square::Square;

pub type Grid = [[Marker; QUAD_SIZE]; QUAD_SIZE];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quad {
    cells: Grid,
    rules: RuleSet,
}

impl Default for Quad {
    fn default() -> Self {
        Self::new()
    }
}

impl Quad {
    /// Create a quad at the starting layout with the standard rules.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::Standard)
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        let mut q = Quad {
            cells: [[Marker::Empty; QUAD_SIZE]; QUAD_SIZE],
            rules,
        };
        q.reset();
        q
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    /// Restore the starting layout, discarding every prior move.
    pub fn reset(&mut self) {
        self.cells = [[Marker::Empty; QUAD_SIZE]; QUAD_SIZE];
        self.cells[PLAYER2_HOME_ROW] = [Marker::Player2; QUAD_SIZE];
        self.cells[PLAYER1_HOME_ROW] = [Marker::Player1; QUAD_SIZE];
    }

    /// Read-only view of the grid.
    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Marker at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Marker, QuadError> {
        let sq = Square::new(row, col).checked()?;
        Ok(self.cells[sq.row][sq.col])
    }

    /// Marker at `sq`, or `None` if the square is off the quad.
    pub fn marker_at(&self, sq: Square) -> Option<Marker> {
        sq.in_bounds().then(|| self.cells[sq.row][sq.col])
    }

    /// Write `marker` at `(row, col)`.
    ///
    /// Clearing a cell always succeeds. Placing a piece succeeds only on an
    /// empty cell; otherwise nothing is written and `Ok(false)` is returned.
    pub fn set(&mut self, row: usize, col: usize, marker: Marker) -> Result<bool, QuadError> {
        let sq = Square::new(row, col).checked()?;
        let cell = &mut self.cells[sq.row][sq.col];
        if cell.is_empty() || marker.is_empty() {
            *cell = marker;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Check the shape and range of a move between two squares.
    ///
    /// Does not look at board contents. Both squares must be on the quad.
    pub fn check_move(
        &self,
        start: impl Into<Square>,
        end: impl Into<Square>,
    ) -> Result<bool, QuadError> {
        let start: Square = start.into();
        let end: Square = end.into();
        let (start, end) = (start.checked()?, end.checked()?);
        Ok(rules::is_valid_geometry(start, end))
    }

    /// Run every check [`move_piece`](Self::move_piece) performs without
    /// mutating the quad.
    pub fn validate_move(
        &self,
        start: impl Into<Square>,
        end: impl Into<Square>,
        player: Player,
    ) -> Result<(), QuadError> {
        let start: Square = start.into();
        let end: Square = end.into();
        let (start, end) = (start.checked()?, end.checked()?);
        let reject = |reason| QuadError::InvalidMove { start, end, reason };

        let piece = self.cells[start.row][start.col];
        if piece.is_empty() {
            return Err(reject(Rejection::NoPiece));
        }
        if self.rules.checks_ownership() && piece != player.marker() {
            return Err(reject(Rejection::NotOwnPiece));
        }
        if !rules::is_valid_geometry(start, end) {
            return Err(reject(Rejection::IllegalGeometry));
        }
        if self.rules.checks_path()
            && rules::path_between(start, end)
                .iter()
                .any(|sq| !self.cells[sq.row][sq.col].is_empty())
        {
            return Err(reject(Rejection::PathBlocked));
        }
        if !self.cells[end.row][end.col].is_empty() {
            return Err(reject(Rejection::DestinationOccupied));
        }
        Ok(())
    }

    /// Move the piece on `start` to `end` on behalf of `player`.
    ///
    /// The piece written to `end` is `player`'s marker. Under standard rules
    /// the piece on `start` is not required to belong to `player`.
    /// Aggressive moves are not implemented, so both kinds of move behave
    /// the same way.
    pub fn move_piece(
        &mut self,
        start: impl Into<Square>,
        end: impl Into<Square>,
        player: Player,
        _kind: MoveKind,
    ) -> Result<(), QuadError> {
        let start: Square = start.into();
        let end: Square = end.into();
        self.validate_move(start, end, player)?;

        self.set(start.row, start.col, Marker::Empty)?;
        let placed = self.set(end.row, end.col, player.marker())?;
        debug_assert!(placed, "validated destination must be empty");
        Ok(())
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells.iter().flatten().filter(|&&m| m == marker).count()
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse the rendered form: sixteen marker symbols in row-major order.
/// Whitespace between symbols is ignored. The result uses standard rules.
impl FromStr for Quad {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != QUAD_CELLS {
            return Err(ParseError::Grid(format!(
                "expected {QUAD_CELLS} cells, found {}",
                symbols.len()
            )));
        }

        let mut cells = [[Marker::Empty; QUAD_SIZE]; QUAD_SIZE];
        for (i, &c) in symbols.iter().enumerate() {
            cells[i / QUAD_SIZE][i % QUAD_SIZE] = Marker::from_symbol(c)?;
        }
        Ok(Quad {
            cells,
            rules: RuleSet::Standard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_quad_is_reset() {
        let quad = Quad::new();
        for col in 0..QUAD_SIZE {
            assert_eq!(quad.get(0, col).unwrap(), Marker::Player2);
            assert_eq!(quad.get(3, col).unwrap(), Marker::Player1);
            assert_eq!(quad.get(1, col).unwrap(), Marker::Empty);
            assert_eq!(quad.get(2, col).unwrap(), Marker::Empty);
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let quad = Quad::new();
        assert_eq!(quad.get(4, 0), Err(QuadError::OutOfBounds { row: 4, col: 0 }));
        assert_eq!(quad.marker_at(Square::new(0, 4)), None);
    }

    #[test]
    fn test_set_guards_occupied_cells() {
        let mut quad = Quad::new();

        // Placing onto an occupied cell is refused
        assert_eq!(quad.set(0, 0, Marker::Player1), Ok(false));
        assert_eq!(quad.get(0, 0).unwrap(), Marker::Player2);

        // Clearing is always allowed
        assert_eq!(quad.set(0, 0, Marker::Empty), Ok(true));
        assert_eq!(quad.get(0, 0).unwrap(), Marker::Empty);

        // Placing onto an empty cell works
        assert_eq!(quad.set(1, 1, Marker::Player1), Ok(true));
        assert_eq!(quad.get(1, 1).unwrap(), Marker::Player1);
    }

    #[test]
    fn test_display() {
        let quad = Quad::new();
        assert_eq!(
            quad.to_string(),
            "w w w w \n~ ~ ~ ~ \n~ ~ ~ ~ \nb b b b \n"
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        let mut quad = Quad::new();
        quad.move_piece((3, 0), (2, 1), Player::One, MoveKind::Passive)
            .unwrap();
        let parsed: Quad = quad.to_string().parse().unwrap();
        assert_eq!(parsed, quad);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("b b".parse::<Quad>(), Err(ParseError::Grid(_))));
        assert_eq!(
            "wwww ~~~~ ~~x~ bbbb".parse::<Quad>(),
            Err(ParseError::Marker('x'))
        );
    }

    #[test]
    fn test_move_rejects_occupied_destination() {
        let mut quad = Quad::new();
        let before = quad.clone();
        let err = quad
            .move_piece((3, 0), (3, 1), Player::One, MoveKind::Passive)
            .unwrap_err();
        assert_eq!(err.rejection(), Some(Rejection::DestinationOccupied));
        assert_eq!(quad, before);
    }

    #[test]
    fn test_move_uses_player_marker() {
        // Standard rules do not check ownership: player 1 may move a player 2 piece,
        // and the piece lands as player 1's marker.
        let mut quad = Quad::new();
        quad.move_piece((0, 0), (1, 0), Player::One, MoveKind::Passive)
            .unwrap();
        assert_eq!(quad.get(1, 0).unwrap(), Marker::Player1);
        assert_eq!(quad.get(0, 0).unwrap(), Marker::Empty);
    }

    #[test]
    fn test_strict_rules() {
        let mut quad = Quad::with_rules(RuleSet::Strict);

        let err = quad
            .move_piece((0, 0), (1, 0), Player::One, MoveKind::Passive)
            .unwrap_err();
        assert_eq!(err.rejection(), Some(Rejection::NotOwnPiece));

        quad.move_piece((3, 1), (2, 1), Player::One, MoveKind::Passive)
            .unwrap();
        let err = quad
            .move_piece((3, 1), (1, 1), Player::One, MoveKind::Passive)
            .unwrap_err();
        // (3, 1) is empty now
        assert_eq!(err.rejection(), Some(Rejection::NoPiece));

        // Jumping over the piece on (2, 1)
        let err = quad
            .move_piece((3, 0), (1, 2), Player::One, MoveKind::Passive)
            .unwrap_err();
        assert_eq!(err.rejection(), Some(Rejection::PathBlocked));
    }

    #[test]
    fn test_standard_rules_ignore_path() {
        let mut quad = Quad::new();
        quad.move_piece((3, 1), (2, 1), Player::One, MoveKind::Passive)
            .unwrap();
        quad.move_piece((3, 0), (1, 2), Player::One, MoveKind::Passive)
            .unwrap();
        assert_eq!(quad.get(1, 2).unwrap(), Marker::Player1);
    }

    #[test]
    fn test_aggressive_moves_like_passive() {
        let mut passive = Quad::new();
        let mut aggressive = Quad::new();
        passive
            .move_piece((3, 2), (1, 2), Player::One, MoveKind::Passive)
            .unwrap();
        aggressive
            .move_piece((3, 2), (1, 2), Player::One, MoveKind::Aggressive)
            .unwrap();
        assert_eq!(passive, aggressive);
    }

    #[test]
    fn test_count() {
        let quad = Quad::new();
        assert_eq!(quad.count(Marker::Player1), 4);
        assert_eq!(quad.count(Marker::Player2), 4);
        assert_eq!(quad.count(Marker::Empty), 8);
    }
}
