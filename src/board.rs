use std::fmt;

use crate::constants::DEFAULT_NUM_QUADS;
use crate::error::BoardError;
use crate::marker::{MoveKind, Player};
use crate::quad::Quad;
use crate::rules::RuleSet;
use crate::square::Square;

/// A game board made of an even number of independent quads.
///
/// Pieces never cross between quads; every move is delegated to one quad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    quads: Vec<Quad>,
    rules: RuleSet,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            quads: vec![Quad::new(); DEFAULT_NUM_QUADS],
            rules: RuleSet::Standard,
        }
    }
}

impl Board {
    pub fn new(num_quads: usize) -> Result<Self, BoardError> {
        Self::with_rules(num_quads, RuleSet::Standard)
    }

    pub fn with_rules(num_quads: usize, rules: RuleSet) -> Result<Self, BoardError> {
        if num_quads == 0 {
            return Err(BoardError::NoQuads);
        }
        if num_quads % 2 != 0 {
            return Err(BoardError::OddQuadCount(num_quads));
        }
        Ok(Self {
            quads: vec![Quad::with_rules(rules); num_quads],
            rules,
        })
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Switch every quad to `rules`. Piece placement is kept.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.rules = rules;
        for q in &mut self.quads {
            q.set_rules(rules);
        }
    }

    pub fn quad(&self, index: usize) -> Result<&Quad, BoardError> {
        let count = self.quads.len();
        self.quads
            .get(index)
            .ok_or(BoardError::QuadIndex { index, count })
    }

    pub fn quad_mut(&mut self, index: usize) -> Result<&mut Quad, BoardError> {
        let count = self.quads.len();
        self.quads
            .get_mut(index)
            .ok_or(BoardError::QuadIndex { index, count })
    }

    pub fn quads(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    /// Reset every quad to the starting layout.
    pub fn reset(&mut self) {
        for q in &mut self.quads {
            q.reset();
        }
    }

    /// Move a piece within quad `index`.
    pub fn move_piece(
        &mut self,
        index: usize,
        start: Square,
        end: Square,
        player: Player,
        kind: MoveKind,
    ) -> Result<(), BoardError> {
        self.quad_mut(index)?.move_piece(start, end, player, kind)?;
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, q) in self.quads.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "Quad {i}:")?;
            write!(f, "{q}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuadError;
    use crate::marker::Marker;

    #[test]
    fn test_quad_count_must_be_even() {
        assert_eq!(Board::new(0), Err(BoardError::NoQuads));
        assert_eq!(Board::new(3), Err(BoardError::OddQuadCount(3)));
        assert_eq!(Board::new(2).unwrap().len(), 2);
        assert_eq!(Board::default().len(), DEFAULT_NUM_QUADS);
    }

    #[test]
    fn test_quads_are_independent() {
        let mut board = Board::new(2).unwrap();
        board
            .move_piece(0, Square::new(3, 0), Square::new(2, 0), Player::One, MoveKind::Passive)
            .unwrap();
        assert_eq!(board.quad(0).unwrap().get(2, 0).unwrap(), Marker::Player1);
        assert_eq!(board.quad(1).unwrap().get(2, 0).unwrap(), Marker::Empty);

        board.reset();
        assert_eq!(board.quad(0).unwrap(), &Quad::new());
    }

    #[test]
    fn test_bad_index_and_move_errors() {
        let mut board = Board::new(4).unwrap();
        assert_eq!(
            board.quad(4).unwrap_err(),
            BoardError::QuadIndex { index: 4, count: 4 }
        );
        let err = board
            .move_piece(1, Square::new(0, 0), Square::new(5, 0), Player::Two, MoveKind::Passive)
            .unwrap_err();
        assert_eq!(err, BoardError::Quad(QuadError::OutOfBounds { row: 5, col: 0 }));
    }

    #[test]
    fn test_set_rules_applies_to_all_quads() {
        let mut board = Board::new(2).unwrap();
        board.set_rules(RuleSet::Strict);
        assert!(board.quads().all(|q| q.rules() == RuleSet::Strict));
    }

    #[test]
    fn test_display_headings() {
        let board = Board::new(2).unwrap();
        let text = board.to_string();
        assert!(text.starts_with("Quad 0:\n"));
        assert!(text.contains("\nQuad 1:\n"));
    }
}
