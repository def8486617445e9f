//! Random self-play on a single quad.
//!
//! A playout alternates players, starting with player 1, and picks uniformly
//! among the moves [`legal_moves`] reports for the player to move. It stops
//! when that player has nothing to play or the move cap is reached. Turn
//! order lives here; the quad itself does not enforce it.

use std::fmt;

use crate::marker::{MoveKind, Player};
use crate::quad::Quad;
use crate::rules::legal_moves;
use crate::square::Square;

/// One move played during a playout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub start: Square,
    pub end: Square,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.player.name(), self.start, self.end)
    }
}

/// Play random moves on `quad` until a player is stuck or `max_moves` is hit.
///
/// The same `rng` seed and starting quad always produce the same game.
pub fn random_game(quad: &mut Quad, max_moves: usize, rng: &mut fastrand::Rng) -> Vec<MoveRecord> {
    let mut record = Vec::with_capacity(max_moves);
    let mut player = Player::One;

    while record.len() < max_moves {
        let candidates = legal_moves(quad, player);
        if candidates.is_empty() {
            break;
        }
        let (start, end) = candidates[rng.usize(..candidates.len())];

        // Candidates were produced by the same validation move_piece runs
        if quad
            .move_piece(start, end, player, MoveKind::Passive)
            .is_err()
        {
            break;
        }
        record.push(MoveRecord { player, start, end });
        player = player.other();
    }

    record
}

/// Print every move of a playout to stderr.
pub fn dump_record(record: &[MoveRecord]) {
    for (i, mv) in record.iter().enumerate() {
        eprintln!("move {:>3} {mv}", i + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::Marker;
    use crate::rules::RuleSet;

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Quad::new();
        let mut b = Quad::new();
        let ra = random_game(&mut a, 30, &mut fastrand::Rng::with_seed(7));
        let rb = random_game(&mut b, 30, &mut fastrand::Rng::with_seed(7));
        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }

    #[test]
    fn test_respects_move_cap_and_alternates() {
        let mut quad = Quad::new();
        let record = random_game(&mut quad, 10, &mut fastrand::Rng::with_seed(1));
        assert!(record.len() <= 10);
        for pair in record.windows(2) {
            assert_ne!(pair[0].player, pair[1].player);
        }
        if let Some(first) = record.first() {
            assert_eq!(first.player, Player::One);
        }
    }

    #[test]
    fn test_piece_count_is_preserved() {
        // Each player only moves its own pieces and nothing is captured
        for rules in [RuleSet::Standard, RuleSet::Strict] {
            for seed in [1, 7, 42] {
                let mut quad = Quad::with_rules(rules);
                random_game(&mut quad, 40, &mut fastrand::Rng::with_seed(seed));
                assert_eq!(quad.count(Marker::Player1), 4, "{rules} seed {seed}\n{quad}");
                assert_eq!(quad.count(Marker::Player2), 4, "{rules} seed {seed}\n{quad}");
            }
        }
    }

    #[test]
    fn test_moves_only_own_pieces() {
        let mut quad = Quad::new();
        let mut replay = Quad::new();
        let record = random_game(&mut quad, 40, &mut fastrand::Rng::with_seed(42));
        for mv in &record {
            assert_eq!(replay.marker_at(mv.start), Some(mv.player.marker()), "{mv}");
            replay
                .move_piece(mv.start, mv.end, mv.player, MoveKind::Passive)
                .unwrap();
        }
        assert_eq!(replay, quad);
    }

    #[test]
    fn test_zero_moves() {
        let mut quad = Quad::new();
        assert!(random_game(&mut quad, 0, &mut fastrand::Rng::with_seed(3)).is_empty());
        assert_eq!(quad, Quad::new());
    }
}
