use std::fmt;

use crate::constants::{EMPTY_MARK, PLAYER1_MARK, PLAYER2_MARK};
use crate::error::ParseError;

/// The content of a single quad cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Marker {
    /// Display symbol for this marker.
    pub fn symbol(self) -> char {
        match self {
            Marker::Empty => EMPTY_MARK,
            Marker::Player1 => PLAYER1_MARK,
            Marker::Player2 => PLAYER2_MARK,
        }
    }

    /// Parse a display symbol back into a marker.
    pub fn from_symbol(c: char) -> Result<Self, ParseError> {
        match c {
            EMPTY_MARK => Ok(Marker::Empty),
            PLAYER1_MARK => Ok(Marker::Player1),
            PLAYER2_MARK => Ok(Marker::Player2),
            other => Err(ParseError::Marker(other)),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Marker::Empty
    }

    /// Owner of the piece, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Marker::Empty => None,
            Marker::Player1 => Some(Player::One),
            Marker::Player2 => Some(Player::Two),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Build from the "is player one" flag used by callers that track turns as a bool.
    pub fn from_is_player1(is_player1: bool) -> Self {
        if is_player1 { Player::One } else { Player::Two }
    }

    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Marker written into the grid for this player's pieces.
    pub fn marker(self) -> Marker {
        match self {
            Player::One => Marker::Player1,
            Player::Two => Marker::Player2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }

    /// Parse the short console form (`p1`, `p2`, `1`, `2`, or a marker symbol).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p1" | "1" | "one" | "b" => Some(Player::One),
            "p2" | "2" | "two" | "w" => Some(Player::Two),
            _ => None,
        }
    }
}

/// Kind of move being made.
///
/// Aggressive moves are reserved for capturing and pushing, which the rules
/// engine does not implement yet; both kinds currently move identically.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MoveKind {
    #[default]
    Passive,
    Aggressive,
}

impl MoveKind {
    pub fn from_is_passive(is_passive: bool) -> Self {
        if is_passive {
            MoveKind::Passive
        } else {
            MoveKind::Aggressive
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passive" => Some(MoveKind::Passive),
            "aggressive" => Some(MoveKind::Aggressive),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct() {
        assert_ne!(PLAYER1_MARK, PLAYER2_MARK);
        assert_ne!(PLAYER1_MARK, EMPTY_MARK);
        assert_ne!(PLAYER2_MARK, EMPTY_MARK);
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Marker::from_symbol('b').unwrap(), Marker::Player1);
        assert_eq!(Marker::from_symbol('w').unwrap(), Marker::Player2);
        assert_eq!(Marker::from_symbol('~').unwrap(), Marker::Empty);
        assert!(Marker::from_symbol('x').is_err());
    }

    #[test]
    fn test_player_marker() {
        assert_eq!(Player::from_is_player1(true).marker(), Marker::Player1);
        assert_eq!(Player::from_is_player1(false).marker(), Marker::Player2);
        assert_eq!(Marker::Player2.player(), Some(Player::Two));
        assert_eq!(Marker::Empty.player(), None);
    }

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_parse_player_and_kind() {
        assert_eq!(Player::parse("P1"), Some(Player::One));
        assert_eq!(Player::parse("w"), Some(Player::Two));
        assert_eq!(Player::parse("p3"), None);
        assert_eq!(MoveKind::parse("Aggressive"), Some(MoveKind::Aggressive));
        assert_eq!(MoveKind::from_is_passive(true), MoveKind::Passive);
        assert_eq!(MoveKind::default(), MoveKind::Passive);
    }
}
