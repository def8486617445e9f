//! Error types for the rules engine.
//!
//! [`QuadError::OutOfBounds`] is a contract violation by the caller.
//! [`QuadError::InvalidMove`] is the user-facing rejection a UI is expected to
//! catch, report, and re-prompt on.

use std::fmt;

use crate::square::Square;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No piece stands on the start square.
    NoPiece,
    /// The end square is out of range or not on a straight or 45-degree line.
    IllegalGeometry,
    /// The end square already holds a piece.
    DestinationOccupied,
    /// The piece on the start square belongs to the other player (strict rules).
    NotOwnPiece,
    /// A square between start and end is occupied (strict rules).
    PathBlocked,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Rejection::NoPiece => "no piece on the start square",
            Rejection::IllegalGeometry => "destination is not reachable in one move",
            Rejection::DestinationOccupied => "destination is occupied",
            Rejection::NotOwnPiece => "piece belongs to the other player",
            Rejection::PathBlocked => "path is blocked",
        };
        f.write_str(msg)
    }
}

/// Errors raised by [`Quad`](crate::quad::Quad) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuadError {
    #[error("square ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("could not move piece from {start} to {end}: {reason}")]
    InvalidMove {
        start: Square,
        end: Square,
        reason: Rejection,
    },
}

impl QuadError {
    /// Rejection reason for an invalid move, `None` for bounds errors.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            QuadError::InvalidMove { reason, .. } => Some(*reason),
            QuadError::OutOfBounds { .. } => None,
        }
    }
}

/// Errors raised by [`Board`](crate::board::Board) construction and access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("a board needs at least one pair of quads")]
    NoQuads,

    #[error("number of quads must be even (got {0})")]
    OddQuadCount(usize),

    #[error("quad {index} does not exist (board has {count})")]
    QuadIndex { index: usize, count: usize },

    #[error(transparent)]
    Quad(#[from] QuadError),
}

/// Errors raised while parsing squares, markers, or rendered grids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid square: {0:?}")]
    Square(String),

    #[error("unknown marker symbol {0:?}")]
    Marker(char),

    #[error("invalid grid: {0}")]
    Grid(String),
}
