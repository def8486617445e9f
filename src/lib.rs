//! Quadgame: rules engine for a board game played on 4x4 quads.
//!
//! Each quad is an independent 4x4 grid. Player 2 starts on the top row and
//! player 1 on the bottom row. A piece moves up to two squares in a straight
//! line or along a true diagonal.
//!
//! ## Modules
//!
//! - [`constants`] - Quad dimensions, movement range, marker symbols
//! - [`marker`] - Cell markers, players, and move kinds
//! - [`square`] - `(row, col)` coordinates and their text form
//! - [`quad`] - Core game logic (placement, validation, moves)
//! - [`rules`] - Move geometry, rule sets, legal move listing
//! - [`board`] - A board made of an even number of quads
//! - [`console`] - Text command protocol for front ends
//! - [`playout`] - Random self-play
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use quadgame::marker::{Marker, MoveKind, Player};
//! use quadgame::quad::Quad;
//!
//! let mut quad = Quad::new();
//! quad.move_piece((3, 0), (2, 1), Player::One, MoveKind::Passive).unwrap();
//! assert_eq!(quad.get(2, 1).unwrap(), Marker::Player1);
//!
//! // Three squares along the diagonal is out of range
//! assert!(quad.move_piece((3, 3), (0, 0), Player::One, MoveKind::Passive).is_err());
//! println!("{quad}");
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod error;
pub mod marker;
pub mod playout;
pub mod quad;
pub mod rules;
pub mod square;
