//! Constants for quad geometry, movement range, and marker symbols.
//!
//! A quad is a fixed 4x4 grid addressed by `(row, col)` with row 0 at the
//! top. Player 2 starts on row 0 and player 1 on row 3.

// =============================================================================
// Quad Geometry
// =============================================================================

/// Quad size (NxN). Every quad in the game is 4x4.
pub const QUAD_SIZE: usize = 4;

/// Number of cells on one quad.
pub const QUAD_CELLS: usize = QUAD_SIZE * QUAD_SIZE;

/// Home row of player 1 after a reset.
pub const PLAYER1_HOME_ROW: usize = QUAD_SIZE - 1;

/// Home row of player 2 after a reset.
pub const PLAYER2_HOME_ROW: usize = 0;

// =============================================================================
// Movement
// =============================================================================

/// Maximum distance a piece may travel along either axis in one move.
pub const MAX_RANGE: usize = 2;

// =============================================================================
// Board Composition
// =============================================================================

/// Default number of quads held by a [`Board`](crate::board::Board).
pub const DEFAULT_NUM_QUADS: usize = 4;

/// Default move cap for random playouts.
pub const DEFAULT_MAX_MOVES: usize = 40;

// =============================================================================
// Marker Symbols
// =============================================================================

/// Player 1 piece.
pub const PLAYER1_MARK: char = 'b';

/// Player 2 piece.
pub const PLAYER2_MARK: char = 'w';

/// Empty cell.
pub const EMPTY_MARK: char = '~';
