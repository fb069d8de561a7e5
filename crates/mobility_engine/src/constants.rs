//! # Mobility Engine Constants
//!
//! Board dimension limits and the fixed offset tables used by the leaper and
//! pawn engines.
//!
//! ## Coordinate System
//!
//! Squares are addressed by 1-indexed `(x, y)` pairs. `x` grows to the right,
//! `y` grows upward, so White pawns advance toward larger `y` and Black pawns
//! toward smaller `y`. Offsets below are `(dx, dy)` deltas in that system.
//!
//! ## Knight Moves: The "L-Shape" Pattern
//!
//! A knight jumps two squares along one axis and one square along the other.
//! All eight combinations are listed explicitly; the leaper engine discards
//! the ones that leave the board.

/// Smallest supported board dimension
pub const MIN_BOARD_SIZE: u16 = 3;

/// Largest supported board dimension
pub const MAX_BOARD_SIZE: u16 = 1000;

/// A `(dx, dy)` displacement relative to a piece's square
pub type Offset = (i32, i32);

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [Offset; 8] = [
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// File deltas of the two forward-diagonal squares a pawn attacks
pub const PAWN_CAPTURE_FILES: [i32; 2] = [-1, 1];
