//! Queen mobility
//!
//! Queens combine bishop and rook movement. The two ray families are
//! scanned independently and their counts summed: a piece on a diagonal has
//! no effect on the orthogonal rays and vice versa.

use super::bishop;
use super::rook;
use crate::board::BoardSize;
use crate::occupancy::OccupancyIndex;
use crate::types::{Mobility, Piece};

/// Count moves and captures for a queen
pub fn queen_mobility(piece: &Piece, occupancy: &OccupancyIndex, size: BoardSize) -> Mobility {
    bishop::bishop_mobility(piece, occupancy, size) + rook::rook_mobility(piece, occupancy, size)
}
