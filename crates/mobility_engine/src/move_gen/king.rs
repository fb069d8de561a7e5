//! King mobility
//!
//! Kings move one square in any direction. Whether the destination is
//! attacked is not considered, and castling does not exist here.

use super::leaper;
use crate::board::BoardSize;
use crate::constants::KING_OFFSETS;
use crate::occupancy::OccupancyIndex;
use crate::types::{Mobility, Piece};

/// Count moves and captures for a king
pub fn king_mobility(piece: &Piece, occupancy: &OccupancyIndex, size: BoardSize) -> Mobility {
    leaper::leap_mobility(piece, occupancy, size, &KING_OFFSETS)
}
