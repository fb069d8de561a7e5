//! Knight mobility
//!
//! Knights move in an L-shape: two squares along one axis, then one square
//! along the other. They jump over pieces, so only the landing square is
//! inspected.

use super::leaper;
use crate::board::BoardSize;
use crate::constants::KNIGHT_OFFSETS;
use crate::occupancy::OccupancyIndex;
use crate::types::{Mobility, Piece};

/// Count moves and captures for a knight
pub fn knight_mobility(piece: &Piece, occupancy: &OccupancyIndex, size: BoardSize) -> Mobility {
    leaper::leap_mobility(piece, occupancy, size, &KNIGHT_OFFSETS)
}
