//! Rook mobility
//!
//! Rooks slide horizontally and vertically until the edge or the first
//! occupied square.

use super::sliding::{self, RayFamily};
use crate::board::BoardSize;
use crate::occupancy::OccupancyIndex;
use crate::types::{Mobility, Piece};

/// Count moves and captures for a rook
pub fn rook_mobility(piece: &Piece, occupancy: &OccupancyIndex, size: BoardSize) -> Mobility {
    sliding::slide_mobility(piece, occupancy, size, RayFamily::Orthogonal)
}
