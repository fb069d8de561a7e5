//! Leaper mobility
//!
//! Shared logic for pieces that reach a fixed set of squares (knights, kings).
//! Each target square is looked up directly; nothing in between matters.

use crate::board::BoardSize;
use crate::constants::Offset;
use crate::occupancy::OccupancyIndex;
use crate::types::{Mobility, Piece};

/// Count moves and captures over a fixed offset set
///
/// For every offset the target square is classified as:
/// - Off the board: ignored
/// - Empty: one quiet move
/// - Opposing piece: one capture (also counted as a move)
/// - Own piece: unreachable
pub fn leap_mobility(
    piece: &Piece,
    occupancy: &OccupancyIndex,
    size: BoardSize,
    offsets: &[Offset],
) -> Mobility {
    offsets
        .iter()
        .filter_map(|&offset| piece.position.offset(offset, size))
        .fold(Mobility::default(), |total, target| {
            match occupancy.occupant_at(target) {
                None => total + Mobility::QUIET,
                Some(occupant) if piece.is_enemy_of(occupant) => total + Mobility::CAPTURE,
                Some(_) => total,
            }
        })
}
