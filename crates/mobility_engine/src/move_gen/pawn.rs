//! Pawn mobility
//!
//! Handles pawn-specific counting:
//! - Single forward step onto an empty square
//! - Diagonal captures on the two forward-diagonal squares
//!
//! ## Pawn Movement Rules
//!
//! - **Forward step**: White pawns move toward larger `y`, Black pawns toward
//!   smaller `y`, one square at a time
//! - **Captures**: Pawns capture one square diagonally forward
//! - Every pawn is treated alike regardless of its rank; there is no double
//!   step, en passant or promotion, and pawns never capture backward

use crate::board::BoardSize;
use crate::constants::PAWN_CAPTURE_FILES;
use crate::occupancy::OccupancyIndex;
use crate::types::{Mobility, Piece};

/// Count moves and captures for a pawn
///
/// # Arguments
///
/// * `piece` - The pawn
/// * `occupancy` - Occupied squares of the snapshot
/// * `size` - Board dimension
///
/// # Examples
///
/// ```rust,ignore
/// // White pawn on (2, 2) with a black knight on (3, 3)
/// let m = pawn_mobility(&pawn, &occupancy, size);
/// assert_eq!(m, Mobility::new(2, 1));
/// ```
pub fn pawn_mobility(piece: &Piece, occupancy: &OccupancyIndex, size: BoardSize) -> Mobility {
    let forward = piece.color.forward();
    let mut mobility = Mobility::default();

    if let Some(ahead) = piece.position.offset((0, forward), size) {
        if occupancy.is_empty_at(ahead) {
            mobility += Mobility::QUIET;
        }
    }

    for file in PAWN_CAPTURE_FILES {
        let target = piece.position.offset((file, forward), size);
        let occupant = target.and_then(|square| occupancy.occupant_at(square));
        if occupant.is_some_and(|other| piece.is_enemy_of(other)) {
            mobility += Mobility::CAPTURE;
        }
    }

    mobility
}
