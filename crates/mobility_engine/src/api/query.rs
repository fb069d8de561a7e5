//! Snapshot construction and per-piece queries

use tracing::debug;

use crate::board::BoardSize;
use crate::error::MobilityResult;
use crate::move_gen::mobility_of;
use crate::occupancy::OccupancyIndex;
use crate::types::{Mobility, Piece};

/// Build an occupancy index from validated pieces
///
/// # Errors
///
/// Fails with [`crate::MobilityError::SquareOccupied`] on the first piece
/// whose square is already taken. Construction stops there.
pub fn build_occupancy<I>(pieces: I) -> MobilityResult<OccupancyIndex>
where
    I: IntoIterator<Item = Piece>,
{
    let pieces = pieces.into_iter();
    let mut index = OccupancyIndex::with_capacity(pieces.size_hint().0);
    for piece in pieces {
        if let Err(err) = index.insert(piece) {
            debug!(%piece, %err, "occupancy construction aborted");
            return Err(err);
        }
    }
    Ok(index)
}

/// Move and capture counts for one piece against a snapshot
///
/// Pure and idempotent: the same inputs always give the same result.
#[inline]
pub fn query_piece(piece: &Piece, occupancy: &OccupancyIndex, size: BoardSize) -> Mobility {
    mobility_of(piece, occupancy, size)
}

/// Query every piece, keeping the order of `pieces`
pub fn analyze(pieces: &[Piece], occupancy: &OccupancyIndex, size: BoardSize) -> Vec<Mobility> {
    pieces
        .iter()
        .map(|piece| query_piece(piece, occupancy, size))
        .collect()
}
