//! Occupancy index: the authoritative square → piece mapping for one snapshot
//!
//! Engines read the index in two ways. The leaper and pawn engines probe
//! single squares with [`OccupancyIndex::occupant_at`]; the sliding engine
//! scans every occupant with [`OccupancyIndex::occupants`] and keeps the
//! nearest one per ray.

use std::collections::HashMap;

use tracing::trace;

use crate::error::{MobilityError, MobilityResult};
use crate::types::{Piece, Position};

/// At most one piece per square
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    squares: HashMap<Position, Piece>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OccupancyIndex {
            squares: HashMap::with_capacity(capacity),
        }
    }

    /// Place a piece on its square
    ///
    /// # Errors
    ///
    /// Returns [`MobilityError::SquareOccupied`] if another piece already
    /// stands on `piece.position`. The index is left unchanged.
    pub fn insert(&mut self, piece: Piece) -> MobilityResult<()> {
        let position = piece.position;
        if self.squares.contains_key(&position) {
            return Err(MobilityError::SquareOccupied {
                x: position.x(),
                y: position.y(),
            });
        }
        trace!(%piece, "placed piece");
        self.squares.insert(position, piece);
        Ok(())
    }

    #[inline]
    pub fn occupant_at(&self, position: Position) -> Option<&Piece> {
        self.squares.get(&position)
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        !self.squares.contains_key(&position)
    }

    /// All occupied squares, in no particular order
    pub fn occupants(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.squares.iter().map(|(&position, piece)| (position, piece))
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}
