//! Board query facade

use crate::board::BoardSize;
use crate::error::{MobilityError, MobilityResult};
use crate::occupancy::OccupancyIndex;
use crate::types::{Mobility, Piece, Position};

use super::query::query_piece;

/// One board snapshot: dimension plus occupied squares
///
/// Pieces are added first, then queried. Queries take `&self`, so a fully
/// populated `Board` can be shared across threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct Board {
    size: BoardSize,
    occupancy: OccupancyIndex,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        Board {
            size,
            occupancy: OccupancyIndex::new(),
        }
    }

    /// Build a board from a sequence of pieces
    ///
    /// # Errors
    ///
    /// See [`Board::add_piece`].
    pub fn from_pieces<I>(size: BoardSize, pieces: I) -> MobilityResult<Self>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Board::new(size);
        for piece in pieces {
            board.add_piece(piece)?;
        }
        Ok(board)
    }

    /// Place a piece on the board
    ///
    /// # Errors
    ///
    /// - [`MobilityError::OutOfBounds`] if the piece lies outside the board
    /// - [`MobilityError::SquareOccupied`] if its square is already taken
    pub fn add_piece(&mut self, piece: Piece) -> MobilityResult<()> {
        let position = piece.position;
        if !self.size.contains(position) {
            return Err(MobilityError::OutOfBounds {
                x: i64::from(position.x()),
                y: i64::from(position.y()),
                size: self.size.get(),
            });
        }
        self.occupancy.insert(piece)
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    #[inline]
    pub fn occupancy(&self) -> &OccupancyIndex {
        &self.occupancy
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.occupancy.occupant_at(position)
    }

    pub fn mobility(&self, piece: &Piece) -> Mobility {
        query_piece(piece, &self.occupancy, self.size)
    }

    /// Number of squares `piece` can move to, captures included
    pub fn moves_for(&self, piece: &Piece) -> u32 {
        self.mobility(piece).moves
    }

    /// Number of opposing pieces `piece` can capture
    pub fn captures_for(&self, piece: &Piece) -> u32 {
        self.mobility(piece).captures
    }
}
