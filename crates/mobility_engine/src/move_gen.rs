//! Piece dispatch
//!
//! Binds each piece kind to the engine that counts its moves and captures:
//!
//! | Kind   | Engine                                  |
//! |--------|-----------------------------------------|
//! | Pawn   | `pawn` (forward step + diagonal capture) |
//! | Knight | `leaper` with knight offsets            |
//! | King   | `leaper` with king offsets              |
//! | Bishop | `sliding`, diagonal rays                |
//! | Rook   | `sliding`, orthogonal rays              |
//! | Queen  | `sliding`, both families summed         |
//!
//! Every engine is a pure function of the piece, the occupancy snapshot and
//! the board size.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod leaper;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;


use crate::board::BoardSize;
use crate::occupancy::OccupancyIndex;
use crate::types::{Mobility, Piece, PieceKind};

pub use sliding::{Direction, RayFamily};

/// Count moves and captures for any piece
pub fn mobility_of(piece: &Piece, occupancy: &OccupancyIndex, size: BoardSize) -> Mobility {
    match piece.kind {
        PieceKind::Pawn => pawn::pawn_mobility(piece, occupancy, size),
        PieceKind::Knight => knight::knight_mobility(piece, occupancy, size),
        PieceKind::Bishop => bishop::bishop_mobility(piece, occupancy, size),
        PieceKind::Rook => rook::rook_mobility(piece, occupancy, size),
        PieceKind::Queen => queen::queen_mobility(piece, occupancy, size),
        PieceKind::King => king::king_mobility(piece, occupancy, size),
    }
}
