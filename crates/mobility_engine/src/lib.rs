//! # Mobility Engine
//!
//! Static analysis of a single chess position on an `N x N` board: for every
//! placed piece, count the squares it could move to and the opposing pieces
//! it could capture under pseudo-legal single-ply movement.
//!
//! There is no turn order, no check or pin detection, and no rule that needs
//! move history (castling, en passant, double step, promotion).
//!
//! ```rust,ignore
//! use mobility_engine::{Board, BoardSize, Color, Piece, PieceKind, Position};
//!
//! let size = BoardSize::new(8)?;
//! let rook = Piece::new(PieceKind::Rook, Color::White, Position::new(4, 4));
//! let pawn = Piece::new(PieceKind::Pawn, Color::Black, Position::new(4, 6));
//! let board = Board::from_pieces(size, [rook, pawn])?;
//!
//! assert_eq!(board.moves_for(&rook), 12);
//! assert_eq!(board.captures_for(&rook), 1);
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod occupancy;
pub mod types;

pub use api::{analyze, build_occupancy, query_piece, Board};
pub use board::BoardSize;
pub use error::{MobilityError, MobilityResult};
pub use occupancy::OccupancyIndex;
pub use types::{Color, Mobility, Piece, PieceKind, Position};
