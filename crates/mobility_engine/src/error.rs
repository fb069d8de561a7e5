//! Error types for the mobility engine
//!
//! Board construction is the only fallible step. Once every piece has been
//! placed, move and capture queries are total functions and never return an
//! error.

use thiserror::Error;

/// Errors that can occur while building a board snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MobilityError {
    /// A second piece was placed on an occupied square
    #[error("Square ({x}, {y}) is already occupied")]
    SquareOccupied { x: u16, y: u16 },

    /// Board dimension outside the supported range
    #[error("Invalid board size: {size} (must be {min}-{max})")]
    InvalidBoardSize { size: i64, min: u16, max: u16 },

    /// Piece coordinates fall outside the board
    #[error("Square ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i64, y: i64, size: u16 },
}

/// Result type alias for mobility engine operations
pub type MobilityResult<T> = Result<T, MobilityError>;
