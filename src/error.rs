//! Error types for the input layer
//!
//! The `Display` text of every variant is exactly what gets written to the
//! output sink when a board description is rejected.

use mobility_engine::MobilityError;

/// Reasons a board description is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid board size")]
    BoardSize,

    #[error("Invalid number of pieces")]
    PieceCount,

    #[error("Invalid piece name")]
    PieceName,

    #[error("Invalid piece color")]
    PieceColor,

    #[error("Invalid piece position")]
    PiecePosition,

    /// Missing king, or more than one king of a color
    #[error("Invalid given Kings")]
    Kings,

    /// Unreadable file or a piece line with the wrong number of fields
    #[error("Invalid input")]
    Malformed,
}

impl From<MobilityError> for InputError {
    fn from(err: MobilityError) -> Self {
        match err {
            MobilityError::InvalidBoardSize { .. } => InputError::BoardSize,
            MobilityError::SquareOccupied { .. } | MobilityError::OutOfBounds { .. } => {
                InputError::PiecePosition
            }
        }
    }
}

/// Result type alias for input parsing
pub type InputResult<T> = Result<T, InputError>;
