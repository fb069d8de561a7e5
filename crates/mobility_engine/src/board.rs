//! Board dimension and boundary helpers
//!
//! Provides the board-level operations shared by every engine:
//! - Board size validation
//! - Square bounds checking
//! - Distance from a square to the board edge

use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{MobilityError, MobilityResult};
use crate::types::Position;

/// Dimension `N` of an `N x N` board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize(u16);

impl BoardSize {
    /// Validate a board dimension
    ///
    /// # Errors
    ///
    /// Returns [`MobilityError::InvalidBoardSize`] when `size` lies outside
    /// `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    pub fn new(size: i64) -> MobilityResult<Self> {
        if (i64::from(MIN_BOARD_SIZE)..=i64::from(MAX_BOARD_SIZE)).contains(&size) {
            Ok(BoardSize(size as u16))
        } else {
            Err(MobilityError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            })
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Total number of squares on the board
    #[inline]
    pub const fn square_count(self) -> u32 {
        self.0 as u32 * self.0 as u32
    }

    /// Check if square coordinates are on the board
    #[inline]
    pub fn contains_coords(self, x: i32, y: i32) -> bool {
        let n = i32::from(self.0);
        (1..=n).contains(&x) && (1..=n).contains(&y)
    }

    #[inline]
    pub fn contains(self, position: Position) -> bool {
        self.contains_coords(i32::from(position.x()), i32::from(position.y()))
    }

    /// Build a position, rejecting coordinates that fall off the board
    pub fn position(self, x: i64, y: i64) -> MobilityResult<Position> {
        let n = i64::from(self.0);
        if (1..=n).contains(&x) && (1..=n).contains(&y) {
            Ok(Position::new(x as u16, y as u16))
        } else {
            Err(MobilityError::OutOfBounds {
                x,
                y,
                size: self.0,
            })
        }
    }

    /// Number of squares between `coord` and the edge when stepping by `step`
    ///
    /// `step` is -1, 0 or 1; a zero step never reaches an edge and yields `None`.
    #[inline]
    pub(crate) fn room(self, coord: u16, step: i32) -> Option<u32> {
        match step {
            -1 => Some(u32::from(coord) - 1),
            1 => Some(u32::from(self.0 - coord)),
            _ => None,
        }
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_bounds() {
        assert!(BoardSize::new(3).is_ok());
        assert!(BoardSize::new(1000).is_ok());
        assert_eq!(
            BoardSize::new(2),
            Err(MobilityError::InvalidBoardSize {
                size: 2,
                min: 3,
                max: 1000
            })
        );
        assert!(BoardSize::new(1001).is_err());
        assert!(BoardSize::new(-8).is_err());
    }

    #[test]
    fn test_contains_edges() {
        let size = BoardSize::new(8).unwrap();
        assert!(size.contains(Position::new(1, 1)));
        assert!(size.contains(Position::new(8, 8)));
        assert!(!size.contains_coords(0, 4));
        assert!(!size.contains_coords(4, 9));
    }

    #[test]
    fn test_position_rejects_off_board() {
        let size = BoardSize::new(5).unwrap();
        assert_eq!(size.position(5, 1), Ok(Position::new(5, 1)));
        assert_eq!(
            size.position(6, 1),
            Err(MobilityError::OutOfBounds { x: 6, y: 1, size: 5 })
        );
    }

    #[test]
    fn test_room_to_edge() {
        let size = BoardSize::new(8).unwrap();
        assert_eq!(size.room(3, -1), Some(2));
        assert_eq!(size.room(3, 1), Some(5));
        assert_eq!(size.room(3, 0), None);
    }
}
