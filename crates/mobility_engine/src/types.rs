//! # Core Types
//!
//! ## Overview
//!
//! The engine works on a single board snapshot made of placed pieces. Each
//! piece is a `(kind, color, position)` triple and never moves: the engine
//! only counts where it *could* go.
//!
//! ## `Position` as Occupancy Key
//!
//! `Position` is a plain value type with structural equality and hashing, so
//! it serves directly as the key of the occupancy index. Coordinates are
//! 1-indexed and stored as `u16`, which covers every supported board size.
//!
//! ## `Mobility` Results
//!
//! Every engine returns a `Mobility` pair. Capture destinations are also legal
//! destinations, so `moves >= captures` always holds. Results from several
//! engines (the queen's two ray families) are combined with `+`.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::board::BoardSize;
use crate::constants::Offset;

/// A square on the board, 1-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    x: u16,
    y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Position { x, y }
    }

    #[inline]
    pub const fn x(self) -> u16 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u16 {
        self.y
    }

    /// Square reached by applying `offset`, or `None` if it leaves the board
    #[inline]
    pub fn offset(self, (dx, dy): Offset, size: BoardSize) -> Option<Position> {
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        if size.contains_coords(x, y) {
            Some(Position::new(x as u16, y as u16))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction of pawn advance along the y axis
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Piece {
            kind,
            color,
            position,
        }
    }

    /// True if `other` can be captured by this piece
    #[inline]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.color, self.kind, self.position)
    }
}

/// Destination and capture counts for one piece
///
/// `moves` includes capture destinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mobility {
    pub moves: u32,
    pub captures: u32,
}

impl Mobility {
    /// One move to an empty square
    pub const QUIET: Mobility = Mobility {
        moves: 1,
        captures: 0,
    };

    /// One move that takes an opposing piece
    pub const CAPTURE: Mobility = Mobility {
        moves: 1,
        captures: 1,
    };

    pub const fn new(moves: u32, captures: u32) -> Self {
        Mobility { moves, captures }
    }
}

impl Add for Mobility {
    type Output = Mobility;

    fn add(self, rhs: Mobility) -> Mobility {
        Mobility {
            moves: self.moves + rhs.moves,
            captures: self.captures + rhs.captures,
        }
    }
}

impl AddAssign for Mobility {
    fn add_assign(&mut self, rhs: Mobility) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Mobility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.moves, self.captures)
    }
}
