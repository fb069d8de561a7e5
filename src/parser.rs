//! Board description parser
//!
//! Reads the textual description and hands the engine validated pieces.
//!
//! # Format
//!
//! ```text
//! N                      board dimension, 3..=1000
//! M                      piece count, 2..=N*N
//! Kind Color x y         M lines, e.g. "Rook White 4 4"
//! ```
//!
//! Checks run in a fixed order and the first failure wins, so a file with
//! several problems always reports the same one.

use mobility_engine::{Board, BoardSize, Color, Piece, PieceKind};
use tracing::{debug, warn};

use crate::error::{InputError, InputResult};

/// Number of whitespace-separated fields on a piece line
const PIECE_FIELDS: usize = 4;

/// Fewest pieces a description may declare (the two kings)
const MIN_PIECES: i64 = 2;

/// A validated board: the snapshot plus the pieces in input order
#[derive(Debug, Clone)]
pub struct ParsedBoard {
    pub board: Board,
    pub pieces: Vec<Piece>,
}

/// Parse and validate a full board description
///
/// # Errors
///
/// Returns the first [`InputError`] encountered; see the module docs for the
/// order in which checks run.
pub fn parse_board(text: &str) -> InputResult<ParsedBoard> {
    let lines: Vec<&str> = text.lines().collect();

    let size = parse_board_size(lines.first().copied())?;
    let declared = parse_piece_count(lines.get(1).copied(), size)?;
    if declared != lines.len().saturating_sub(2) {
        warn!(
            declared,
            found = lines.len().saturating_sub(2),
            "piece count does not match piece lines"
        );
        return Err(InputError::PieceCount);
    }

    let mut board = Board::new(size);
    let mut pieces = Vec::with_capacity(declared);
    let mut kings = KingTally::default();

    for (index, line) in lines[2..].iter().enumerate() {
        let piece = parse_piece_line(line, size, &mut kings).inspect_err(|err| {
            warn!(line = index + 3, %err, "rejected piece line");
        })?;
        board.add_piece(piece).map_err(|err| {
            warn!(line = index + 3, %err, "rejected piece placement");
            InputError::from(err)
        })?;
        pieces.push(piece);
    }

    if !kings.complete() {
        warn!(white = kings.white, black = kings.black, "missing king");
        return Err(InputError::Kings);
    }

    debug!(size = %size, pieces = pieces.len(), "parsed board description");
    Ok(ParsedBoard { board, pieces })
}

/// Kings seen so far, per color
#[derive(Debug, Default)]
struct KingTally {
    white: u32,
    black: u32,
}

impl KingTally {
    /// Record a king, rejecting a second one of the same color
    fn record(&mut self, color: Color) -> InputResult<()> {
        let count = match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };
        if *count >= 1 {
            return Err(InputError::Kings);
        }
        *count += 1;
        Ok(())
    }

    fn complete(&self) -> bool {
        self.white == 1 && self.black == 1
    }
}

fn parse_board_size(line: Option<&str>) -> InputResult<BoardSize> {
    let size = line.and_then(parse_int).ok_or(InputError::BoardSize)?;
    Ok(BoardSize::new(size)?)
}

fn parse_piece_count(line: Option<&str>, size: BoardSize) -> InputResult<usize> {
    let count = line.and_then(parse_int).ok_or(InputError::PieceCount)?;
    if count < MIN_PIECES || count > i64::from(size.square_count()) {
        return Err(InputError::PieceCount);
    }
    Ok(count as usize)
}

fn parse_piece_line(line: &str, size: BoardSize, kings: &mut KingTally) -> InputResult<Piece> {
    let fields = split_fields(line);
    if fields.len() != PIECE_FIELDS {
        return Err(InputError::Malformed);
    }

    let kind = parse_kind(fields[0])?;
    let color = parse_color(fields[1])?;
    if kind == PieceKind::King {
        kings.record(color)?;
    }

    let x = parse_coordinate(fields[2], size)?;
    let y = parse_coordinate(fields[3], size)?;
    let position = size.position(x, y)?;

    Ok(Piece::new(kind, color, position))
}

/// Split on single spaces, dropping trailing empty fields
///
/// Runs of spaces inside the line produce empty fields, which then fail the
/// field-count check.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(' ').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Map a piece name token to its kind (case-sensitive)
pub fn parse_kind(token: &str) -> InputResult<PieceKind> {
    PieceKind::ALL
        .into_iter()
        .find(|kind| kind.name() == token)
        .ok_or(InputError::PieceName)
}

/// Map a color token to its color (case-sensitive)
pub fn parse_color(token: &str) -> InputResult<Color> {
    match token {
        "White" => Ok(Color::White),
        "Black" => Ok(Color::Black),
        _ => Err(InputError::PieceColor),
    }
}

fn parse_coordinate(token: &str, size: BoardSize) -> InputResult<i64> {
    let value = parse_int(token).ok_or(InputError::PiecePosition)?;
    if value < 1 || value > i64::from(size.get()) {
        return Err(InputError::PiecePosition);
    }
    Ok(value)
}

/// Signed 32-bit decimal integer, optional leading sign, no surrounding spaces
fn parse_int(token: &str) -> Option<i64> {
    token.parse::<i32>().ok().map(i64::from)
}

#[cfg(test)]
mod tests;
