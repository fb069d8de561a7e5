//! Result rendering for the output sink
//!
//! Plain output is one `moves captures` line per piece, in input order. JSON
//! output carries the same numbers alongside each piece's description.

use mobility_engine::{Mobility, Piece};
use serde::Serialize;

use crate::error::InputError;

/// Layout of the output file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `moves captures` per line
    #[default]
    Plain,
    /// JSON array of per-piece records
    Json,
}

/// One analyzed piece
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PieceReport {
    pub kind: &'static str,
    pub color: &'static str,
    pub x: u16,
    pub y: u16,
    pub moves: u32,
    pub captures: u32,
}

impl PieceReport {
    pub fn new(piece: &Piece, mobility: Mobility) -> Self {
        PieceReport {
            kind: piece.kind.name(),
            color: piece.color.name(),
            x: piece.position.x(),
            y: piece.position.y(),
            moves: mobility.moves,
            captures: mobility.captures,
        }
    }
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: &'a str,
}

/// Render per-piece results
pub fn render(format: OutputFormat, reports: &[PieceReport]) -> serde_json::Result<String> {
    match format {
        OutputFormat::Plain => Ok(reports
            .iter()
            .map(|report| format!("{} {}\n", report.moves, report.captures))
            .collect()),
        OutputFormat::Json => serde_json::to_string_pretty(reports),
    }
}

/// Render a rejected description
///
/// Plain output is the bare message without a trailing newline.
pub fn render_error(format: OutputFormat, err: InputError) -> serde_json::Result<String> {
    match format {
        OutputFormat::Plain => Ok(err.to_string()),
        OutputFormat::Json => serde_json::to_string(&ErrorReport {
            error: &err.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobility_engine::{Color, PieceKind, Position};

    fn sample() -> Vec<PieceReport> {
        vec![
            PieceReport::new(
                &Piece::new(PieceKind::Rook, Color::White, Position::new(4, 4)),
                Mobility::new(12, 1),
            ),
            PieceReport::new(
                &Piece::new(PieceKind::Pawn, Color::Black, Position::new(4, 6)),
                Mobility::new(1, 0),
            ),
        ]
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render(OutputFormat::Plain, &sample()).unwrap(), "12 1\n1 0\n");
    }

    #[test]
    fn test_render_json() {
        let json = render(OutputFormat::Json, &sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["kind"], "Rook");
        assert_eq!(value[0]["moves"], 12);
        assert_eq!(value[1]["color"], "Black");
        assert_eq!(value[1]["y"], 6);
    }

    #[test]
    fn test_render_error() {
        assert_eq!(
            render_error(OutputFormat::Plain, InputError::Kings).unwrap(),
            "Invalid given Kings"
        );
        assert_eq!(
            render_error(OutputFormat::Json, InputError::Malformed).unwrap(),
            r#"{"error":"Invalid input"}"#
        );
    }
}
