//! Tests for board description parsing and validation order

use super::*;
use mobility_engine::Position;

fn reject(text: &str) -> InputError {
    parse_board(text).unwrap_err()
}

// ============================================================================
// Accepted Descriptions
// ============================================================================

#[test]
fn test_parse_minimal_board() {
    let parsed = parse_board("3\n2\nKing White 1 1\nKing Black 3 3\n").unwrap();

    assert_eq!(parsed.board.size().get(), 3);
    assert_eq!(
        parsed.pieces,
        vec![
            Piece::new(PieceKind::King, Color::White, Position::new(1, 1)),
            Piece::new(PieceKind::King, Color::Black, Position::new(3, 3)),
        ]
    );
}

#[test]
fn test_parse_keeps_input_order() {
    let text = "8\n4\nRook White 4 4\nKing Black 8 8\nPawn Black 4 6\nKing White 1 1";
    let parsed = parse_board(text).unwrap();
    let kinds: Vec<PieceKind> = parsed.pieces.iter().map(|p| p.kind).collect();

    assert_eq!(
        kinds,
        vec![PieceKind::Rook, PieceKind::King, PieceKind::Pawn, PieceKind::King]
    );
    assert!(parsed.board.piece_at(Position::new(4, 6)).is_some());
}

#[test]
fn test_parse_tolerates_trailing_space_and_crlf() {
    let parsed = parse_board("3\r\n2\r\nKing White 1 1 \r\nKing Black 3 3\r\n").unwrap();
    assert_eq!(parsed.pieces.len(), 2);
}

#[test]
fn test_parse_all_piece_names() {
    for kind in PieceKind::ALL {
        assert_eq!(parse_kind(kind.name()), Ok(kind));
    }
    assert_eq!(parse_kind("knight"), Err(InputError::PieceName));
    assert_eq!(parse_color("White"), Ok(Color::White));
    assert_eq!(parse_color("black"), Err(InputError::PieceColor));
}

// ============================================================================
// Board Size & Piece Count
// ============================================================================

#[test]
fn test_reject_board_size() {
    assert_eq!(reject(""), InputError::BoardSize);
    assert_eq!(reject("two\n2\n"), InputError::BoardSize);
    assert_eq!(reject("2\n2\nKing White 1 1\nKing Black 2 2"), InputError::BoardSize);
    assert_eq!(reject("1001\n2\n"), InputError::BoardSize);
}

#[test]
fn test_reject_piece_count_range() {
    assert_eq!(reject("3"), InputError::PieceCount);
    assert_eq!(reject("3\nx\n"), InputError::PieceCount);
    assert_eq!(reject("3\n1\nKing White 1 1"), InputError::PieceCount);
    assert_eq!(reject("3\n10\n"), InputError::PieceCount);
}

#[test]
fn test_reject_piece_count_mismatch() {
    assert_eq!(
        reject("3\n3\nKing White 1 1\nKing Black 3 3\n"),
        InputError::PieceCount
    );
    assert_eq!(
        reject("3\n2\nKing White 1 1\nKing Black 3 3\nPawn White 2 2\n"),
        InputError::PieceCount
    );
}

// ============================================================================
// Piece Lines
// ============================================================================

#[test]
fn test_reject_wrong_field_count() {
    assert_eq!(
        reject("3\n2\nKing White 1\nKing Black 3 3"),
        InputError::Malformed
    );
    assert_eq!(
        reject("3\n2\nKing  White 1 1\nKing Black 3 3"),
        InputError::Malformed
    );
}

#[test]
fn test_reject_name_before_color() {
    //! An unknown name is reported even when the color is also wrong
    assert_eq!(
        reject("3\n2\nWizard Green 1 1\nKing Black 3 3"),
        InputError::PieceName
    );
    assert_eq!(
        reject("3\n2\nKing Green 1 1\nKing Black 3 3"),
        InputError::PieceColor
    );
}

#[test]
fn test_reject_position() {
    assert_eq!(
        reject("3\n2\nKing White 0 1\nKing Black 3 3"),
        InputError::PiecePosition
    );
    assert_eq!(
        reject("3\n2\nKing White 1 4\nKing Black 3 3"),
        InputError::PiecePosition
    );
    assert_eq!(
        reject("3\n2\nKing White a 1\nKing Black 3 3"),
        InputError::PiecePosition
    );
}

#[test]
fn test_reject_shared_square() {
    assert_eq!(
        reject("3\n3\nKing White 1 1\nPawn Black 1 1\nKing Black 3 3"),
        InputError::PiecePosition
    );
}

#[test]
fn test_reject_kings() {
    assert_eq!(
        reject("3\n2\nKing White 1 1\nPawn Black 3 3"),
        InputError::Kings
    );
    assert_eq!(
        reject("4\n3\nKing White 1 1\nKing White 4 4\nKing Black 2 4"),
        InputError::Kings
    );
}

#[test]
fn test_duplicate_king_reported_before_bad_position() {
    //! King counting happens before coordinates are read
    assert_eq!(
        reject("4\n3\nKing White 1 1\nKing White 9 9\nKing Black 2 4"),
        InputError::Kings
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(InputError::BoardSize.to_string(), "Invalid board size");
    assert_eq!(InputError::PieceCount.to_string(), "Invalid number of pieces");
    assert_eq!(InputError::PieceName.to_string(), "Invalid piece name");
    assert_eq!(InputError::PieceColor.to_string(), "Invalid piece color");
    assert_eq!(InputError::PiecePosition.to_string(), "Invalid piece position");
    assert_eq!(InputError::Kings.to_string(), "Invalid given Kings");
    assert_eq!(InputError::Malformed.to_string(), "Invalid input");
}
