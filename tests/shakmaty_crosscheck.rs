//! Cross-checks against shakmaty
//!
//! Random boards are generated with `rand` and every piece's destinations are
//! compared with shakmaty's attack tables.

use duck_moves::chess_piece::{Piece, PieceType, TeamColor};
use duck_moves::core::board::Board;
use duck_moves::core::moves::Move;
use duck_moves::core::position::Position;
use duck_moves::engine::movegen::MoveGen;
use pretty_assertions::assert_eq;
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{attacks, Bitboard, CastlingMode, Chess, Square};
use std::collections::BTreeSet;

const RANDOM_BOARDS: usize = 200;

fn random_board() -> Board {
    let mut board = Board::new();
    for position in Position::all() {
        if rand::random::<u32>() % 3 == 0 {
            let color = if rand::random::<bool>() {
                TeamColor::White
            } else {
                TeamColor::Black
            };
            let piece_type = PieceType::ALL[rand::random::<u32>() as usize % PieceType::ALL.len()];
            board.place(position, Piece::new(color, piece_type));
        }
    }
    board
}

fn square(position: Position) -> Square {
    Square::try_from(position).unwrap()
}

fn to_positions(bitboard: Bitboard) -> BTreeSet<Position> {
    bitboard.into_iter().map(Position::from).collect()
}

/// Destinations shakmaty's attack tables allow for a non-pawn piece
fn expected_destinations(board: &shakmaty::Board, sq: Square, piece: shakmaty::Piece) -> Bitboard {
    let occupied = board.occupied();
    let reach = match piece.role {
        shakmaty::Role::King => attacks::king_attacks(sq),
        shakmaty::Role::Knight => attacks::knight_attacks(sq),
        shakmaty::Role::Rook => attacks::rook_attacks(sq, occupied),
        shakmaty::Role::Bishop => attacks::bishop_attacks(sq, occupied),
        shakmaty::Role::Queen => attacks::queen_attacks(sq, occupied),
        shakmaty::Role::Pawn => unreachable!("pawns are checked separately"),
    };
    reach & !board.by_color(piece.color)
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn test_square_mapping() {
    assert_eq!(square(Position::new(1, 1)), Square::A1);
    assert_eq!(square(Position::new(4, 5)), Square::E4);
    assert_eq!(square(Position::new(8, 8)), Square::H8);
    assert!(Square::try_from(Position::new(0, 1)).is_err());
    for position in Position::all() {
        assert_eq!(Position::from(square(position)), position);
    }
}

#[test]
fn test_standard_board_matches_shakmaty() {
    let chess = Chess::default();
    let theirs = shakmaty::Position::board(&chess);
    assert_eq!(Board::from(theirs), Board::standard());
    assert_eq!(&shakmaty::Board::from(&Board::standard()), theirs);
}

#[test]
fn test_random_board_roundtrip() {
    for _ in 0..RANDOM_BOARDS {
        let board = random_board();
        let theirs = shakmaty::Board::from(&board);
        assert_eq!(Board::from(&theirs), board);
    }
}

#[test]
fn test_move_to_uci() {
    let mv = Move::with_promotion(Position::new(7, 2), Position::new(8, 1), PieceType::Knight);
    let uci = UciMove::try_from(mv).unwrap();
    assert_eq!(uci.to_string(), "b7a8n");
    assert_eq!(uci.to_string(), mv.to_uci());

    let off = Move::new(Position::new(1, 1), Position::new(0, 1));
    assert!(UciMove::try_from(off).is_err());
}

// ============================================================================
// Move Generation
// ============================================================================

#[test]
fn test_pieces_match_attack_tables() {
    for _ in 0..RANDOM_BOARDS {
        let board = random_board();
        let theirs = shakmaty::Board::from(&board);

        for (position, piece) in board.pieces() {
            if piece.piece_type == PieceType::Pawn {
                continue;
            }
            let ours = MoveGen::destinations(&board, position).unwrap();
            let expected = expected_destinations(&theirs, square(position), piece.into());
            assert_eq!(ours, to_positions(expected), "{:?} on {}\n{}", piece, position, board);
        }
    }
}

#[test]
fn test_pawn_captures_match_attack_tables() {
    for _ in 0..RANDOM_BOARDS {
        let board = random_board();
        let theirs = shakmaty::Board::from(&board);

        for (position, piece) in board.pieces() {
            if piece.piece_type != PieceType::Pawn {
                continue;
            }
            let captures: BTreeSet<Position> = MoveGen::destinations(&board, position)
                .unwrap()
                .into_iter()
                .filter(|to| to.column() != position.column())
                .collect();
            let color = shakmaty::Color::from(piece.color);
            let expected = attacks::pawn_attacks(color, square(position)) & theirs.by_color(!color);
            assert_eq!(captures, to_positions(expected), "{:?} on {}\n{}", piece, position, board);
        }
    }
}

#[test]
fn test_random_boards_are_sound() {
    for _ in 0..RANDOM_BOARDS {
        let board = random_board();
        for (position, piece) in board.pieces() {
            for mv in MoveGen::moves_from(&board, position).unwrap() {
                assert!(mv.to().is_on_board());
                assert_ne!(board.piece_at(mv.to()).map(|p| p.color), Some(piece.color));
                if mv.is_promotion() {
                    assert_eq!(piece.piece_type, PieceType::Pawn);
                    assert_eq!(mv.to().row(), piece.color.promotion_row());
                } else if piece.piece_type == PieceType::Pawn {
                    assert_ne!(mv.to().row(), piece.color.promotion_row());
                }
            }
        }
    }
}

#[test]
fn test_start_position_agrees_with_legal_moves() {
    // Nothing is pinned or in check at the start, so pseudo-legal equals legal.
    let fens = [
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", TeamColor::White),
        ("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1", TeamColor::Black),
    ];
    for (fen, color) in fens {
        let f: Fen = fen.parse().unwrap();
        let pos: Chess = f.into_position(CastlingMode::Standard).unwrap();
        let theirs: BTreeSet<String> = shakmaty::Position::legal_moves(&pos)
            .iter()
            .map(|m| m.to_uci(CastlingMode::Standard).to_string())
            .collect();

        let board = Board::from(shakmaty::Position::board(&pos));
        let ours: BTreeSet<String> = MoveGen::all_moves(&board, color)
            .unwrap()
            .into_iter()
            .map(|m| m.to_uci())
            .collect();
        assert_eq!(ours, theirs);
    }
}
