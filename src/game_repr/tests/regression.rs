// Regression tests for king-safety filtering
//
// Cases where a move looks fine geometrically but exposes the mover's own
// king, plus board-edge wrapping bugs.

use super::*;

#[test]
fn test_pawn_edge_square_capture_bug() {
    // A pawn on the a-file must never "capture" on the h-file
    let mut pos = empty_board();
    pos.set_side_to_move(Color::Black);
    place_kings(&mut pos, "e1", "e8");
    place_piece(&mut pos, "a3", Color::Black, Type::Pawn);
    place_piece(&mut pos, "h1", Color::White, Type::Rook);
    place_piece(&mut pos, "h3", Color::White, Type::Rook);

    let moves = pos.legal_moves_from(sq("a3")).unwrap();

    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "a3", "a2"));
}

#[test]
fn test_pinned_piece_cannot_leave_the_line() {
    let mut pos = empty_board();
    place_kings(&mut pos, "e1", "a8");
    place_piece(&mut pos, "e2", Color::White, Type::Knight);
    place_piece(&mut pos, "e8", Color::Black, Type::Rook);

    let moves = pos.legal_moves_from(sq("e2")).unwrap();
    assert!(moves.is_empty(), "a pinned knight has no legal moves");
}

#[test]
fn test_pinned_slider_moves_along_the_pin() {
    let mut pos = empty_board();
    place_kings(&mut pos, "e1", "a8");
    place_piece(&mut pos, "e3", Color::White, Type::Rook);
    place_piece(&mut pos, "e8", Color::Black, Type::Queen);

    let moves = pos.legal_moves_from(sq("e3")).unwrap();

    // e2 e4 e5 e6 e7 e8
    assert_eq!(moves.len(), 6);
    assert!(moves.iter().all(|m| m.to.file() == 4));
}

#[test]
fn test_king_cannot_retreat_along_checking_ray() {
    let mut pos = empty_board();
    place_kings(&mut pos, "e4", "a8");
    place_piece(&mut pos, "e8", Color::Black, Type::Rook);

    let moves = pos.legal_moves_from(sq("e4")).unwrap();

    assert!(!has_move(&moves, "e4", "e3"), "e3 is still on the rook's file once the king leaves e4");
    assert!(!has_move(&moves, "e4", "e5"));
    assert!(has_move(&moves, "e4", "d4"));
}

#[test]
fn test_king_may_not_step_next_to_pawn_diagonal() {
    let mut pos = empty_board();
    place_kings(&mut pos, "e3", "a8");
    place_piece(&mut pos, "e5", Color::Black, Type::Pawn);

    let moves = pos.legal_moves_from(sq("e3")).unwrap();

    // The pawn on e5 covers d4 and f4 even though both are empty now
    assert!(!has_move(&moves, "e3", "d4"));
    assert!(!has_move(&moves, "e3", "f4"));
    assert!(has_move(&moves, "e3", "e4"), "a pawn never captures straight ahead");
}

#[test]
fn test_no_legal_move_leaves_king_in_check() {
    let line = [
        "e2e4", "d7d5", "e4d5", "d8d5", "b1c3", "d5a5", "d2d4", "c7c6", "g1f3", "c8g4",
        "f1e2", "e7e6", "c1d2", "f8b4",
    ];
    let mut pos = Position::default();
    for text in line {
        let mover = pos.side_to_move();
        for mv in pos.legal_moves(mover).unwrap() {
            let after = pos.apply_move(mv).unwrap();
            assert!(!after.is_in_check(mover).unwrap(), "{mv} leaves the king in check");
        }
        pos = pos.apply_move(pos.parse_uci(text).unwrap()).unwrap();
    }
}
