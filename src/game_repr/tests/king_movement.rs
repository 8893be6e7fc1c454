use super::*;

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_moves_all_directions() {
    let mut pos = empty_board();
    place_kings(&mut pos, "d4", "h8");

    let moves = pos.legal_moves_from(sq("d4")).unwrap();

    assert_eq!(moves.len(), 8, "King should have 8 moves from center");
    for to in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
        assert!(has_move(&moves, "d4", to), "missing Kd4-{to}");
    }
}

#[test]
fn test_king_cannot_capture_own_pieces() {
    let mut pos = empty_board();
    place_kings(&mut pos, "d4", "h8");
    for s in ["d5", "d3", "c4", "e4"] {
        place_piece(&mut pos, s, Color::White, Type::Knight);
    }

    let moves = pos.legal_moves_from(sq("d4")).unwrap();

    assert_eq!(moves.len(), 4, "King should not capture own pieces");
    assert!(!has_move(&moves, "d4", "d5"));
}

#[test]
fn test_king_in_corner() {
    let mut pos = empty_board();
    place_kings(&mut pos, "a1", "h8");

    let moves = pos.legal_moves_from(sq("a1")).unwrap();
    assert_eq!(moves.len(), 3);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut pos = empty_board();
    place_kings(&mut pos, "e1", "h8");
    // Rook covers the whole d-file
    place_piece(&mut pos, "d8", Color::Black, Type::Rook);

    let moves = pos.legal_moves_from(sq("e1")).unwrap();

    assert!(!has_move(&moves, "e1", "d1"));
    assert!(!has_move(&moves, "e1", "d2"));
    assert!(has_move(&moves, "e1", "f1"));
    assert!(has_move(&moves, "e1", "e2"));
}

#[test]
fn test_king_cannot_capture_protected_piece() {
    let mut pos = empty_board();
    place_kings(&mut pos, "e1", "h8");
    place_piece(&mut pos, "e2", Color::Black, Type::Queen);
    place_piece(&mut pos, "e5", Color::Black, Type::Rook);

    let moves = pos.legal_moves_from(sq("e1")).unwrap();
    assert!(moves.is_empty(), "every king move is covered: {moves:?}");
}

#[test]
fn test_king_can_capture_unprotected_piece() {
    let mut pos = empty_board();
    place_kings(&mut pos, "e1", "h8");
    place_piece(&mut pos, "e2", Color::Black, Type::Queen);

    let moves = pos.legal_moves_from(sq("e1")).unwrap();
    assert_eq!(moves, vec![Move::new(sq("e1"), sq("e2"), Piece::new(Color::White, Type::King))]);
}

#[test]
fn test_kings_keep_their_distance() {
    let mut pos = empty_board();
    place_kings(&mut pos, "e4", "e6");

    let moves = pos.legal_moves_from(sq("e4")).unwrap();

    for to in ["d5", "e5", "f5"] {
        assert!(!has_move(&moves, "e4", to), "Ke4-{to} touches the enemy king");
    }
    assert_eq!(moves.len(), 5);
}
