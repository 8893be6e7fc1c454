use super::*;

// ==================== STALEMATE TESTS ====================

#[test]
fn test_basic_stalemate() {
    let mut pos = empty_board();
    place_kings(&mut pos, "a1", "h8");
    // Queen controls every escape square without checking the king
    place_piece(&mut pos, "c2", Color::Black, Type::Queen);

    assert!(!pos.is_in_check(Color::White).unwrap(), "King should not be in check");
    assert!(!pos.has_legal_moves(Color::White).unwrap(), "Should have no legal moves");
    assert!(pos.is_stalemate(Color::White).unwrap(), "Should be stalemate");
    assert_eq!(pos.game_status().unwrap(), GameStatus::Stalemate);
    assert_eq!(GameStatus::Stalemate.outcome_for(Color::White), Some(0.5));
}

#[test]
fn test_not_stalemate_when_in_check() {
    let mut pos = empty_board();
    place_kings(&mut pos, "a1", "h8");
    place_piece(&mut pos, "a8", Color::Black, Type::Rook);

    assert!(pos.is_in_check(Color::White).unwrap(), "King should be in check");
    assert!(!pos.is_stalemate(Color::White).unwrap());
}

#[test]
fn test_not_stalemate_has_pawn_move() {
    let mut pos = empty_board();
    place_kings(&mut pos, "a1", "h8");
    place_piece(&mut pos, "h2", Color::White, Type::Pawn);
    place_piece(&mut pos, "c2", Color::Black, Type::Queen);

    assert!(!pos.is_stalemate(Color::White).unwrap(), "Not stalemate - pawn can move");
    assert!(pos.has_legal_moves(Color::White).unwrap(), "Should have legal pawn move");
    assert_eq!(pos.game_status().unwrap(), GameStatus::Ongoing);
}

#[test]
fn test_stalemate_only_concerns_side_to_move() {
    let mut pos = empty_board();
    place_kings(&mut pos, "a1", "h8");
    place_piece(&mut pos, "c2", Color::Black, Type::Queen);
    pos.set_side_to_move(Color::Black);

    assert!(pos.is_stalemate(Color::White).unwrap());
    assert_eq!(pos.game_status().unwrap(), GameStatus::Ongoing);
}
