use super::*;

// ==================== PROMOTION TESTS ====================

#[test]
fn test_promotion_expands_into_four_moves_in_order() {
    let mut pos = empty_board();
    place_kings(&mut pos, "a1", "h1");
    place_piece(&mut pos, "g7", Color::White, Type::Pawn);

    let moves = pos.legal_moves_from(sq("g7")).unwrap();

    let kinds: Vec<Option<Type>> = moves.iter().map(|m| m.promoted_to()).collect();
    assert_eq!(
        kinds,
        vec![Some(Type::Rook), Some(Type::Knight), Some(Type::Bishop), Some(Type::Queen)]
    );
    assert!(moves.iter().all(|m| m.to == sq("g8")));
}

#[test]
fn test_promotion_execution() {
    let mut pos = empty_board();
    place_kings(&mut pos, "a1", "h1");
    place_piece(&mut pos, "g7", Color::White, Type::Pawn);

    let mv = pos.parse_uci("g7g8n").unwrap();
    let next = pos.apply_move(mv).unwrap();

    assert_eq!(next.piece_at(sq("g8")), Some(Piece::new(Color::White, Type::Knight)));
    assert_eq!(next.piece_at(sq("g7")), None);
    assert_eq!(next.side_to_move(), Color::Black);
    // The source position is untouched
    assert_eq!(pos.piece_at(sq("g7")), Some(Piece::new(Color::White, Type::Pawn)));
}

#[test]
fn test_promotion_on_capture() {
    let mut pos = empty_board();
    place_kings(&mut pos, "a1", "h1");
    place_piece(&mut pos, "g7", Color::White, Type::Pawn);
    place_piece(&mut pos, "g8", Color::Black, Type::Rook);
    place_piece(&mut pos, "h8", Color::Black, Type::Knight);

    let moves = pos.legal_moves_from(sq("g7")).unwrap();

    assert_eq!(moves.len(), 4, "push is blocked, only the capture on h8 remains");
    assert!(moves.iter().all(|m| m.to == sq("h8") && m.is_promotion()));
}

#[test]
fn test_black_promotes_on_first_rank() {
    let mut pos = empty_board();
    pos.set_side_to_move(Color::Black);
    place_kings(&mut pos, "h8", "a8");
    place_piece(&mut pos, "c2", Color::Black, Type::Pawn);

    let next = pos.apply_move(pos.parse_uci("c2c1q").unwrap()).unwrap();
    assert_eq!(next.piece_at(sq("c1")), Some(Piece::new(Color::Black, Type::Queen)));
}

#[test]
fn test_unpromoted_move_to_last_rank_is_rejected() {
    let mut pos = empty_board();
    place_kings(&mut pos, "a1", "h1");
    place_piece(&mut pos, "g7", Color::White, Type::Pawn);

    let plain = Move::new(sq("g7"), sq("g8"), Piece::new(Color::White, Type::Pawn));
    assert_eq!(pos.apply_move(plain), Err(RulesError::IllegalMove(plain)));
}
