use super::*;

// ==================== ENDGAME POSITION PERFT TESTS ====================
// Position 3 of the standard perft suite. En passant first becomes available
// at depth 3, so only the shallower counts are comparable.
// FEN: 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -

const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -";

#[test]
fn test_perft_endgame_depth_1() {
    let pos = Position::from_fen(ENDGAME_FEN).unwrap();
    assert_eq!(pos.perft(1).unwrap(), 14);
}

#[test]
fn test_perft_endgame_depth_2() {
    let pos = Position::from_fen(ENDGAME_FEN).unwrap();
    assert_eq!(pos.perft(2).unwrap(), 191);
}

#[test]
fn test_divide_sums_to_perft() {
    let pos = Position::from_fen(ENDGAME_FEN).unwrap();
    let total: u64 = pos.divide(2).unwrap().iter().map(|(_, n)| n).sum();
    assert_eq!(total, 191);
}
