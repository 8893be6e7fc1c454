use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board with white to move
pub fn empty_board() -> Position {
    Position::empty(Color::White)
}

/// Helper function to parse an algebraic square name
pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, square: &str, color: Color, piece_type: Type) {
    pos.set_piece(sq(square), Piece::new(color, piece_type));
}

/// Helper function to place both kings on the board
pub fn place_kings(pos: &mut Position, white: &str, black: &str) {
    place_piece(pos, white, Color::White, Type::King);
    place_piece(pos, black, Color::Black, Type::King);
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Helper function to play a sequence of UCI moves with legality checks
pub fn play_line(pos: Position, line: &[&str]) -> Position {
    line.iter().fold(pos, |pos, text| {
        let mv = pos.parse_uci(text).unwrap();
        pos.apply_move(mv).unwrap()
    })
}

// ==================== TEST MODULES ====================

mod king_movement;
mod promotion;
mod stalemate;
mod regression;
mod perft;
