//! Fixed-size numeric encoding of a position for learned evaluators.
//!
//! Layout is plane-major, `plane * 64 + row * 8 + col`, where row 0 is rank 8
//! and col 0 is the a-file:
//!
//! | planes | content                                              |
//! |--------|------------------------------------------------------|
//! | 0..6   | white pawn, knight, bishop, rook, queen, king        |
//! | 6..12  | black pawn, knight, bishop, rook, queen, king        |
//! | 12     | side to move, all 1.0 when white is to move          |
//! | 13     | castling / en passant indicators, always 0.0 here    |

use super::*;

pub const PLANES: usize = 14;
pub const TENSOR_LEN: usize = PLANES * 64;

pub const SIDE_TO_MOVE_PLANE: usize = 12;
pub const SPECIAL_RULES_PLANE: usize = 13;

pub type BoardTensor = [f32; TENSOR_LEN];

#[inline]
fn cell(square: Square) -> usize {
    (7 - square.rank() as usize) * 8 + square.file() as usize
}

fn piece_plane(piece: Piece) -> usize {
    let base = match piece.color {
        Color::White => 0,
        Color::Black => 6,
    };
    base + piece.piece_type.index()
}

pub fn encode(position: &Position) -> BoardTensor {
    let mut tensor = [0.0; TENSOR_LEN];

    for sq in Square::all() {
        if let Some(piece) = position.piece_at(sq) {
            tensor[piece_plane(piece) * 64 + cell(sq)] = 1.0;
        }
    }

    if position.side_to_move() == Color::White {
        let plane = SIDE_TO_MOVE_PLANE * 64;
        tensor[plane..plane + 64].fill(1.0);
    }

    tensor
}

/// Rebuilds piece placement and side to move from an encoded tensor.
pub fn decode_placement(tensor: &BoardTensor) -> Result<Position, RulesError> {
    let side = if tensor[SIDE_TO_MOVE_PLANE * 64] > 0.5 {
        Color::White
    } else {
        Color::Black
    };
    let mut position = Position::empty(side);

    for sq in Square::all() {
        let mut found: Option<Piece> = None;
        for color in [Color::White, Color::Black] {
            for piece_type in Type::ALL {
                let piece = Piece::new(color, piece_type);
                if tensor[piece_plane(piece) * 64 + cell(sq)] > 0.5 {
                    if found.is_some() {
                        return Err(RulesError::InvalidTensor(format!(
                            "more than one piece on {sq}"
                        )));
                    }
                    found = Some(piece);
                }
            }
        }
        if let Some(piece) = found {
            position.set_piece(sq, piece);
        }
    }

    Ok(position)
}
