use std::fmt;

use super::*;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION
 */

/// A board state: piece placement plus the side to move.
///
/// Positions are plain values. Every position after the start is produced by
/// applying a move to a previous one, and two positions are equal when their
/// grids and sides to move are equal. Move history is kept by the caller
/// (see [`GameHistory`]), never inside the value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Mailbox indexed by [`Square::index`]
    pub(crate) grid: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
}

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

impl Default for Position {
    fn default() -> Self {
        let mut pos = Self::empty(Color::White);
        let back_rank = [
            Type::Rook,
            Type::Knight,
            Type::Bishop,
            Type::Queen,
            Type::King,
            Type::Bishop,
            Type::Knight,
            Type::Rook,
        ];
        for (file, &piece_type) in back_rank.iter().enumerate() {
            pos.grid[file] = Some(Piece::new(Color::White, piece_type));
            pos.grid[8 + file] = Some(Piece::new(Color::White, Type::Pawn));
            pos.grid[48 + file] = Some(Piece::new(Color::Black, Type::Pawn));
            pos.grid[56 + file] = Some(Piece::new(Color::Black, piece_type));
        }
        pos
    }
}

impl Position {
    /// A board with no pieces. Useful for setting up test positions; queries
    /// that need a king return [`RulesError::CorruptState`] until both kings
    /// are placed.
    pub fn empty(side_to_move: Color) -> Position {
        Position {
            grid: [None; 64],
            side_to_move,
        }
    }

    /// Parses the placement and side-to-move fields of a FEN string. Castling,
    /// en passant and clock fields are accepted but not modelled.
    pub fn from_fen(fen_str: &str) -> Result<Position, RulesError> {
        let mut parts = fen_str.split_whitespace();
        let placement = parts
            .next()
            .ok_or_else(|| RulesError::InvalidFen("empty string".to_string()))?;

        let mut pos = Position::empty(Color::White);
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(RulesError::InvalidFen(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file: u8 = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(RulesError::InvalidFen(format!("bad empty-run {c:?}")));
                    }
                    file += skip as u8;
                } else {
                    let piece = Piece::from_char(c)
                        .ok_or_else(|| RulesError::InvalidFen(format!("bad piece letter {c:?}")))?;
                    let sq = Square::from_coords(file, rank).ok_or_else(|| {
                        RulesError::InvalidFen(format!("rank {} overflows", rank + 1))
                    })?;
                    pos.grid[sq.index()] = Some(piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(RulesError::InvalidFen(format!("rank {} overflows", rank + 1)));
                }
            }
            if file != 8 {
                return Err(RulesError::InvalidFen(format!(
                    "rank {} has {} files",
                    rank + 1,
                    file
                )));
            }
        }

        pos.side_to_move = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(RulesError::InvalidFen(format!("bad side to move {other:?}")))
            }
        };

        for color in [Color::White, Color::Black] {
            let kings = pos
                .pieces(color)
                .filter(|(_, p)| p.piece_type == Type::King)
                .count();
            if kings != 1 {
                return Err(RulesError::InvalidFen(format!(
                    "expected one {color:?} king, found {kings}"
                )));
            }
        }

        // The side that just moved cannot have left its king attacked
        let waiting = pos.side_to_move.opposite();
        if pos.is_in_check(waiting)? {
            return Err(RulesError::InvalidFen(format!(
                "{waiting:?} is in check but it is not their move"
            )));
        }

        Ok(pos)
    }

    /// Converts the position to FEN. The unmodelled fields are written as
    /// `- - 0 1`.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8u8).rev() {
            let mut empty_count = 0;
            for file in 0..8u8 {
                match self.grid[(rank * 8 + file) as usize] {
                    None => empty_count += 1,
                    Some(piece) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push_str(match self.side_to_move {
            Color::White => " w",
            Color::Black => " b",
        });
        fen.push_str(" - - 0 1");
        fen
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline(always)]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid[square.index()]
    }

    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.grid[square.index()] = Some(piece);
    }

    pub fn clear_square(&mut self, square: Square) {
        self.grid[square.index()] = None;
    }

    /// All pieces of `color` with their squares, in ascending square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.grid[sq.index()] {
            Some(p) if p.color == color => Some((sq, p)),
            _ => None,
        })
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Some(Piece::new(color, Type::King));
        Square::all().find(|sq| self.grid[sq.index()] == king)
    }

    pub(crate) fn require_king(&self, color: Color) -> Result<Square, RulesError> {
        self.king_square(color).ok_or(RulesError::CorruptState(color))
    }

    /// Resolves UCI long algebraic text (`e2e4`, `a7a8q`) against this
    /// position's legal moves.
    pub fn parse_uci(&self, text: &str) -> Result<Move, RulesError> {
        let invalid = || RulesError::InvalidMoveText(text.to_string());
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(invalid());
        }
        let from: Square = text[0..2].parse().map_err(|_| invalid())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid())?;
        let promoted_to = match text[4..].chars().next() {
            None => None,
            Some(c) => Some(Type::from_char(c).ok_or_else(invalid)?),
        };

        let piece = self.piece_at(from).ok_or_else(invalid)?;
        let mv = match promoted_to {
            None => Move::new(from, to, piece),
            Some(t) => Move::promotion(from, to, piece, t),
        };

        if self.legal_moves(self.side_to_move)?.contains(&mv) {
            Ok(mv)
        } else {
            Err(RulesError::IllegalMove(mv))
        }
    }

    /// Perft (Performance Test) - counts leaf nodes at a given depth
    /// Used to validate move generation correctness
    pub fn perft(&self, depth: u32) -> Result<u64, RulesError> {
        if depth == 0 {
            return Ok(1);
        }

        let moves = self.legal_moves(self.side_to_move)?;

        // Bulk counting at the frontier
        if depth == 1 {
            return Ok(moves.len() as u64);
        }

        let mut nodes = 0;
        for mv in moves {
            nodes += self.play(mv).perft(depth - 1)?;
        }
        Ok(nodes)
    }

    /// Divide - perft count for each first-level move (debugging tool)
    pub fn divide(&self, depth: u32) -> Result<Vec<(Move, u64)>, RulesError> {
        let depth = depth.max(1);
        self.legal_moves(self.side_to_move)?
            .into_iter()
            .map(|mv| Ok((mv, self.play(mv).perft(depth - 1)?)))
            .collect()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_fen())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = self.grid[(rank * 8 + file) as usize]
                    .map(|p| p.to_char())
                    .unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{:?} to move", self.side_to_move)
    }
}
