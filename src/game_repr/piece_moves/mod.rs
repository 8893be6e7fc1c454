//! Move generation.
//!
//! Each piece file computes the squares one piece can reach ignoring king
//! safety. Those per-piece target sets are unioned into a side's impact set,
//! and expanded into [`Move`]s which are then filtered by playing each
//! candidate and testing the mover's king against the opponent's impact set.

pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::{Color, Move, Position, RulesError, Square, SquareSet, Type};

/// Per-piece candidate buffer. A queen reaches at most 27 squares.
pub(crate) type MoveBuf = SmallVec<[Move; 28]>;

/// The squares each side's pieces can move to or capture on, ignoring
/// whether doing so would expose their own king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactSets {
    pub white: SquareSet,
    pub black: SquareSet,
}

impl ImpactSets {
    pub fn for_color(&self, color: Color) -> SquareSet {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

impl Position {
    /// Reachable squares for the piece on `idx`; empty when the square is empty.
    pub fn piece_targets(&self, idx: Square) -> SquareSet {
        match self.piece_at(idx).map(|p| p.piece_type) {
            Some(Type::Pawn) => self.pawn_targets(idx),
            Some(Type::Knight) => self.knight_targets(idx),
            Some(Type::Bishop) => self.bishop_targets(idx),
            Some(Type::Rook) => self.rook_targets(idx),
            Some(Type::Queen) => self.queen_targets(idx),
            Some(Type::King) => self.king_targets(idx),
            None => SquareSet::EMPTY,
        }
    }

    /// Union of the target sets of every piece of `color`.
    pub fn impact_set(&self, color: Color) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for (sq, _) in self.pieces(color) {
            set |= self.piece_targets(sq);
        }
        set
    }

    pub fn impact_sets(&self) -> ImpactSets {
        ImpactSets {
            white: self.impact_set(Color::White),
            black: self.impact_set(Color::Black),
        }
    }

    /// Pseudo-legal moves of the piece on `idx`, with a pawn move onto the
    /// last rank expanded into one move per promotion type.
    pub(crate) fn candidate_moves_into(&self, idx: Square, moves: &mut MoveBuf) {
        let Some(piece) = self.piece_at(idx) else {
            return;
        };
        let last_rank = match piece.color {
            Color::White => 7,
            Color::Black => 0,
        };

        for to in self.piece_targets(idx) {
            if piece.piece_type == Type::Pawn && to.rank() == last_rank {
                for promoted_to in Type::PROMOTIONS {
                    moves.push(Move::promotion(idx, to, piece, promoted_to));
                }
            } else {
                moves.push(Move::new(idx, to, piece));
            }
        }
    }

    /// Pseudo-legal moves of every piece of `color`.
    pub(crate) fn candidate_moves(&self, color: Color) -> Vec<Move> {
        let mut all = Vec::with_capacity(48);
        let mut buf = MoveBuf::new();
        for (sq, _) in self.pieces(color) {
            buf.clear();
            self.candidate_moves_into(sq, &mut buf);
            all.extend_from_slice(&buf);
        }
        all
    }

    /// Plays `mv` on a copy and checks whether the mover's king ends up inside
    /// the opponent's impact set. `king_sq` is the mover's king square before
    /// the move.
    pub(crate) fn keeps_king_safe(&self, mv: Move, king_sq: Square) -> bool {
        let after = self.play(mv);
        let king_sq = if mv.piece.piece_type == Type::King {
            mv.to
        } else {
            king_sq
        };
        !after
            .impact_set(mv.piece.color.opposite())
            .contains(king_sq)
    }

    /// All legal moves for `color`, regardless of whose turn it is.
    pub fn legal_moves(&self, color: Color) -> Result<Vec<Move>, RulesError> {
        let king_sq = self.require_king(color)?;
        let mut moves = self.candidate_moves(color);
        moves.retain(|&mv| self.keeps_king_safe(mv, king_sq));
        Ok(moves)
    }

    /// Legal moves of the piece standing on `idx`.
    pub fn legal_moves_from(&self, idx: Square) -> Result<Vec<Move>, RulesError> {
        let Some(piece) = self.piece_at(idx) else {
            return Ok(Vec::new());
        };
        let king_sq = self.require_king(piece.color)?;
        let mut buf = MoveBuf::new();
        self.candidate_moves_into(idx, &mut buf);
        Ok(buf
            .into_iter()
            .filter(|&mv| self.keeps_king_safe(mv, king_sq))
            .collect())
    }

    /// Checks if the given color has ANY legal moves available
    pub fn has_legal_moves(&self, color: Color) -> Result<bool, RulesError> {
        let king_sq = self.require_king(color)?;
        let mut buf = MoveBuf::new();
        for (sq, _) in self.pieces(color) {
            buf.clear();
            self.candidate_moves_into(sq, &mut buf);
            if buf.iter().any(|&mv| self.keeps_king_safe(mv, king_sq)) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
