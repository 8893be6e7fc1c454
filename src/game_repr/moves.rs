use std::fmt;

use super::{Piece, Square, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    /// Pawn reaching the last rank, replaced by the given type.
    Promotion(Type),
}

/// A move as produced by the generator: source and target squares plus the
/// piece that stood on the source square when the move was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub kind: MoveKind,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece) -> Move {
        Self {
            from,
            to,
            piece,
            kind: MoveKind::Normal,
        }
    }

    pub fn promotion(from: Square, to: Square, piece: Piece, promoted_to: Type) -> Move {
        Self {
            from,
            to,
            piece,
            kind: MoveKind::Promotion(promoted_to),
        }
    }

    pub fn promoted_to(&self) -> Option<Type> {
        match self.kind {
            MoveKind::Normal => None,
            MoveKind::Promotion(t) => Some(t),
        }
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// The piece standing on `to` after the move.
    pub fn placed_piece(&self) -> Piece {
        match self.kind {
            MoveKind::Normal => self.piece,
            MoveKind::Promotion(t) => Piece::new(self.piece.color, t),
        }
    }

    /// Long algebraic text as used by UCI engines, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(&self) -> String {
        self.to_string()
    }

    /// Index into a 64x64 from/to policy vector. Promotions to different
    /// types share the index of their from/to pair.
    pub fn policy_index(&self) -> usize {
        self.from.index() * 64 + self.to.index()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(t) = self.promoted_to() {
            write!(f, "{}", t.to_char())?;
        }
        Ok(())
    }
}
