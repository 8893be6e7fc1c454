use crate::game_repr::bitboards::tables::KING_TARGETS;
use crate::game_repr::{Position, Square, SquareSet};

impl Position {
    /// One-step king moves from `idx`. Castling is not generated.
    pub fn king_targets(&self, idx: Square) -> SquareSet {
        self.leaper_targets(idx, KING_TARGETS[idx.index()])
    }
}
