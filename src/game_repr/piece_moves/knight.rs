use crate::game_repr::bitboards::tables::KNIGHT_TARGETS;
use crate::game_repr::{Position, Square, SquareSet};

impl Position {
    /// Knight jumps from `idx` onto empty or enemy-occupied squares
    pub fn knight_targets(&self, idx: Square) -> SquareSet {
        self.leaper_targets(idx, KNIGHT_TARGETS[idx.index()])
    }

    /// Filters a fixed-offset table entry down to squares not held by the
    /// moving piece's own side.
    pub(super) fn leaper_targets(&self, idx: Square, reachable: SquareSet) -> SquareSet {
        let Some(moving_piece) = self.piece_at(idx) else {
            return SquareSet::EMPTY;
        };
        reachable
            .iter()
            .filter(|&sq| !matches!(self.piece_at(sq), Some(p) if p.color == moving_piece.color))
            .collect()
    }
}
