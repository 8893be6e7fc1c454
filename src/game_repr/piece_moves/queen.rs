use crate::game_repr::{Position, Square, SquareSet};

impl Position {
    pub fn queen_targets(&self, idx: Square) -> SquareSet {
        self.bishop_targets(idx).union(self.rook_targets(idx))
    }
}
