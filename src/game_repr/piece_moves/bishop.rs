use crate::game_repr::bitboards::tables::DIAGONAL;
use crate::game_repr::{Position, Square, SquareSet};

impl Position {
    pub fn bishop_targets(&self, idx: Square) -> SquareSet {
        self.slide_targets(idx, &DIAGONAL)
    }
}
