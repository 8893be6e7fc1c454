use crate::game_repr::bitboards::tables::ORTHOGONAL;
use crate::game_repr::{Position, Square, SquareSet};

impl Position {
    pub fn rook_targets(&self, idx: Square) -> SquareSet {
        self.slide_targets(idx, &ORTHOGONAL)
    }

    /// Walks each ray until the first occupied square, which is included only
    /// when it holds an enemy piece.
    pub(super) fn slide_targets(&self, idx: Square, directions: &[(i8, i8)]) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        let Some(moving_piece) = self.piece_at(idx) else {
            return targets;
        };

        for &(df, dr) in directions {
            let mut cursor = idx;
            while let Some(next) = cursor.offset(df, dr) {
                match self.piece_at(next) {
                    None => targets.insert(next),
                    Some(p) => {
                        if p.color != moving_piece.color {
                            targets.insert(next);
                        }
                        break;
                    }
                }
                cursor = next;
            }
        }

        targets
    }
}
