use crate::game_repr::{Color, Position, Square, SquareSet};

impl Position {
    /// Squares a pawn on `idx` can move to: pushes onto empty squares and
    /// diagonal steps onto enemy pieces. En passant is not generated.
    pub fn pawn_targets(&self, idx: Square) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        let Some(pawn) = self.piece_at(idx) else {
            return targets;
        };
        let forward = pawn.color.forward();
        let start_rank = match pawn.color {
            Color::White => 1,
            Color::Black => 6,
        };

        if let Some(one) = idx.offset(0, forward) {
            if self.piece_at(one).is_none() {
                targets.insert(one);
                if idx.rank() == start_rank {
                    if let Some(two) = one.offset(0, forward) {
                        if self.piece_at(two).is_none() {
                            targets.insert(two);
                        }
                    }
                }
            }
        }

        for side in [-1, 1] {
            if let Some(diag) = idx.offset(side, forward) {
                if matches!(self.piece_at(diag), Some(p) if p.color != pawn.color) {
                    targets.insert(diag);
                }
            }
        }

        targets
    }
}
