use super::*;

impl Position {
    /// Applies a legal move and returns the resulting position.
    ///
    /// The move must be one of `legal_moves(side_to_move)`; anything else,
    /// including castling and en passant (which are not modelled), fails with
    /// [`RulesError::IllegalMove`]. `self` is never modified.
    pub fn apply_move(&self, mv: Move) -> Result<Position, RulesError> {
        if mv.piece.color != self.side_to_move || self.piece_at(mv.from) != Some(mv.piece) {
            return Err(RulesError::IllegalMove(mv));
        }
        if !self.legal_moves_from(mv.from)?.contains(&mv) {
            return Err(RulesError::IllegalMove(mv));
        }
        Ok(self.play(mv))
    }

    /// Grid transformation behind [`Position::apply_move`] without the
    /// legality check: clears `from`, places the moved (or promoted) piece on
    /// `to` and passes the turn to the moving piece's opponent.
    pub(crate) fn play(&self, mv: Move) -> Position {
        let mut next = *self;
        next.grid[mv.from.index()] = None;
        next.grid[mv.to.index()] = Some(mv.placed_piece());
        next.side_to_move = mv.piece.color.opposite();
        next
    }
}
