use super::*;

/// Caller-held record of a game: every position reached plus the moves
/// between them. Undo pops the most recent position; the starting position
/// is never popped.
#[derive(Debug, Clone)]
pub struct GameHistory {
    positions: Vec<Position>,
    moves: Vec<Move>,
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new(Position::default())
    }
}

impl GameHistory {
    pub fn new(start: Position) -> Self {
        Self {
            positions: vec![start],
            moves: Vec::new(),
        }
    }

    pub fn current(&self) -> &Position {
        // `positions` always holds at least the starting position
        &self.positions[self.positions.len() - 1]
    }

    pub fn start(&self) -> &Position {
        &self.positions[0]
    }

    /// Validates and applies `mv` to the current position.
    pub fn apply(&mut self, mv: Move) -> Result<&Position, RulesError> {
        let next = self.current().apply_move(mv)?;
        self.positions.push(next);
        self.moves.push(mv);
        Ok(self.current())
    }

    /// Takes back the last move, returning the position it produced.
    pub fn undo(&mut self) -> Option<Position> {
        if self.positions.len() <= 1 {
            return None;
        }
        self.moves.pop();
        self.positions.pop()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Number of moves applied since the start.
    pub fn ply(&self) -> usize {
        self.moves.len()
    }

    /// How many times the current position has occurred so far, itself
    /// included.
    pub fn repetition_count(&self) -> usize {
        let current = self.current();
        self.positions.iter().filter(|p| *p == current).count()
    }
}
