use super::bitboards::tables::{DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL};
use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    InsufficientMaterial,
}

/// Result of [`Position::game_status`] for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Score of a finished game for `color`: 1 for a win, 0.5 for any draw,
    /// 0 for a loss. `None` while the game is ongoing.
    pub fn outcome_for(&self, color: Color) -> Option<f64> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner } if *winner == color => Some(1.0),
            GameStatus::Checkmate { .. } => Some(0.0),
            GameStatus::Stalemate | GameStatus::Draw(_) => Some(0.5),
        }
    }
}

impl Position {
    /// Checks if `square` is attacked by any piece of `by_color`, scanning
    /// outward from the square rather than generating the attacker's moves.
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        // Diagonals: bishop/queen at any distance, king at one step, pawn at
        // one step when it captures toward the square.
        for &(df, dr) in &DIAGONAL {
            if let Some((piece, distance)) = self.first_piece_on_ray(square, df, dr) {
                if piece.color != by_color {
                    continue;
                }
                let hit = match piece.piece_type {
                    Type::Bishop | Type::Queen => true,
                    Type::King => distance == 1,
                    Type::Pawn => distance == 1 && dr == -by_color.forward(),
                    _ => false,
                };
                if hit {
                    return true;
                }
            }
        }

        // Ranks and files: rook/queen at any distance, king at one step
        for &(df, dr) in &ORTHOGONAL {
            if let Some((piece, distance)) = self.first_piece_on_ray(square, df, dr) {
                if piece.color != by_color {
                    continue;
                }
                let hit = match piece.piece_type {
                    Type::Rook | Type::Queen => true,
                    Type::King => distance == 1,
                    _ => false,
                };
                if hit {
                    return true;
                }
            }
        }

        let enemy_knight = Some(Piece::new(by_color, Type::Knight));
        KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(df, dr)| square.offset(df, dr))
            .any(|sq| self.piece_at(sq) == enemy_knight)
    }

    /// First occupant along a ray from `square` and its distance in steps.
    fn first_piece_on_ray(&self, square: Square, df: i8, dr: i8) -> Option<(Piece, u8)> {
        let mut cursor = square;
        let mut distance = 0;
        while let Some(next) = cursor.offset(df, dr) {
            distance += 1;
            if let Some(piece) = self.piece_at(next) {
                return Some((piece, distance));
            }
            cursor = next;
        }
        None
    }

    /// Checks if the king of the given color is currently in check
    pub fn is_in_check(&self, color: Color) -> Result<bool, RulesError> {
        let king_sq = self.require_king(color)?;
        Ok(self.is_square_attacked(king_sq, color.opposite()))
    }

    /// Returns true if the given color is in checkmate
    /// (in check AND has no legal moves)
    pub fn is_checkmate(&self, color: Color) -> Result<bool, RulesError> {
        Ok(self.is_in_check(color)? && !self.has_legal_moves(color)?)
    }

    /// Returns true if the given color is in stalemate
    /// (NOT in check AND has no legal moves)
    pub fn is_stalemate(&self, color: Color) -> Result<bool, RulesError> {
        Ok(!self.is_in_check(color)? && !self.has_legal_moves(color)?)
    }

    /// Neither side can ever deliver mate: bare kings, a single minor piece,
    /// or only bishops that all stand on squares of one color (which covers
    /// king and bishop against king and same-colored bishop).
    pub fn is_draw_by_material(&self) -> bool {
        let mut minors = 0;
        let mut light_bishops = 0;
        let mut dark_bishops = 0;

        for sq in Square::all() {
            let Some(piece) = self.piece_at(sq) else {
                continue;
            };
            match piece.piece_type {
                Type::King => {}
                Type::Knight => minors += 1,
                Type::Bishop => {
                    minors += 1;
                    if sq.is_light() {
                        light_bishops += 1;
                    } else {
                        dark_bishops += 1;
                    }
                }
                Type::Pawn | Type::Rook | Type::Queen => return false,
            }
        }

        let bishops = light_bishops + dark_bishops;
        minors <= 1 || (bishops == minors && (light_bishops == 0 || dark_bishops == 0))
    }

    /// Status of the game from the side to move's point of view.
    pub fn game_status(&self) -> Result<GameStatus, RulesError> {
        let has_moves = self.has_legal_moves(self.side_to_move)?;
        self.status_given_moves(has_moves)
    }

    /// [`Position::game_status`] for callers that already generated the side
    /// to move's legal moves and know whether there are any.
    pub(crate) fn status_given_moves(&self, has_moves: bool) -> Result<GameStatus, RulesError> {
        let color = self.side_to_move;
        // Both kings must be present even when only one side is queried
        self.require_king(color.opposite())?;

        if !has_moves {
            return Ok(if self.is_in_check(color)? {
                GameStatus::Checkmate {
                    winner: color.opposite(),
                }
            } else {
                GameStatus::Stalemate
            });
        }

        if self.is_draw_by_material() {
            return Ok(GameStatus::Draw(DrawReason::InsufficientMaterial));
        }

        Ok(GameStatus::Ongoing)
    }
}
