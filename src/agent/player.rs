//! Player trait and the game driver.
//!
//! A player is anything that can propose a move for a position: the search
//! engine, a random mover, or an adapter around an external engine. The
//! trait has no constructor; each implementation takes what it needs.
//!
//! `get_move()` is synchronous. A search player blocks for the duration of
//! its search and [`play_game`] simply waits for the result.

use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::ai::{Evaluator, Mcts, MctsConfig};
use crate::game_repr::{Color, GameHistory, GameStatus, Move, Position, RulesError};

/// Result of a completed chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    /// Stalemate, insufficient material, or the ply limit
    Draw,
}

impl GameResult {
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// `None` while the game is still going.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner } => Some(Self::from_winner(winner)),
            GameStatus::Stalemate | GameStatus::Draw(_) => Some(GameResult::Draw),
        }
    }
}

/// Trait for entities that can provide chess moves.
///
/// `get_move` returns `None` when the player cannot or will not move, which
/// the game driver treats as a resignation. The returned move is validated
/// by the caller.
pub trait Player {
    fn get_move(&mut self, position: &Position) -> Option<Move>;

    fn name(&self) -> &str {
        "Player"
    }
}

/// Plays a uniformly random legal move.
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            name: "Random".to_string(),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, position: &Position) -> Option<Move> {
        let moves = position.legal_moves(position.side_to_move()).ok()?;
        moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// MCTS player. Uses root-parallel search when `config.threads != 1`.
pub struct MctsPlayer<E> {
    mcts: Mcts<E>,
    name: String,
}

impl<E: Evaluator + Clone + Send + Sync> MctsPlayer<E> {
    pub fn new(config: MctsConfig, evaluator: E, name: impl Into<String>) -> Self {
        Self {
            mcts: Mcts::new(config, evaluator),
            name: name.into(),
        }
    }

    pub fn mcts(&self) -> &Mcts<E> {
        &self.mcts
    }
}

impl<E: Evaluator + Clone + Send + Sync> Player for MctsPlayer<E> {
    fn get_move(&mut self, position: &Position) -> Option<Move> {
        let result = if self.mcts.config().threads == 1 {
            self.mcts.select_move(position)
        } else {
            self.mcts.select_move_parallel(position)
        };
        match result {
            Ok(mv) => Some(mv),
            Err(e) => {
                warn!("{}: search failed: {e}", self.name);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// How a game driven by [`play_game`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The final position is terminal
    Rules(GameStatus),
    /// A player returned no move
    Resignation(Color),
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub history: GameHistory,
    pub result: GameResult,
    pub termination: Termination,
}

/// Plays `white` against `black` from `start` until the game ends, a player
/// resigns, or `max_plies` moves have been made (scored as a draw).
///
/// A player returning an illegal move is an error; the game is not
/// adjudicated.
pub fn play_game(
    white: &mut dyn Player,
    black: &mut dyn Player,
    start: Position,
    max_plies: usize,
) -> Result<GameRecord, RulesError> {
    let mut history = GameHistory::new(start);
    info!("{} (white) vs {} (black)", white.name(), black.name());

    let (result, termination) = loop {
        let position = *history.current();
        let status = position.game_status()?;
        if let Some(result) = GameResult::from_status(status) {
            break (result, Termination::Rules(status));
        }
        if history.ply() >= max_plies {
            break (GameResult::Draw, Termination::PlyLimit);
        }

        let side = position.side_to_move();
        let (choice, name) = match side {
            Color::White => (white.get_move(&position), white.name()),
            Color::Black => (black.get_move(&position), black.name()),
        };
        let Some(mv) = choice else {
            info!("{name} resigns");
            break (
                GameResult::from_winner(side.opposite()),
                Termination::Resignation(side),
            );
        };

        log::debug!("{}. {} {}", history.ply() / 2 + 1, name, mv);
        history.apply(mv)?;
    };

    info!(
        "game over after {} plies: {:?} ({:?})",
        history.ply(),
        result,
        termination
    );
    Ok(GameRecord {
        history,
        result,
        termination,
    })
}
