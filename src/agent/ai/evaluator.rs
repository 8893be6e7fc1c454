//! Pluggable leaf evaluation for the search engine.
//!
//! An [`Evaluator`] turns a position into per-move priors and a value
//! estimate. Values are in `[-1, 1]` from the point of view of the side to
//! move: 1 is a certain win, -1 a certain loss.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::SearchError;
use crate::game_repr::{Color, Move, Position, Type};

/// Output of an evaluator for a single position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    /// Prior probability per legal move. Empty means "no opinion", in which
    /// case the search treats every move as equally likely.
    pub priors: Vec<(Move, f64)>,
    pub value: f64,
}

impl Evaluation {
    pub fn value_only(value: f64) -> Self {
        Self {
            priors: Vec::new(),
            value,
        }
    }
}

pub trait Evaluator {
    fn evaluate(&mut self, position: &Position) -> Result<Evaluation, SearchError>;

    /// Re-seeds any internal randomness. Called by the search engine so that
    /// a seeded search is reproducible.
    fn reseed(&mut self, _seed: u64) {}
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn evaluate(&mut self, position: &Position) -> Result<Evaluation, SearchError> {
        (**self).evaluate(position)
    }

    fn reseed(&mut self, seed: u64) {
        (**self).reseed(seed)
    }
}

/// Default playout cap; a playout that runs this long is scored as a draw.
pub const DEFAULT_MAX_PLIES: usize = 200;

/// Classic MCTS simulation: plays uniformly random legal moves until the game
/// ends or `max_plies` is reached.
#[derive(Debug, Clone)]
pub struct RandomRollout {
    rng: StdRng,
    max_plies: usize,
}

impl Default for RandomRollout {
    fn default() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_plies: DEFAULT_MAX_PLIES,
        }
    }
}

impl RandomRollout {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_plies: DEFAULT_MAX_PLIES,
        }
    }

    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Picks a uniformly random legal move, or `None` when there is none.
    ///
    /// Shuffling the pseudo-legal candidates and keeping the first one that
    /// passes the king-safety test is uniform over the legal moves, and
    /// avoids filtering the whole list on every ply.
    fn random_legal_move(&mut self, position: &Position) -> Result<Option<Move>, SearchError> {
        let color = position.side_to_move();
        let king_sq = position.require_king(color)?;
        let mut candidates = position.candidate_moves(color);
        candidates.shuffle(&mut self.rng);
        Ok(candidates
            .into_iter()
            .find(|&mv| position.keeps_king_safe(mv, king_sq)))
    }
}

impl Evaluator for RandomRollout {
    fn evaluate(&mut self, position: &Position) -> Result<Evaluation, SearchError> {
        let perspective = position.side_to_move();
        let mut current = *position;

        for _ in 0..self.max_plies {
            let Some(mv) = self.random_legal_move(&current)? else {
                let mover = current.side_to_move();
                let value = if current.is_in_check(mover)? {
                    // The side to move is mated
                    if mover == perspective {
                        -1.0
                    } else {
                        1.0
                    }
                } else {
                    0.0
                };
                return Ok(Evaluation::value_only(value));
            };

            if current.is_draw_by_material() {
                return Ok(Evaluation::value_only(0.0));
            }
            current = current.play(mv);
        }

        log::trace!("rollout hit the {} ply cap", self.max_plies);
        Ok(Evaluation::value_only(0.0))
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

// Material values in centipawns
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 300;
const BISHOP_VALUE: i32 = 320;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;

/// Centipawn swing that maps to `tanh(1)`.
const MATERIAL_SCALE: f64 = 1000.0;

fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => 0,
    }
}

/// Material balance in centipawns, positive when `color` is ahead.
pub fn material_balance(position: &Position, color: Color) -> i32 {
    let own: i32 = position
        .pieces(color)
        .map(|(_, p)| piece_value(p.piece_type))
        .sum();
    let theirs: i32 = position
        .pieces(color.opposite())
        .map(|(_, p)| piece_value(p.piece_type))
        .sum();
    own - theirs
}

fn uniform_priors(moves: &[Move]) -> Vec<(Move, f64)> {
    if moves.is_empty() {
        return Vec::new();
    }
    let p = 1.0 / moves.len() as f64;
    moves.iter().map(|&mv| (mv, p)).collect()
}

/// Static heuristic: material balance squashed into `[-1, 1]` with `tanh`,
/// uniform priors. Deterministic and much cheaper than a rollout.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&mut self, position: &Position) -> Result<Evaluation, SearchError> {
        let side = position.side_to_move();
        let moves = position.legal_moves(side)?;
        let balance = material_balance(position, side);
        Ok(Evaluation {
            priors: uniform_priors(&moves),
            value: (balance as f64 / MATERIAL_SCALE).tanh(),
        })
    }
}

/// Something that can propose a single move for a position, such as an
/// external UCI engine or a learned policy.
pub trait MoveOracle {
    fn best_move(&mut self, position: &Position) -> Option<Move>;
}

/// Adapts a [`MoveOracle`] into an [`Evaluator`]: the oracle's move receives
/// `prior_mass` of the prior on top of a uniform share of the rest, and the
/// value comes from the material heuristic.
#[derive(Debug, Clone)]
pub struct OracleEvaluator<O> {
    oracle: O,
    prior_mass: f64,
}

impl<O: MoveOracle> OracleEvaluator<O> {
    pub fn new(oracle: O, prior_mass: f64) -> Self {
        Self {
            oracle,
            prior_mass: prior_mass.clamp(0.0, 1.0),
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

impl<O: MoveOracle> Evaluator for OracleEvaluator<O> {
    fn evaluate(&mut self, position: &Position) -> Result<Evaluation, SearchError> {
        let mut eval = MaterialEvaluator.evaluate(position)?;
        let n = eval.priors.len();
        if n == 0 {
            return Ok(eval);
        }

        let suggestion = self.oracle.best_move(position);
        // Moves the oracle suggests that are not legal here are ignored
        if let Some(best) = suggestion.filter(|mv| eval.priors.iter().any(|(m, _)| m == mv)) {
            let rest = (1.0 - self.prior_mass) / n as f64;
            for (mv, p) in eval.priors.iter_mut() {
                *p = if *mv == best { self.prior_mass + rest } else { rest };
            }
        } else {
            log::warn!("oracle gave no usable move for {}", position.to_fen());
        }
        Ok(eval)
    }
}
