use thiserror::Error;

use crate::game_repr::RulesError;

/// Errors produced by the search engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The root position is already terminal.
    #[error("no moves available: the position is terminal")]
    NoMovesAvailable,

    #[error(transparent)]
    Rules(#[from] RulesError),

    /// A pluggable evaluator failed to produce an estimate.
    #[error("evaluator failed: {0}")]
    Evaluator(String),
}
