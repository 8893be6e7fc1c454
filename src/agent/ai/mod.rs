// AI Agent - Monte Carlo Tree Search
//
// The search engine owns a tree of positions reached from the root and
// grows it one node per iteration. Leaves are scored by a pluggable
// evaluator: random rollouts by default, or a heuristic / external oracle
// that also supplies move priors for PUCT selection.

mod error;
pub mod evaluator;
pub mod mcts;
pub mod tree;

pub use error::SearchError;
pub use evaluator::{
    Evaluation, Evaluator, MaterialEvaluator, MoveOracle, OracleEvaluator, RandomRollout,
};
pub use mcts::{ChildStats, Mcts, MctsConfig, SearchStats, Selection};
pub use tree::{Node, SearchTree};
