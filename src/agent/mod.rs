pub mod player;
pub use player::*;

pub mod ai;
pub use ai::{Mcts, MctsConfig, SearchError};
