//! Chess rules engine with a Monte Carlo Tree Search move picker.
//!
//! [`game_repr`] holds the board state, move generation, check and terminal
//! detection and move application. [`agent`] holds the search engine, its
//! pluggable evaluators and the players that drive games.
//!
//! ```
//! use chess_mcts::agent::ai::{Mcts, MctsConfig, RandomRollout};
//! use chess_mcts::game_repr::Position;
//!
//! let position = Position::default();
//! let config = MctsConfig { iterations: 50, seed: Some(1), ..MctsConfig::default() };
//! let mut mcts = Mcts::new(config, RandomRollout::default().with_max_plies(40));
//! let mv = mcts.select_move(&position).unwrap();
//! let next = position.apply_move(mv).unwrap();
//! assert_ne!(next, position);
//! ```

pub mod agent;
pub mod game_repr;
