//! Behaviour of the search engine through the public API.

use chess_mcts::agent::ai::{
    Evaluation, Evaluator, MaterialEvaluator, Mcts, MctsConfig, MoveOracle, OracleEvaluator,
    RandomRollout, SearchError, Selection,
};
use chess_mcts::game_repr::{Move, Position};

fn config(iterations: u32, seed: u64) -> MctsConfig {
    MctsConfig {
        iterations,
        seed: Some(seed),
        ..MctsConfig::default()
    }
}

fn rollout() -> RandomRollout {
    RandomRollout::default().with_max_plies(60)
}

#[test]
fn test_fixed_seed_is_deterministic() {
    let pos = Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w").unwrap();
    let picks: Vec<Move> = (0..3)
        .map(|_| Mcts::new(config(50, 99), rollout()).select_move(&pos).unwrap())
        .collect();
    assert!(picks.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_chosen_move_is_legal_across_a_game() {
    let mut mcts = Mcts::new(config(60, 4), rollout());
    let mut pos = Position::default();
    for _ in 0..10 {
        let mv = mcts.select_move(&pos).unwrap();
        pos = pos.apply_move(mv).unwrap();
    }
}

#[test]
fn test_back_rank_mate_in_one() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/3R2K1 w").unwrap();
    let mv = Mcts::new(config(400, 8), rollout()).select_move(&pos).unwrap();
    assert_eq!(mv.to_uci(), "d1d8");
}

#[test]
fn test_terminal_root_fails() {
    let stalemate = Position::from_fen("k7/2Q5/1K6/8/8/8/8/8 b").unwrap();
    let err = Mcts::new(config(20, 1), rollout()).select_move(&stalemate).unwrap_err();
    assert_eq!(err, SearchError::NoMovesAvailable);

    let err = Mcts::new(config(20, 1), rollout())
        .select_move_parallel(&stalemate)
        .unwrap_err();
    assert_eq!(err, SearchError::NoMovesAvailable);
}

#[test]
fn test_missing_king_is_reported() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w").unwrap();
    pos.clear_square("e8".parse().unwrap());
    let err = Mcts::new(config(20, 1), MaterialEvaluator).select_move(&pos).unwrap_err();
    assert!(matches!(err, SearchError::Rules(_)));
}

#[derive(Clone)]
struct Broken;

impl Evaluator for Broken {
    fn evaluate(&mut self, _position: &Position) -> Result<Evaluation, SearchError> {
        Ok(Evaluation::value_only(3.0))
    }
}

#[test]
fn test_out_of_range_value_is_an_evaluator_error() {
    let err = Mcts::new(config(5, 1), Broken)
        .select_move(&Position::default())
        .unwrap_err();
    assert!(matches!(err, SearchError::Evaluator(_)));
}

#[derive(Clone)]
struct AlwaysFirst;

impl MoveOracle for AlwaysFirst {
    fn best_move(&mut self, position: &Position) -> Option<Move> {
        position.legal_moves(position.side_to_move()).ok()?.into_iter().next()
    }
}

#[test]
fn test_oracle_priors_steer_puct() {
    let pos = Position::default();
    let oracle_move = AlwaysFirst.best_move(&pos).unwrap();
    let cfg = MctsConfig {
        selection: Selection::Puct { c_puct: 4.0 },
        ..config(200, 3)
    };

    let mut mcts = Mcts::new(cfg, OracleEvaluator::new(AlwaysFirst, 0.9));
    let mv = mcts.select_move(&pos).unwrap();
    assert_eq!(mv, oracle_move);

    let stats = mcts.root_stats().unwrap();
    assert_eq!(stats.children[0].mv, oracle_move);
}

#[test]
fn test_parallel_search_merges_workers() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/3R2K1 w").unwrap();
    let cfg = MctsConfig {
        threads: 4,
        ..config(800, 21)
    };
    let mv = Mcts::new(cfg, rollout()).select_move_parallel(&pos).unwrap();
    assert_eq!(mv.to_uci(), "d1d8");
}
