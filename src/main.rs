use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use chess_mcts::agent::ai::{
    Evaluator, MaterialEvaluator, Mcts, MctsConfig, RandomRollout, Selection,
};
use chess_mcts::agent::{play_game, MctsPlayer, Player, RandomPlayer};
use chess_mcts::game_repr::{Move, Position, START_FEN};

/// Chess rules engine with a Monte Carlo Tree Search player
#[derive(Parser)]
#[command(name = "chess_mcts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Let two engines play each other and print the moves
    Selfplay {
        #[command(flatten)]
        search: SearchArgs,
        /// Starting position
        #[arg(long, default_value = START_FEN)]
        fen: String,
        /// Stop and score a draw after this many plies
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        /// Black plays random moves instead of searching
        #[arg(long)]
        random_black: bool,
    },
    /// Search one position and print the chosen move with root statistics
    Bestmove {
        #[command(flatten)]
        search: SearchArgs,
        #[arg(long, default_value = START_FEN)]
        fen: String,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        #[arg(long, default_value = START_FEN)]
        fen: String,
        #[arg(long, default_value_t = 3)]
        depth: u32,
        /// Print the count below each root move
        #[arg(long)]
        divide: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum EvaluatorKind {
    Rollout,
    Material,
}

#[derive(clap::Args)]
struct SearchArgs {
    /// MCTS iterations per move
    #[arg(long, default_value_t = 1000)]
    iterations: u32,
    #[arg(long)]
    seed: Option<u64>,
    /// Root-parallel workers, 0 for all cores
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Use PUCT selection with this constant instead of UCB1
    #[arg(long)]
    puct: Option<f64>,
    #[arg(long, value_enum, default_value_t = EvaluatorKind::Rollout)]
    evaluator: EvaluatorKind,
    /// Rollout length cap
    #[arg(long, default_value_t = 200)]
    rollout_plies: usize,
}

impl SearchArgs {
    fn config(&self, seed_offset: u64) -> MctsConfig {
        MctsConfig {
            iterations: self.iterations,
            selection: match self.puct {
                Some(c_puct) => Selection::Puct { c_puct },
                None => Selection::Ucb1,
            },
            seed: self.seed.map(|s| s.wrapping_add(seed_offset)),
            threads: self.threads,
            ..MctsConfig::default()
        }
    }

    fn player(&self, name: &str, seed_offset: u64) -> Box<dyn Player> {
        let config = self.config(seed_offset);
        match self.evaluator {
            EvaluatorKind::Rollout => Box::new(MctsPlayer::new(
                config,
                RandomRollout::default().with_max_plies(self.rollout_plies),
                name,
            )),
            EvaluatorKind::Material => Box::new(MctsPlayer::new(config, MaterialEvaluator, name)),
        }
    }
}

fn parse_position(fen: &str) -> Result<Position> {
    Position::from_fen(fen).with_context(|| format!("cannot parse FEN {fen:?}"))
}

fn selfplay(search: &SearchArgs, fen: &str, max_plies: usize, random_black: bool) -> Result<()> {
    let start = parse_position(fen)?;
    let mut white = search.player("MCTS white", 0);
    let mut black: Box<dyn Player> = if random_black {
        Box::new(RandomPlayer::new(search.seed.map(|s| s.wrapping_add(1))))
    } else {
        search.player("MCTS black", 1)
    };

    let record = play_game(white.as_mut(), black.as_mut(), start, max_plies)?;

    let moves: Vec<String> = record.history.moves().iter().map(|m| m.to_uci()).collect();
    println!("{}", moves.join(" "));
    println!("{}", record.history.current());
    println!("result: {:?} ({:?})", record.result, record.termination);
    Ok(())
}

fn bestmove(search: &SearchArgs, fen: &str) -> Result<()> {
    let position = parse_position(fen)?;
    let config = search.config(0);
    info!("searching {} with {} iterations", position.to_fen(), config.iterations);

    let mv = match search.evaluator {
        EvaluatorKind::Rollout => {
            let evaluator = RandomRollout::default().with_max_plies(search.rollout_plies);
            search_and_report(config, evaluator, &position)?
        }
        EvaluatorKind::Material => search_and_report(config, MaterialEvaluator, &position)?,
    };
    println!("bestmove {mv}");
    Ok(())
}

fn search_and_report<E>(
    config: MctsConfig,
    evaluator: E,
    position: &Position,
) -> Result<Move>
where
    E: Evaluator + Clone + Send + Sync,
{
    let mut mcts = Mcts::new(config, evaluator);
    if config.threads != 1 {
        return Ok(mcts.select_move_parallel(position)?);
    }

    let mv = mcts.select_move(position)?;
    if let Some(stats) = mcts.root_stats() {
        for child in stats.children.iter().take(8) {
            println!(
                "{:>6} visits {:>6} win {:.3} prior {:.3}",
                child.mv.to_uci(),
                child.visits,
                child.win_rate,
                child.prior
            );
        }
    }
    Ok(mv)
}

fn perft(fen: &str, depth: u32, divide: bool) -> Result<()> {
    if depth == 0 {
        bail!("perft depth must be at least 1");
    }
    let position = parse_position(fen)?;

    if divide {
        let mut total = 0;
        for (mv, nodes) in position.divide(depth)? {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        println!("\nNodes searched: {total}");
    } else {
        let start = std::time::Instant::now();
        let nodes = position.perft(depth)?;
        let elapsed = start.elapsed();
        println!(
            "perft({depth}) = {nodes} in {:.3}s ({:.0} nps)",
            elapsed.as_secs_f64(),
            nodes as f64 / elapsed.as_secs_f64().max(1e-9)
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Selfplay {
            search,
            fen,
            max_plies,
            random_black,
        } => selfplay(&search, &fen, max_plies, random_black),
        Commands::Bestmove { search, fen } => bestmove(&search, &fen),
        Commands::Perft { fen, depth, divide } => perft(&fen, depth, divide),
    }
}
