// Monte Carlo Tree Search over the rules engine with a pluggable leaf evaluator

use std::collections::HashMap;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::evaluator::Evaluator;
use super::tree::{Node, SearchTree};
use super::SearchError;
use crate::game_repr::{Move, Position};

/// UCB1 exploration constant, sqrt(2)
pub const EXPLORATION_CONSTANT: f64 = std::f64::consts::SQRT_2;
pub const DEFAULT_C_PUCT: f64 = 1.5;

/// How children are scored during selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// `win_rate + c * sqrt(ln(N) / n)`
    Ucb1,
    /// `win_rate + c_puct * prior * sqrt(N) / (1 + n)`, for evaluators that
    /// supply move priors
    Puct { c_puct: f64 },
}

/// Configuration for the MCTS algorithm
#[derive(Debug, Clone, Copy)]
pub struct MctsConfig {
    /// Number of MCTS iterations per move
    pub iterations: u32,
    /// Exploration constant for UCB1
    pub exploration: f64,
    pub selection: Selection,
    /// Seed for move picking and for the evaluator; `None` draws from entropy
    pub seed: Option<u64>,
    /// Worker count for root-parallel search; 0 uses every rayon thread
    pub threads: usize,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            exploration: EXPLORATION_CONSTANT,
            selection: Selection::Ucb1,
            seed: None,
            threads: 1,
        }
    }
}

/// Visit statistics of one root move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildStats {
    pub mv: Move,
    pub visits: u32,
    /// Mean result for the side to move at the root, in `[0, 1]`
    pub win_rate: f64,
    pub prior: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    pub root_visits: u32,
    pub children: Vec<ChildStats>,
}

pub struct Mcts<E> {
    config: MctsConfig,
    evaluator: E,
    rng: StdRng,
    tree: Option<SearchTree>,
}

impl<E: Evaluator> Mcts<E> {
    pub fn new(config: MctsConfig, mut evaluator: E) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                evaluator.reseed(seed);
                StdRng::seed_from_u64(seed)
            }
            None => {
                // Fresh stream per engine, so unseeded parallel workers diverge
                let mut rng = StdRng::from_entropy();
                evaluator.reseed(rng.gen());
                rng
            }
        };
        Self {
            config,
            evaluator,
            rng,
            tree: None,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Tree left behind by the last [`Mcts::select_move`] call.
    pub fn tree(&self) -> Option<&SearchTree> {
        self.tree.as_ref()
    }

    /// Runs the configured number of iterations from `position` and returns
    /// the most visited root move. A tree from an earlier call is reused when
    /// `position` is its root or one or two plies below it.
    pub fn select_move(&mut self, position: &Position) -> Result<Move, SearchError> {
        let mut tree = match self.tree.take() {
            Some(mut tree) => {
                tree.reroot(position)?;
                tree
            }
            None => SearchTree::new(*position)?,
        };

        if tree.root().is_terminal() {
            self.tree = Some(tree);
            return Err(SearchError::NoMovesAvailable);
        }

        let result = self.search(&mut tree);
        let best = result.and_then(|_| self.robust_child(tree.root()));
        self.tree = Some(tree);
        let best = best?;

        if let Some(stats) = self.root_stats() {
            debug!(
                "mcts picked {} after {} visits over {} children",
                best,
                stats.root_visits,
                stats.children.len()
            );
        }
        Ok(best)
    }

    /// Runs `config.iterations` iterations on `tree`.
    pub fn search(&mut self, tree: &mut SearchTree) -> Result<(), SearchError> {
        for _ in 0..self.config.iterations {
            self.iteration(tree.root_mut())?;
        }
        Ok(())
    }

    /// Root statistics of the last search, most visited first.
    pub fn root_stats(&self) -> Option<SearchStats> {
        self.tree.as_ref().map(|tree| stats_of(tree.root()))
    }

    /// Single MCTS iteration (selection, expansion, evaluation, backpropagation)
    fn iteration(&mut self, root: &mut Node) -> Result<(), SearchError> {
        let path = self.select_and_expand(root)?;
        let leaf = root.node_at_path_mut(&path);

        let value = match leaf.terminal_value() {
            Some(value) => value,
            None => {
                let eval = self.evaluator.evaluate(&leaf.position)?;
                if !(-1.0..=1.0).contains(&eval.value) {
                    return Err(SearchError::Evaluator(format!(
                        "value {} outside [-1, 1]",
                        eval.value
                    )));
                }
                leaf.move_priors = eval.priors;
                // Evaluator values are for the side to move; store White's view
                eval.value * leaf.position.side_to_move().sign()
            }
        };

        trace!("iteration: depth {} value {:+.3}", path.len(), value);
        backpropagate(root, &path, value);
        Ok(())
    }

    /// Descends from `root` to the node to evaluate, expanding one child on
    /// the way when a partially expanded node is reached. Returns the path of
    /// child indices.
    fn select_and_expand(&mut self, root: &mut Node) -> Result<Vec<usize>, SearchError> {
        let mut path = Vec::new();
        let mut node = root;

        loop {
            // Unvisited nodes are evaluated before they grow children
            if node.is_terminal() || node.visits == 0 {
                break;
            }

            if !node.is_fully_expanded() {
                let idx = self.expand(node)?;
                path.push(idx);
                break;
            }

            let idx = self.best_child(node);
            path.push(idx);
            node = &mut node.children[idx];
        }

        Ok(path)
    }

    /// Pops one untried move, highest prior first or at random when the node
    /// has no priors, and adds the resulting child.
    fn expand(&mut self, node: &mut Node) -> Result<usize, SearchError> {
        let pick = if node.move_priors.is_empty() {
            self.rng.gen_range(0..node.untried.len())
        } else {
            let mut best = 0;
            for (i, &mv) in node.untried.iter().enumerate() {
                if node.prior_of(mv) > node.prior_of(node.untried[best]) {
                    best = i;
                }
            }
            best
        };

        let prior = node.prior_of(node.untried[pick]);
        let mv = node.untried.swap_remove(pick);
        let child = Node::new(node.position.play(mv), Some(mv), prior)?;
        node.children.push(child);
        Ok(node.children.len() - 1)
    }

    /// Child maximizing the configured selection score from the point of view
    /// of the side to move at `node`.
    fn best_child(&self, node: &Node) -> usize {
        let mover = node.position.side_to_move();
        let parent_visits = node.visits as f64;

        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (idx, child) in node.children.iter().enumerate() {
            let exploit = child.win_rate_for(mover);
            let visits = child.visits as f64;
            let explore = match self.config.selection {
                Selection::Ucb1 => {
                    self.config.exploration * (parent_visits.ln() / visits).sqrt()
                }
                Selection::Puct { c_puct } => {
                    c_puct * child.prior * parent_visits.sqrt() / (1.0 + visits)
                }
            };
            let score = exploit + explore;
            if score > best_score {
                best_score = score;
                best_idx = idx;
            }
        }
        best_idx
    }

    /// Most visited child; falls back to a seeded random untried move when
    /// the budget was too small to expand any.
    fn robust_child(&mut self, root: &Node) -> Result<Move, SearchError> {
        if let Some(mv) = root.most_visited_child().and_then(|idx| root.children[idx].mv) {
            return Ok(mv);
        }
        root.untried
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoMovesAvailable)
    }
}

impl<E: Evaluator + Clone + Send + Sync> Mcts<E> {
    /// Root-parallel search: independent trees on `config.threads` rayon
    /// workers, each seeded with `seed + worker index`, whose root visit
    /// counts are summed before picking the most visited move.
    pub fn select_move_parallel(&self, position: &Position) -> Result<Move, SearchError> {
        let legal = position.legal_moves(position.side_to_move())?;
        if position.game_status()?.is_terminal() || legal.is_empty() {
            return Err(SearchError::NoMovesAvailable);
        }
        if legal.len() == 1 {
            return Ok(legal[0]);
        }

        let threads = match self.config.threads {
            0 => rayon::current_num_threads(),
            n => n,
        };
        let per_thread = self.config.iterations / threads as u32;
        let extra = self.config.iterations % threads as u32;

        let runs: Vec<Result<SearchStats, SearchError>> = (0..threads)
            .into_par_iter()
            .map(|worker| {
                let config = MctsConfig {
                    iterations: per_thread + if worker == 0 { extra } else { 0 },
                    seed: self.config.seed.map(|s| s.wrapping_add(worker as u64)),
                    threads: 1,
                    ..self.config
                };
                let mut mcts = Mcts::new(config, self.evaluator.clone());
                let mut tree = SearchTree::new(*position)?;
                mcts.search(&mut tree)?;
                Ok(stats_of(tree.root()))
            })
            .collect();

        let mut visits: HashMap<Move, u32> = HashMap::new();
        for run in runs {
            for child in run?.children {
                *visits.entry(child.mv).or_insert(0) += child.visits;
            }
        }

        // Walk the legal list so ties resolve the same way on every run
        let mut best = legal[0];
        let mut best_visits = 0;
        for mv in legal {
            let v = visits.get(&mv).copied().unwrap_or(0);
            if v > best_visits {
                best = mv;
                best_visits = v;
            }
        }
        debug!("parallel mcts over {threads} workers picked {best} ({best_visits} visits)");
        Ok(best)
    }
}

fn backpropagate(root: &mut Node, path: &[usize], value: f64) {
    root.visits += 1;
    root.value_sum += value;

    let mut node = root;
    for &idx in path {
        node = &mut node.children[idx];
        node.visits += 1;
        node.value_sum += value;
    }
}


fn stats_of(root: &Node) -> SearchStats {
    let mover = root.position.side_to_move();
    let mut children: Vec<ChildStats> = root
        .children
        .iter()
        .filter_map(|child| {
            Some(ChildStats {
                mv: child.mv?,
                visits: child.visits,
                win_rate: child.win_rate_for(mover),
                prior: child.prior,
            })
        })
        .collect();
    children.sort_by(|a, b| b.visits.cmp(&a.visits));
    SearchStats {
        root_visits: root.visits,
        children,
    }
}
