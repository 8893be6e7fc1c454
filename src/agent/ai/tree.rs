// Search tree for MCTS: owned children, statistics stored from White's side

use crate::game_repr::{Color, GameStatus, Move, Position, RulesError};

/// A node of the search tree.
///
/// `value_sum` accumulates values from White's point of view in `[-1, 1]`
/// regardless of who moves in `position`; readers flip the sign for Black.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) position: Position,
    pub(crate) status: GameStatus,
    /// Legal moves not yet materialized as children
    pub(crate) untried: Vec<Move>,
    pub(crate) children: Vec<Node>,
    /// Move that led here (None for the root)
    pub(crate) mv: Option<Move>,
    pub(crate) visits: u32,
    pub(crate) value_sum: f64,
    /// Prior probability of `mv` as seen from the parent
    pub(crate) prior: f64,
    /// Priors for this node's moves, filled in when the node is evaluated
    pub(crate) move_priors: Vec<(Move, f64)>,
}

impl Node {
    pub fn new(position: Position, mv: Option<Move>, prior: f64) -> Result<Self, RulesError> {
        // One generation pass serves both the status and the untried list
        let mut untried = position.legal_moves(position.side_to_move())?;
        let status = position.status_given_moves(!untried.is_empty())?;
        if status.is_terminal() {
            untried.clear();
        }

        Ok(Self {
            position,
            status,
            untried,
            children: Vec::new(),
            mv,
            visits: 0,
            value_sum: 0.0,
            prior,
            move_priors: Vec::new(),
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mv(&self) -> Option<Move> {
        self.mv
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }

    /// Number of legal moves in this node's position.
    pub fn branching(&self) -> usize {
        self.untried.len() + self.children.len()
    }

    /// Mean value from White's perspective, 0 for an unvisited node.
    pub fn mean_value(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.value_sum / self.visits as f64
        }
    }

    /// Mean value for `color` mapped to `[0, 1]`: 1 is a sure win for `color`.
    pub fn win_rate_for(&self, color: Color) -> f64 {
        (self.mean_value() * color.sign() + 1.0) / 2.0
    }

    /// Exact value of a terminal node from White's perspective.
    pub(crate) fn terminal_value(&self) -> Option<f64> {
        self.status.outcome_for(Color::White).map(|score| score * 2.0 - 1.0)
    }

    /// Prior the parent's evaluator assigned to `mv`, or a uniform share.
    pub(crate) fn prior_of(&self, mv: Move) -> f64 {
        self.move_priors
            .iter()
            .find(|(m, _)| *m == mv)
            .map(|&(_, p)| p)
            .unwrap_or_else(|| 1.0 / self.branching().max(1) as f64)
    }

    /// Index of the most visited child; the first one wins ties.
    pub fn most_visited_child(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (idx, child) in self.children.iter().enumerate() {
            if best.map_or(true, |(_, visits)| child.visits > visits) {
                best = Some((idx, child.visits));
            }
        }
        best.map(|(idx, _)| idx)
    }

    pub(crate) fn node_at_path_mut(&mut self, path: &[usize]) -> &mut Node {
        let mut node = self;
        for &idx in path {
            node = &mut node.children[idx];
        }
        node
    }
}

/// Owner of the root node. Kept between searches so that work done on a
/// subtree survives when play moves on.
#[derive(Debug, Clone)]
pub struct SearchTree {
    root: Node,
}

impl SearchTree {
    pub fn new(position: Position) -> Result<Self, RulesError> {
        Ok(Self {
            root: Node::new(position, None, 1.0)?,
        })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Re-roots the tree on the child reached by `mv`, keeping its subtree.
    /// When `mv` was never expanded a fresh root is built for the new
    /// position; a move that is not legal here is rejected.
    pub fn advance(&mut self, mv: Move) -> Result<(), RulesError> {
        if let Some(idx) = self.root.children.iter().position(|c| c.mv == Some(mv)) {
            let mut child = self.root.children.swap_remove(idx);
            child.mv = None;
            child.prior = 1.0;
            self.root = child;
            return Ok(());
        }

        let next = self.root.position.apply_move(mv)?;
        self.root = Node::new(next, None, 1.0)?;
        Ok(())
    }

    /// Points the tree at `position`, reusing the root, a child or a
    /// grandchild that holds it; otherwise starts over.
    pub fn reroot(&mut self, position: &Position) -> Result<(), RulesError> {
        if self.root.position == *position {
            return Ok(());
        }

        let mut found: Option<(usize, Option<usize>)> = None;
        'outer: for (i, child) in self.root.children.iter().enumerate() {
            if child.position == *position {
                found = Some((i, None));
                break;
            }
            for (j, grandchild) in child.children.iter().enumerate() {
                if grandchild.position == *position {
                    found = Some((i, Some(j)));
                    break 'outer;
                }
            }
        }

        let mut node = match found {
            Some((i, None)) => self.root.children.swap_remove(i),
            Some((i, Some(j))) => self.root.children.swap_remove(i).children.swap_remove(j),
            None => Node::new(*position, None, 1.0)?,
        };
        node.mv = None;
        node.prior = 1.0;
        self.root = node;
        Ok(())
    }
}
