//! Search module: depth-limited minimax / alpha-beta with iterative
//! deepening under a time budget.
//!
//! Features:
//! - Plain minimax and alpha-beta pruning, interchangeable per config
//! - Iterative deepening driver with anytime semantics (the last fully
//!   completed depth always has a usable answer)
//! - Cooperative deadline cancellation checked at every tree node
//! - Pluggable leaf evaluators (see [`eval`])

mod agent;
mod deadline;
pub mod eval;

mod alphabeta;
mod minimax;

use std::fmt;
use std::sync::Arc;

use crate::game::{GameState, Move, Player, Score, NO_MOVE};

pub use agent::Agent;
pub use deadline::Deadline;

/// Outcome of one fixed-depth search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Root score of the chosen branch.
    pub score: Score,
    /// The chosen root move; [`NO_MOVE`] when the position is terminal.
    pub best_move: Move,
}

impl SearchResult {
    #[must_use]
    pub(crate) const fn terminal(score: Score) -> Self {
        SearchResult {
            score,
            best_move: NO_MOVE,
        }
    }
}

/// Signal that the turn clock ran below the safety margin mid-search.
///
/// This is the only way a search call fails. It is raised from arbitrary
/// recursion depth, propagated with `?`, and caught once at the controller
/// boundary where it triggers fallback to the last completed depth. It is
/// deliberately a dedicated unit type: deadline expiry must never be
/// conflated with a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search cancelled: turn deadline reached")
    }
}

impl std::error::Error for Cancelled {}

/// Which tree-search algorithm the agent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

/// Fixed-depth search vs. deepening until the clock runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Search once at exactly this depth (plies). Must be positive.
    FixedDepth(u32),
    /// Search at depth 1, 2, 3, ... up to the number of empty cells.
    IterativeDeepening,
}

/// Leaf evaluator: scores `state` from `player`'s point of view.
/// Must be pure; see [`eval`] for the stock implementations.
pub type EvalFn<G> = fn(&G, Player) -> Score;

/// Progress report for one fully completed deepening iteration.
#[derive(Debug, Clone)]
pub struct DepthInfo {
    pub depth: u32,
    pub score: Score,
    pub best_move: Move,
    /// Tree nodes visited so far this turn, all depths included.
    pub nodes: u64,
    pub time_ms: f64,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&DepthInfo) + Send + Sync>;

/// Configuration for an [`Agent`], immutable after construction.
pub struct SearchConfig<G: GameState> {
    pub mode: SearchMode,
    pub algorithm: Algorithm,
    pub evaluator: EvalFn<G>,
    /// Minimum milliseconds of slack required before a recursive call is
    /// considered safe to start. Non-negative.
    pub margin_ms: f64,
    /// Optional sink for per-depth progress reports.
    pub info_callback: Option<SearchInfoCallback>,
}

impl<G: GameState> Default for SearchConfig<G> {
    fn default() -> Self {
        SearchConfig {
            mode: SearchMode::IterativeDeepening,
            algorithm: Algorithm::Minimax,
            evaluator: eval::opponent_mobility::<G>,
            margin_ms: 10.0,
            info_callback: None,
        }
    }
}

impl<G: GameState> Clone for SearchConfig<G> {
    fn clone(&self) -> Self {
        SearchConfig {
            mode: self.mode,
            algorithm: self.algorithm,
            evaluator: self.evaluator,
            margin_ms: self.margin_ms,
            info_callback: self.info_callback.clone(),
        }
    }
}

impl<G: GameState> SearchConfig<G> {
    /// Fixed-depth config with the defaults otherwise.
    #[must_use]
    pub fn fixed_depth(depth: u32) -> Self {
        SearchConfig {
            mode: SearchMode::FixedDepth(depth),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_evaluator(mut self, evaluator: EvalFn<G>) -> Self {
        self.evaluator = evaluator;
        self
    }

    #[must_use]
    pub fn with_margin_ms(mut self, margin_ms: f64) -> Self {
        self.margin_ms = margin_ms;
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

/// Search context for a single turn: the lent deadline plus the pieces of
/// config the recursion needs, and running node statistics.
pub(crate) struct SearchContext<'a, G: GameState> {
    pub deadline: &'a Deadline,
    pub margin_ms: f64,
    pub evaluator: EvalFn<G>,
    pub nodes: u64,
}

impl<'a, G: GameState> SearchContext<'a, G> {
    pub(crate) fn new(config: &SearchConfig<G>, deadline: &'a Deadline) -> Self {
        SearchContext {
            deadline,
            margin_ms: config.margin_ms,
            evaluator: config.evaluator,
            nodes: 0,
        }
    }

    /// Cancellation check run at the entry of every tree node.
    #[inline]
    pub(crate) fn check_deadline(&self) -> Result<(), Cancelled> {
        if self.deadline.remaining_ms() < self.margin_ms {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// One search at `depth` plies with the configured algorithm, alpha and
    /// beta open at the top level.
    pub(crate) fn run(
        &mut self,
        state: &G,
        algorithm: Algorithm,
        depth: u32,
    ) -> Result<SearchResult, Cancelled> {
        match algorithm {
            Algorithm::Minimax => self.minimax(state, depth, true),
            Algorithm::AlphaBeta => {
                self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }
}

/// Run one fixed-depth search with the configured algorithm and evaluator.
///
/// This is the low-level entry point; [`Agent::choose_move`] layers the
/// opening rule, iterative deepening, and deadline fallback on top of it.
/// Errors with [`Cancelled`] if the deadline margin is hit mid-tree.
pub fn search<G: GameState>(
    state: &G,
    config: &SearchConfig<G>,
    deadline: &Deadline,
    depth: u32,
) -> Result<SearchResult, Cancelled> {
    let mut ctx = SearchContext::new(config, deadline);
    ctx.run(state, config.algorithm, depth)
}
