//! Time-budgeted game-tree search for Isolation-family grid games.
//!
//! The crate chooses moves for a two-player, perfect-information, zero-sum
//! grid game under a per-turn time budget. The board itself is an external
//! collaborator behind the [`GameState`] trait; on top of it sit two
//! interchangeable depth-limited tree searches (plain minimax and
//! alpha-beta pruning), a family of mobility-based leaf evaluators, and an
//! iterative-deepening controller with anytime semantics: interrupt it
//! whenever the clock demands and it answers with the best move from the
//! last fully completed depth.
//!
//! ```no_run
//! use isolation_agent::{Agent, Algorithm, Deadline, SearchConfig};
//! use isolation_agent::search::eval;
//! # fn demo<B: isolation_agent::GameState>(board: &B) {
//! let config = SearchConfig::default()
//!     .with_algorithm(Algorithm::AlphaBeta)
//!     .with_evaluator(eval::weighted_mobility);
//! let agent = Agent::new(config);
//! let mv = agent.choose_move(board, &Deadline::after_ms(150));
//! # let _ = mv;
//! # }
//! ```

pub mod game;
pub mod search;

pub use game::{GameState, Move, Player, Score, NO_MOVE};
pub use search::{
    Agent, Algorithm, Cancelled, Deadline, DepthInfo, EvalFn, SearchConfig, SearchInfoCallback,
    SearchMode, SearchResult,
};
