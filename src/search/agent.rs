//! Deadline-aware controller: opening rule, iterative deepening, and
//! anytime fallback on cancellation.

use std::time::Instant;

use log::{debug, trace};

use crate::game::{GameState, Move, NO_MOVE};

use super::{Cancelled, Deadline, DepthInfo, SearchConfig, SearchContext, SearchMode};

/// Move-choosing agent for one side of the game.
///
/// Construction-time configuration is immutable; every
/// [`choose_move`](Agent::choose_move) call is independent and nothing
/// persists across turns.
pub struct Agent<G: GameState> {
    config: SearchConfig<G>,
}

impl<G: GameState> Default for Agent<G> {
    fn default() -> Self {
        Agent::new(SearchConfig::default())
    }
}

impl<G: GameState> Agent<G> {
    #[must_use]
    pub fn new(config: SearchConfig<G>) -> Self {
        Agent { config }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig<G> {
        &self.config
    }

    /// Choose a move for the active player before `deadline` expires.
    ///
    /// Returns [`NO_MOVE`] if and only if the active player has no legal
    /// move. A deadline hit mid-search is not an error: the best move from
    /// the last fully completed depth is returned instead (the anytime
    /// guarantee), so with a sane safety margin this always returns in
    /// time.
    pub fn choose_move(&self, state: &G, deadline: &Deadline) -> Move {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return NO_MOVE;
        }

        // Cold start: take the center without searching.
        let (height, width) = state.dimensions();
        if state.empty_cell_count() == height * width {
            return Move::new((height / 2) as i32, (width / 2) as i32);
        }

        // Forced reply: searching would only burn clock.
        if moves.len() == 1 {
            return moves[0];
        }

        let started = Instant::now();
        let mut ctx = SearchContext::new(&self.config, deadline);
        let mut best_move = NO_MOVE;

        match self.config.mode {
            SearchMode::FixedDepth(depth) => {
                match ctx.run(state, self.config.algorithm, depth) {
                    Ok(result) => {
                        best_move = result.best_move;
                        self.report(&ctx, depth, result.score, best_move, started);
                    }
                    Err(Cancelled) => {
                        debug!("fixed-depth search cancelled at depth {depth}");
                    }
                }
            }
            SearchMode::IterativeDeepening => {
                // Depth beyond the empty-cell count cannot reach new
                // states; the tree is fully explored by then.
                let max_depth = state.empty_cell_count() as u32;
                for depth in 1..=max_depth {
                    match ctx.run(state, self.config.algorithm, depth) {
                        Ok(result) => {
                            best_move = result.best_move;
                            trace!(
                                "depth {depth} complete: best {} score {}",
                                result.best_move,
                                result.score
                            );
                            self.report(&ctx, depth, result.score, best_move, started);
                        }
                        Err(Cancelled) => {
                            // Discard the interrupted depth; the previous
                            // completed depth's move stands.
                            debug!(
                                "deadline reached at depth {depth}, keeping result of depth {}",
                                depth - 1
                            );
                            break;
                        }
                    }
                }
            }
        }

        best_move
    }

    fn report(
        &self,
        ctx: &SearchContext<'_, G>,
        depth: u32,
        score: f64,
        best_move: Move,
        started: Instant,
    ) {
        if let Some(cb) = &self.config.info_callback {
            cb(&DepthInfo {
                depth,
                score,
                best_move,
                nodes: ctx.nodes,
                time_ms: started.elapsed().as_secs_f64() * 1000.0,
            });
        }
    }
}
