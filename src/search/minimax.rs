//! Plain depth-limited minimax.

use crate::game::{GameState, NO_MOVE};

use super::{Cancelled, SearchContext, SearchResult};

impl<G: GameState> SearchContext<'_, G> {
    /// Depth-limited minimax over the legal successors of `state`.
    ///
    /// Depth is decremented before the cutoff test, so `depth == 1` on entry
    /// expands exactly one ply and scores the successors with the evaluator.
    /// Leaves are scored from the active player's perspective on maximizing
    /// layers and the inactive player's on minimizing layers, mirroring
    /// whose turn becomes active in the successor. Ties break toward the
    /// first move in generation order.
    pub(crate) fn minimax(
        &mut self,
        state: &G,
        depth: u32,
        maximizing: bool,
    ) -> Result<SearchResult, Cancelled> {
        self.check_deadline()?;
        self.nodes += 1;

        let moves = state.legal_moves();
        if moves.is_empty() {
            // True terminal node, whatever depth remains.
            return Ok(SearchResult::terminal(
                state.terminal_utility(state.active_player()),
            ));
        }

        let depth = depth.saturating_sub(1);

        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = NO_MOVE;

        if depth == 0 {
            let perspective = if maximizing {
                state.active_player()
            } else {
                state.inactive_player()
            };
            for &mv in &moves {
                let child = state.successor(mv);
                let score = (self.evaluator)(&child, perspective);
                let better = if maximizing {
                    score > best_score
                } else {
                    score < best_score
                };
                if best_move.is_none() || better {
                    best_score = score;
                    best_move = mv;
                }
            }
        } else {
            for &mv in &moves {
                let child = state.successor(mv);
                let result = self.minimax(&child, depth, !maximizing)?;
                let better = if maximizing {
                    result.score > best_score
                } else {
                    result.score < best_score
                };
                if best_move.is_none() || better {
                    // Propagate the child's score but this level's own
                    // candidate move.
                    best_score = result.score;
                    best_move = mv;
                }
            }
        }

        Ok(SearchResult {
            score: best_score,
            best_move,
        })
    }
}
