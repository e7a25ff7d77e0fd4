//! Minimax with alpha-beta pruning.

use crate::game::{GameState, NO_MOVE};

use super::{Cancelled, SearchContext, SearchResult};

impl<G: GameState> SearchContext<'_, G> {
    /// Alpha-beta-pruned minimax. Call with alpha/beta open
    /// (`-inf`/`+inf`) at the root.
    ///
    /// At depth 0 the *current* state is scored: from the active player's
    /// perspective on maximizing layers, the inactive player's on minimizing
    /// layers. That keeps every leaf scored from the root player's point of
    /// view, so root scores agree with [`minimax`](Self::minimax) at the
    /// same nominal depth. Ties break toward the last move seen
    /// (update-on-equal), the mirror of minimax's first-wins rule.
    pub(crate) fn alphabeta(
        &mut self,
        state: &G,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<SearchResult, Cancelled> {
        self.check_deadline()?;
        self.nodes += 1;

        // Horizon nodes go through the evaluator even when terminal: the
        // evaluator scores a decided game as +/-inf relative to the chosen
        // perspective, which is exactly how minimax scores its one-ply
        // lookahead at the cutoff.
        if depth == 0 {
            let perspective = if maximizing {
                state.active_player()
            } else {
                state.inactive_player()
            };
            return Ok(SearchResult {
                score: (self.evaluator)(state, perspective),
                best_move: NO_MOVE,
            });
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult::terminal(
                state.terminal_utility(state.active_player()),
            ));
        }

        let mut best_move = NO_MOVE;

        if maximizing {
            let mut best_score = f64::NEG_INFINITY;
            for &mv in &moves {
                let child = state.successor(mv);
                let result = self.alphabeta(&child, depth - 1, alpha, beta, false)?;
                if result.score >= best_score {
                    best_score = result.score;
                    best_move = mv;
                }
                alpha = alpha.max(best_score);
                if beta <= alpha {
                    // Remaining siblings cannot affect the root decision.
                    break;
                }
            }
            Ok(SearchResult {
                score: best_score,
                best_move,
            })
        } else {
            let mut best_score = f64::INFINITY;
            for &mv in &moves {
                let child = state.successor(mv);
                let result = self.alphabeta(&child, depth - 1, alpha, beta, true)?;
                if result.score <= best_score {
                    best_score = result.score;
                    best_move = mv;
                }
                beta = beta.min(best_score);
                if beta <= alpha {
                    break;
                }
            }
            Ok(SearchResult {
                score: best_score,
                best_move,
            })
        }
    }
}
