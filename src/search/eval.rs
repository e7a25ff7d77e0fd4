//! Static heuristic evaluators.
//!
//! Each evaluator is a pure `fn(&G, Player) -> Score` scoring a non-terminal
//! leaf from `player`'s point of view, derived from the mobility of both
//! sides. They are interchangeable: the agent is configured with exactly one
//! (see [`SearchConfig::with_evaluator`](crate::SearchConfig::with_evaluator))
//! and uses it for every leaf. Callers can supply their own function of the
//! same shape.
//!
//! All four return `-inf` once `player` has lost and `+inf` once `player`
//! has won, so terminal positions dominate any finite heuristic score.

use crate::game::{GameState, Player, Score};

fn mobility<G: GameState>(state: &G, player: Player) -> (f64, f64) {
    let own = state.legal_moves_for(player).len();
    let opp = state.legal_moves_for(state.opponent_of(player)).len();
    (own as f64, opp as f64)
}

/// `(own - opp) / (own + opp)`: favors cramped positions where a relative
/// mobility edge decides the game quickly.
pub fn mobility_ratio<G: GameState>(state: &G, player: Player) -> Score {
    if state.is_loser(player) {
        return f64::NEG_INFINITY;
    }
    if state.is_winner(player) {
        return f64::INFINITY;
    }

    let (own, opp) = mobility(state, player);
    // Both sides boxed in but nobody flagged terminal yet; the ratio would
    // be 0/0 here.
    if own + opp == 0.0 {
        return 0.0;
    }
    (own - opp) / (own + opp)
}

/// `(own - opp) * (own + opp)`: favors open positions, scaling the mobility
/// edge by how much room is left.
pub fn mobility_product<G: GameState>(state: &G, player: Player) -> Score {
    if state.is_loser(player) {
        return f64::NEG_INFINITY;
    }
    if state.is_winner(player) {
        return f64::INFINITY;
    }

    let (own, opp) = mobility(state, player);
    (own - opp) * (own + opp)
}

/// `own - 4 * opp`: strongly penalizes opponent mobility.
pub fn weighted_mobility<G: GameState>(state: &G, player: Player) -> Score {
    if state.is_loser(player) {
        return f64::NEG_INFINITY;
    }
    if state.is_winner(player) {
        return f64::INFINITY;
    }

    let (own, opp) = mobility(state, player);
    own - 4.0 * opp
}

/// `-opp`: pure opponent suppression. The default evaluator.
pub fn opponent_mobility<G: GameState>(state: &G, player: Player) -> Score {
    if state.is_loser(player) {
        return f64::NEG_INFINITY;
    }
    if state.is_winner(player) {
        return f64::INFINITY;
    }

    let (_, opp) = mobility(state, player);
    -opp
}
