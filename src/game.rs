//! Game model: moves, players, and the board collaborator contract.
//!
//! The crate does not own a rules engine. Everything the search needs from
//! the game is expressed by the [`GameState`] trait, implemented by the
//! caller's board type. States are consumed read-only; applying a move
//! produces a fresh successor rather than mutating the original.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position value. Terminal states score `f64::INFINITY` (won) or
/// `f64::NEG_INFINITY` (lost); everything else is finite.
pub type Score = f64;

/// A board cell targeted by a move, as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

/// Sentinel meaning "no move available".
pub const NO_MOVE: Move = Move { row: -1, col: -1 };

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Move { row, col }
    }

    /// Whether this is the [`NO_MOVE`] sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.row == -1 && self.col == -1
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "(none)")
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// One of the two registered players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    One,
    Two,
}

impl Player {
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Contract with the external board/rules engine.
///
/// A state is an immutable snapshot: [`GameState::successor`] must leave
/// `self` untouched. Move order returned by `legal_moves_for` is the
/// tie-break order for the search and must be deterministic for a given
/// state.
pub trait GameState: Sized {
    /// Legal moves for `player`, in a deterministic order.
    fn legal_moves_for(&self, player: Player) -> Vec<Move>;

    /// The state after the active player plays `mv`.
    ///
    /// `mv` must come from [`GameState::legal_moves`]; anything else is a
    /// contract violation by the caller and may panic.
    fn successor(&self, mv: Move) -> Self;

    fn is_winner(&self, player: Player) -> bool;

    fn is_loser(&self, player: Player) -> bool;

    /// `+inf` if `player` has won here, `-inf` if lost, `0.0` otherwise.
    fn terminal_utility(&self, player: Player) -> Score;

    /// The player whose turn it is.
    fn active_player(&self) -> Player;

    fn inactive_player(&self) -> Player;

    /// Unoccupied cells remaining on the board.
    fn empty_cell_count(&self) -> usize;

    /// Board dimensions as (height, width).
    fn dimensions(&self) -> (usize, usize);

    /// Legal moves for the active player. Empty means this state is
    /// terminal: the active player has nowhere to go and loses.
    fn legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.active_player())
    }

    fn opponent_of(&self, player: Player) -> Player {
        player.opponent()
    }
}
