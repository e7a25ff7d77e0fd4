//! Reference Isolation board used by the integration tests and benches.
//!
//! Rules: each player occupies one cell. An unplaced player may enter any
//! open cell; a placed player moves like a chess knight. Every cell ever
//! occupied stays blocked. The active player loses when they cannot move.

// Shared between several test binaries and the benches; not every consumer
// uses every helper.
#![allow(dead_code)]

use isolation_agent::{GameState, Move, Player, Score};

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Clone, Debug)]
pub struct IsolationBoard {
    height: usize,
    width: usize,
    blocked: Vec<bool>,
    positions: [Option<Move>; 2],
    active: Player,
}

impl IsolationBoard {
    pub fn new(height: usize, width: usize) -> Self {
        IsolationBoard {
            height,
            width,
            blocked: vec![false; height * width],
            positions: [None, None],
            active: Player::One,
        }
    }

    /// Curated position: player cells and `extra_blocked` are marked
    /// blocked, `active` is to move. `None` means the player is unplaced.
    pub fn from_parts(
        height: usize,
        width: usize,
        p1: Option<Move>,
        p2: Option<Move>,
        extra_blocked: &[(i32, i32)],
        active: Player,
    ) -> Self {
        let mut board = IsolationBoard::new(height, width);
        board.positions = [p1, p2];
        board.active = active;
        for pos in [p1, p2].into_iter().flatten() {
            let idx = board.index(pos.row, pos.col);
            board.blocked[idx] = true;
        }
        for &(row, col) in extra_blocked {
            let idx = board.index(row, col);
            board.blocked[idx] = true;
        }
        board
    }

    fn index(&self, row: i32, col: i32) -> usize {
        debug_assert!(self.in_bounds(row, col));
        row as usize * self.width + col as usize
    }

    fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    fn is_open(&self, row: i32, col: i32) -> bool {
        self.in_bounds(row, col) && !self.blocked[self.index(row, col)]
    }

    fn slot(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl GameState for IsolationBoard {
    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        match self.positions[Self::slot(player)] {
            None => {
                let mut moves = Vec::with_capacity(self.empty_cell_count());
                for row in 0..self.height as i32 {
                    for col in 0..self.width as i32 {
                        if self.is_open(row, col) {
                            moves.push(Move::new(row, col));
                        }
                    }
                }
                moves
            }
            Some(pos) => KNIGHT_OFFSETS
                .iter()
                .map(|&(dr, dc)| Move::new(pos.row + dr, pos.col + dc))
                .filter(|mv| self.is_open(mv.row, mv.col))
                .collect(),
        }
    }

    fn successor(&self, mv: Move) -> Self {
        assert!(
            self.legal_moves().contains(&mv),
            "illegal move {mv} for {:?}",
            self.active
        );
        let mut next = self.clone();
        let idx = next.index(mv.row, mv.col);
        next.blocked[idx] = true;
        next.positions[Self::slot(self.active)] = Some(mv);
        next.active = self.active.opponent();
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && self.legal_moves().is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves().is_empty()
    }

    fn terminal_utility(&self, player: Player) -> Score {
        if self.is_winner(player) {
            f64::INFINITY
        } else if self.is_loser(player) {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    }

    fn active_player(&self) -> Player {
        self.active
    }

    fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    fn empty_cell_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| !b).count()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }
}

/// A 7x7 midgame position with both players placed and a few cells burned,
/// used by several tests and the benchmarks.
pub fn midgame_7x7() -> IsolationBoard {
    IsolationBoard::from_parts(
        7,
        7,
        Some(Move::new(3, 3)),
        Some(Move::new(4, 5)),
        &[(2, 1), (5, 2), (1, 4), (3, 5), (6, 0)],
        Player::One,
    )
}
