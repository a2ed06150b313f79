//! Exhaustive minimax move selection.
//!
//! The computer maximizes, the human minimizes, and every legal
//! continuation is explored to the end of the game. A 3x3 board bounds the
//! tree at 549,946 nodes, so no pruning or caching is done.
//!
//! Scores are fixed at [`WIN_SCORE`], [`LOSS_SCORE`] and [`DRAW_SCORE`]
//! regardless of depth. Among children with equal scores the lowest cell
//! index wins, so the engine does not prefer a quick win over a slow one.

use crate::error::InvalidSearchState;
use crate::rules::winning_line;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, trace};

/// Score of a position the computer has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a position the human has won.
pub const LOSS_SCORE: i32 = -10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// The move chosen by a search, with what it cost to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Cell index to play.
    pub index: usize,
    /// Minimax value of playing `index`, from the computer's side.
    pub score: i32,
    /// Positions visited, root included.
    pub nodes: u64,
}

/// Returns the optimal cell for `computer` to play on `board`.
///
/// # Errors
///
/// Returns [`InvalidSearchState`] if the board is full, already won, or
/// both roles were given the same mark.
pub fn select_move(
    board: &Board,
    computer: Player,
    human: Player,
) -> Result<usize, InvalidSearchState> {
    analyze(board, computer, human).map(|report| report.index)
}

/// Runs the search and reports the chosen move, its score and node count.
///
/// # Errors
///
/// Same as [`select_move`].
#[instrument(skip(board), fields(board = %board.squares().iter().map(symbol).collect::<String>()))]
pub fn analyze(
    board: &Board,
    computer: Player,
    human: Player,
) -> Result<SearchReport, InvalidSearchState> {
    if computer == human {
        return Err(InvalidSearchState::SamePlayer(computer));
    }
    for player in [computer, human] {
        if winning_line(board, player).is_some() {
            return Err(InvalidSearchState::AlreadyWon(player));
        }
    }

    let mut scratch = Scratch::new(*board, computer, human);
    let (index, score) = scratch
        .best_child(computer)
        .ok_or(InvalidSearchState::BoardFull)?;
    debug_assert_eq!(&scratch.board, board, "scratch board not restored");

    info!(index, score, nodes = scratch.nodes, "Search complete");
    Ok(SearchReport {
        index,
        score,
        nodes: scratch.nodes,
    })
}

fn symbol(square: &Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}

/// Private working copy of the board for one search.
///
/// Trial marks are placed and removed through [`Scratch::try_mark`] only,
/// so every sibling branch starts from the same position.
struct Scratch {
    board: Board,
    computer: Player,
    human: Player,
    nodes: u64,
}

impl Scratch {
    fn new(board: Board, computer: Player, human: Player) -> Self {
        Self {
            board,
            computer,
            human,
            nodes: 1,
        }
    }

    /// Places `player` at `index`, runs `f`, then clears the cell again.
    fn try_mark<T>(&mut self, index: usize, player: Player, f: impl FnOnce(&mut Self) -> T) -> T {
        debug_assert!(self.board.is_empty(index));
        self.board.set(index, Square::Occupied(player));
        let out = f(self);
        self.board.set(index, Square::Empty);
        out
    }

    /// Score of the current position with `mover` to play.
    fn value(&mut self, mover: Player) -> i32 {
        self.nodes += 1;

        if winning_line(&self.board, self.human).is_some() {
            return LOSS_SCORE;
        }
        if winning_line(&self.board, self.computer).is_some() {
            return WIN_SCORE;
        }
        match self.best_child(mover) {
            Some((_, score)) => score,
            None => DRAW_SCORE,
        }
    }

    /// Best `(index, score)` for `mover` over all empty cells, ascending.
    ///
    /// Returns `None` when the board is full.
    fn best_child(&mut self, mover: Player) -> Option<(usize, i32)> {
        let maximizing = mover == self.computer;
        let position = self.board;
        let mut best: Option<(usize, i32)> = None;

        for index in position.empty_cells() {
            let score = self.try_mark(index, mover, |s| s.value(mover.opponent()));
            let improves = match best {
                None => true,
                Some((_, current)) if maximizing => score > current,
                Some((_, current)) => score < current,
            };
            if improves {
                best = Some((index, score));
            }
        }

        if let Some((index, score)) = best {
            trace!(?mover, index, score, "Best child");
        }
        best
    }
}
