//! Move legality and terminal-state detection.
//!
//! `apply_move` is the only way a board changes. Each precondition is a
//! small named check so the refusal reason maps one-to-one onto
//! [`IllegalMove`].

use crate::error::IllegalMove;
use crate::types::{Board, CELLS, LINES, Line, Outcome, Player, Square};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Move preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index addresses one of the nine cells.
pub struct IndexInRange;

impl IndexInRange {
    /// Checks the precondition.
    pub fn check(index: usize) -> Result<(), IllegalMove> {
        if index < CELLS {
            Ok(())
        } else {
            Err(IllegalMove::OutOfRange(index))
        }
    }
}

/// Precondition: nobody has completed a line and the board is not full.
pub struct GameActive;

impl GameActive {
    /// Checks the precondition.
    pub fn check(board: &Board) -> Result<(), IllegalMove> {
        if is_terminal(board) {
            Err(IllegalMove::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    pub fn check(board: &Board, index: usize) -> Result<(), IllegalMove> {
        if board.is_empty(index) {
            Ok(())
        } else {
            Err(IllegalMove::Occupied(index))
        }
    }
}

/// Invariant: marks alternate, so the counts differ by at most one.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Returns true if the invariant holds for `board`.
    pub fn holds(board: &Board) -> bool {
        board.count(Player::X).abs_diff(board.count(Player::O)) <= 1
    }
}

// ─────────────────────────────────────────────────────────────
//  Rules
// ─────────────────────────────────────────────────────────────

/// Places `player`'s mark at `index`, returning the new board.
///
/// # Errors
///
/// - [`IllegalMove::OutOfRange`] if `index` is not 0-8.
/// - [`IllegalMove::GameOver`] if the board is already won or full.
/// - [`IllegalMove::Occupied`] if the square holds a mark.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, player: Player) -> Result<Board, IllegalMove> {
    IndexInRange::check(index)?;
    GameActive::check(board)?;
    SquareIsEmpty::check(board, index)?;

    let mut next = *board;
    next.set(index, Square::Occupied(player));
    debug!("Mark placed");
    Ok(next)
}

/// Evaluates `board` after `last_mover` has played.
///
/// Only `last_mover`'s lines are scanned: under strict alternation the
/// opponent cannot have completed a line on the previous turn without
/// the game having ended there.
pub fn evaluate(board: &Board, last_mover: Player) -> Outcome {
    if let Some(line) = winning_line(board, last_mover) {
        return Outcome::Won {
            player: last_mover,
            line,
        };
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// First line, in table order, fully held by `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    LINES.iter().copied().find(|line| board.holds(line, player))
}

/// True if either player holds a line or no empty square remains.
pub fn is_terminal(board: &Board) -> bool {
    winning_line(board, Player::X).is_some()
        || winning_line(board, Player::O).is_some()
        || board.is_full()
}
