//! Noughts engine - tic-tac-toe rules and a computer that never loses.
//!
//! # Architecture
//!
//! - **Rules**: boards are values; [`apply_move`] is the only way to get a
//!   board with one more mark, and [`evaluate`] reads the outcome off it.
//! - **Search**: [`select_move`] runs exhaustive minimax on a private
//!   scratch copy of the board and returns the cell to play.
//! - **Session**: [`GameSession`] is the explicit state a front-end holds
//!   between moves (board, turn, mode, active flag).
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameSession, Outcome, SessionSettings};
//!
//! let mut session = GameSession::new(SessionSettings::default());
//! session.place(4)?;
//! let (index, outcome) = session.computer_move()?;
//! assert!(index != 4);
//! assert_eq!(outcome, Outcome::InProgress);
//! # Ok::<(), noughts_engine::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
mod rules;
mod search;
mod session;
mod types;

pub use error::{IllegalMove, InvalidSearchState, ParseBoardError, SessionError};
pub use position::Position;
pub use rules::{
    BoardConsistent, GameActive, IndexInRange, SquareIsEmpty, apply_move, evaluate, is_terminal,
    winning_line,
};
pub use search::{DRAW_SCORE, LOSS_SCORE, SearchReport, WIN_SCORE, analyze, select_move};
pub use session::{GameSession, Mode, SessionSettings};
pub use types::{Board, CELLS, LINES, Line, Outcome, Player, Square};
