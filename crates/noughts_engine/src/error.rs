//! Error types for the rules engine, the search engine and sessions.

use crate::types::Player;

/// A move the rules engine refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Index is outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the index already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for IllegalMove {}

/// Search was invoked on a board with nothing left to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidSearchState {
    /// No empty square remains.
    #[display("Cannot search a full board")]
    BoardFull,

    /// A line is already complete.
    #[display("Cannot search a board already won by {}", _0)]
    AlreadyWon(Player),

    /// Computer and human were given the same mark.
    #[display("Computer and human cannot both play {}", _0)]
    SamePlayer(Player),
}

impl std::error::Error for InvalidSearchState {}

/// Errors raised by [`GameSession`](crate::GameSession) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The move was rejected by the rules engine.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// The search engine refused the board.
    #[display("Invalid search state: {}", _0)]
    InvalidSearchState(InvalidSearchState),

    /// A computer move was requested outside the computer's turn.
    #[display("It is not the computer's turn")]
    NotComputerTurn,
}

impl From<IllegalMove> for SessionError {
    fn from(err: IllegalMove) -> Self {
        SessionError::IllegalMove(err)
    }
}

impl From<InvalidSearchState> for SessionError {
    fn from(err: InvalidSearchState) -> Self {
        SessionError::InvalidSearchState(err)
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::IllegalMove(e) => Some(e),
            SessionError::InvalidSearchState(e) => Some(e),
            SessionError::NotComputerTurn => None,
        }
    }
}

/// A board string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// Wrong number of cell symbols.
    #[display("Expected 9 cells, found {}", _0)]
    Length(usize),

    /// Unrecognised cell symbol.
    #[display("Unexpected cell symbol {:?}", _0)]
    Symbol(char),
}

impl std::error::Error for ParseBoardError {}
