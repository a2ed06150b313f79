//! Game session state owned by the coordinating layer.
//!
//! A session strings boards together into a game: it tracks whose turn it
//! is, whether the game is still running, and which seat belongs to the
//! computer. Every move, human or computer, goes through [`GameSession::place`].

use crate::error::{IllegalMove, SessionError};
use crate::rules::{apply_move, evaluate};
use crate::search::select_move;
use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who sits in the two seats.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two people share the board.
    HumanVsHuman,
    /// One person plays the computer.
    #[default]
    HumanVsComputer,
}

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Seat assignment.
    pub mode: Mode,
    /// Mark that moves first.
    pub starting: Player,
    /// Mark played by the computer. Ignored in [`Mode::HumanVsHuman`].
    pub computer: Player,
}

impl SessionSettings {
    /// Creates settings from their parts.
    pub fn new(mode: Mode, starting: Player, computer: Player) -> Self {
        Self {
            mode,
            starting,
            computer,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(Mode::HumanVsComputer, Player::X, Player::O)
    }
}

/// One game in progress, or just finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    settings: SessionSettings,
    board: Board,
    to_move: Player,
    active: bool,
    outcome: Outcome,
    history: Vec<usize>,
}

impl GameSession {
    /// Starts a fresh game.
    #[instrument]
    pub fn new(settings: SessionSettings) -> Self {
        info!("Starting new game session");
        Self {
            settings,
            board: Board::new(),
            to_move: settings.starting,
            active: true,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Clears the board, keeping the current settings.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new(self.settings);
    }

    /// Switches mode and starts a fresh game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        let settings = SessionSettings {
            mode,
            ..self.settings
        };
        *self = Self::new(settings);
    }

    /// Places the mark of the player to move at `index`.
    ///
    /// On a terminal outcome the session becomes inactive; otherwise the
    /// turn passes. A rejected move changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] for an out-of-range index, an occupied
    /// square, or a finished game.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, index: usize) -> Result<Outcome, IllegalMove> {
        if !self.active {
            return Err(IllegalMove::GameOver);
        }

        let mover = self.to_move;
        self.board = apply_move(&self.board, index, mover)?;
        self.history.push(index);
        self.outcome = evaluate(&self.board, mover);

        if self.outcome.is_terminal() {
            self.active = false;
            info!(outcome = %self.outcome, "Game over");
        } else {
            self.to_move = mover.opponent();
            debug!(next = %self.to_move, "Turn passes");
        }
        Ok(self.outcome)
    }

    /// True when the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.active
            && self.settings.mode == Mode::HumanVsComputer
            && self.to_move == self.settings.computer
    }

    /// Lets the computer choose and play its move.
    ///
    /// Returns the chosen index and the resulting outcome.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotComputerTurn`] outside the computer's turn.
    /// - [`SessionError::InvalidSearchState`] or
    ///   [`SessionError::IllegalMove`] if the engine refuses the board.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<(usize, Outcome), SessionError> {
        let index = self.computer_choice()?;
        let outcome = self.place(index)?;
        Ok((index, outcome))
    }

    /// The cell the computer would play now, without playing it.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::computer_move`], minus the move itself.
    pub fn computer_choice(&self) -> Result<usize, SessionError> {
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }
        Ok(select_move(&self.board, self.settings.computer, self.human())?)
    }

    /// The mark the human plays against the computer.
    pub fn human(&self) -> Player {
        self.settings.computer.opponent()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the game is over).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns false once the game has been won or drawn.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the outcome after the last accepted move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the cells played, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the session settings.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
