//! Computer player backed by the minimax search.

use super::{Choice, Player};
use crate::console::Console;
use anyhow::Result;
use noughts_engine::GameSession;
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer that always plays the minimax move.
pub struct ComputerPlayer {
    name: String,
    think: Duration,
}

impl ComputerPlayer {
    /// Creates a computer that pauses `think` before answering.
    ///
    /// The pause is cosmetic; it never changes the chosen move.
    pub fn new(name: impl Into<String>, think: Duration) -> Self {
        Self {
            name: name.into(),
            think,
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(&mut self, session: &GameSession, console: &mut Console<'_>) -> Result<Choice> {
        if !self.think.is_zero() {
            console.say(format!("{} is thinking...", self.name))?;
            std::thread::sleep(self.think);
        }

        let index = session.computer_choice()?;
        debug!(index, "Computer chose cell");
        Ok(Choice::Play(index))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
