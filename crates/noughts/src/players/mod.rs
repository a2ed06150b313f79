//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use anyhow::Result;
use noughts_engine::GameSession;

/// What a seat decided to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Play the cell at this index (0-8).
    Play(usize),
    /// Abandon the game and start over.
    Reset,
    /// Leave.
    Quit,
}

/// Trait for players that can make moves.
pub trait Player {
    /// Gets this player's decision for the current turn.
    ///
    /// The session is a read-only snapshot; the orchestrator applies the
    /// choice.
    fn get_move(&mut self, session: &GameSession, console: &mut Console<'_>) -> Result<Choice>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
