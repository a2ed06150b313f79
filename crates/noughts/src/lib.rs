//! Noughts - terminal front-end for the noughts engine.
//!
//! This crate is the coordinating layer: it reads configuration, seats a
//! human or the computer on each side, and drives a
//! [`GameSession`](noughts_engine::GameSession) through the
//! [`Orchestrator`] game loop.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod console;
pub mod orchestrator;
pub mod players;

pub use config::{ConfigError, PlayConfig};
pub use console::Console;
pub use orchestrator::{Finish, GameEvent, Orchestrator};
pub use players::{Choice, ComputerPlayer, HumanPlayer, Player};

use noughts_engine::{Mode, Player as Mark, SessionSettings};
use std::time::Duration;

/// Builds the X and O seats for `settings`.
pub fn seats(settings: &SessionSettings, think: Duration) -> (Box<dyn Player>, Box<dyn Player>) {
    let seat = |mark: Mark| -> Box<dyn Player> {
        match settings.mode {
            Mode::HumanVsComputer if mark == settings.computer => {
                Box::new(ComputerPlayer::new("Computer", think))
            }
            Mode::HumanVsComputer => Box::new(HumanPlayer::new("You")),
            Mode::HumanVsHuman => Box::new(HumanPlayer::new(format!("Player {}", mark))),
        }
    };
    (seat(Mark::X), seat(Mark::O))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computer_takes_its_mark() {
        let settings = SessionSettings::new(Mode::HumanVsComputer, Mark::X, Mark::X);
        let (x, o) = seats(&settings, Duration::ZERO);
        assert_eq!(x.name(), "Computer");
        assert_eq!(o.name(), "You");
    }

    #[test]
    fn two_humans_are_named_by_mark() {
        let settings = SessionSettings::new(Mode::HumanVsHuman, Mark::X, Mark::O);
        let (x, o) = seats(&settings, Duration::ZERO);
        assert_eq!(x.name(), "Player X");
        assert_eq!(o.name(), "Player O");
    }
}
