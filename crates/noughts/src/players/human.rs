//! Human player that types cells at the console.

use super::{Choice, Player};
use crate::console::Console;
use anyhow::Result;
use noughts_engine::{GameSession, Position};
use tracing::{debug, instrument};

/// Human player using line input.
///
/// Accepts 1-9 (left-to-right, top-to-bottom) or a position label such as
/// "center" or "top left". `r` resets the game and `q` quits.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(&mut self, session: &GameSession, console: &mut Console<'_>) -> Result<Choice> {
        let prompt = format!(
            "{} ({}), choose a cell [1-9], r to reset, q to quit: ",
            self.name,
            session.to_move()
        );

        loop {
            let Some(line) = console.ask(&prompt)? else {
                debug!("Input closed");
                return Ok(Choice::Quit);
            };

            match line.to_lowercase().as_str() {
                "q" | "quit" => return Ok(Choice::Quit),
                "r" | "reset" => return Ok(Choice::Reset),
                _ => {}
            }

            match Position::from_label_or_number(&line) {
                Some(pos) if session.board().is_empty(pos.to_index()) => {
                    debug!(position = %pos, "Human chose position");
                    return Ok(Choice::Play(pos.to_index()));
                }
                Some(pos) => {
                    let free: Vec<String> = Position::valid_moves(session.board())
                        .iter()
                        .map(|p| format!("{} ({})", p, p.to_index() + 1))
                        .collect();
                    console.say(format!(
                        "{} is already taken. Free: {}.",
                        pos,
                        free.join(", ")
                    ))?
                }
                None => console.say(format!("'{}' is not a cell.", line))?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choose(input: &str, session: &GameSession) -> (Choice, String) {
        let mut out = Vec::new();
        let choice = {
            let mut console = Console::new(input.as_bytes(), &mut out);
            HumanPlayer::new("Ann").get_move(session, &mut console).unwrap()
        };
        (choice, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reprompts_until_a_free_cell() {
        let mut session = GameSession::default();
        session.place(4).unwrap();
        session.computer_move().unwrap();

        let (choice, out) = choose("abc\n5\n1\ncenter\n9\n", &session);
        assert_eq!(choice, Choice::Play(8));
        assert!(out.contains("'abc' is not a cell."));
        assert!(out.contains("Center is already taken."));
        assert!(out.contains("Top-left is already taken."));
    }

    #[test]
    fn taken_cell_lists_the_free_ones() {
        let mut session = GameSession::new(noughts_engine::SessionSettings::new(
            noughts_engine::Mode::HumanVsHuman,
            noughts_engine::Player::X,
            noughts_engine::Player::O,
        ));
        for index in [0, 1, 2, 3, 4, 5] {
            session.place(index).unwrap();
        }

        let (choice, out) = choose("2
8
", &session);
        assert_eq!(choice, Choice::Play(7));
        assert!(out.contains(
            "Top-center is already taken. Free: Bottom-left (7), Bottom-center (8), Bottom-right (9)."
        ));
    }

    #[test]
    fn commands_and_eof() {
        let session = GameSession::default();
        assert_eq!(choose("r\n", &session).0, Choice::Reset);
        assert_eq!(choose("Q\n", &session).0, Choice::Quit);
        assert_eq!(choose("", &session).0, Choice::Quit);
    }
}
