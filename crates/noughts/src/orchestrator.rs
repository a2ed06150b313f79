//! Game orchestration between players.

use crate::console::Console;
use crate::players::{Choice, Player};
use anyhow::Result;
use noughts_engine::{Board, GameSession, Outcome, Player as Mark, Position, SessionSettings};
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board is ready.
    Started {
        /// The empty board.
        board: Board,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the mover.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Cell played (0-8).
        index: usize,
        /// Board after the move.
        board: Board,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Display name of the winner, if any.
        winner: Option<String>,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Started { board } => write!(f, "\nNew game\n{}\n", board),
            GameEvent::MoveMade {
                player,
                mark,
                index,
                board,
            } => {
                let label = Position::from_index(*index).map_or("?", |p| p.label());
                write!(f, "{} ({}) plays {}\n{}\n", player, mark, label, board)
            }
            GameEvent::GameOver {
                outcome: Outcome::Won { line, .. },
                winner,
            } => {
                let cells: Vec<&str> = line
                    .cells()
                    .iter()
                    .filter_map(|&i| Position::from_index(i))
                    .map(|p| p.label())
                    .collect();
                let name = winner.as_deref().unwrap_or("Nobody");
                write!(f, "{} wins ({})!", name, cells.join(", "))
            }
            GameEvent::GameOver { .. } => write!(f, "It's a draw."),
        }
    }
}

/// How a call to [`Orchestrator::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// The game reached a win or a draw.
    Completed(Outcome),
    /// A player asked to quit.
    Quit,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    session: GameSession,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        settings: SessionSettings,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
    ) -> Self {
        Self {
            session: GameSession::new(settings),
            player_x,
            player_o,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs the game loop until the game ends or a player quits.
    ///
    /// Every chosen cell goes through [`GameSession::place`]; a rejected
    /// cell is reported to the console and the same player is asked again.
    #[instrument(skip_all)]
    pub fn run(
        &mut self,
        console: &mut Console<'_>,
        mut on_event: impl FnMut(&GameEvent),
    ) -> Result<Finish> {
        info!("Starting game orchestration");
        on_event(&GameEvent::Started {
            board: *self.session.board(),
        });

        loop {
            if !self.session.is_active() {
                let outcome = self.session.outcome();
                let winner = outcome.winner().map(|mark| self.seat(mark).name().to_string());
                on_event(&GameEvent::GameOver { outcome, winner });
                return Ok(Finish::Completed(outcome));
            }

            let mark = self.session.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            match player.get_move(&self.session, console)? {
                Choice::Play(index) => match self.session.place(index) {
                    Ok(_) => {
                        on_event(&GameEvent::MoveMade {
                            player: player.name().to_string(),
                            mark,
                            index,
                            board: *self.session.board(),
                        });
                    }
                    Err(e) => {
                        warn!(error = %e, index, "Move rejected");
                        console.say(e)?;
                    }
                },
                Choice::Reset => {
                    info!("Game reset");
                    self.session.reset();
                    on_event(&GameEvent::Started {
                        board: *self.session.board(),
                    });
                }
                Choice::Quit => {
                    info!("Player quit");
                    return Ok(Finish::Quit);
                }
            }
        }
    }

    /// Restarts the game with the same settings.
    pub fn restart(&mut self) {
        self.session.reset();
    }

    fn seat(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.player_x.as_ref(),
            Mark::O => self.player_o.as_ref(),
        }
    }
}
