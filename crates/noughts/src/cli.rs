//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_engine::{Board, Mode, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe with an unbeatable computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML config file (defaults to ./noughts.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// human-vs-human or human-vs-computer
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Mark that moves first (X or O)
        #[arg(short, long)]
        starting: Option<Player>,

        /// Mark the computer plays (X or O)
        #[arg(long)]
        computer: Option<Player>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },

    /// Print the computer's move for a position
    Analyze {
        /// Nine cells, row by row: X, O, or . for empty (e.g. "XX..O....")
        board: Board,

        /// Mark to search for (defaults to the side to move)
        #[arg(long)]
        computer: Option<Player>,

        /// Mark that moved first, used to work out the side to move
        #[arg(short, long, default_value_t = Player::X)]
        starting: Player,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_play_flags() {
        let cli = Cli::try_parse_from([
            "noughts",
            "play",
            "--mode",
            "human-vs-human",
            "--starting",
            "o",
            "--think-ms",
            "0",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                mode,
                starting,
                computer,
                think_ms,
                config,
            } => {
                assert_eq!(mode, Some(Mode::HumanVsHuman));
                assert_eq!(starting, Some(Player::O));
                assert_eq!(computer, None);
                assert_eq!(think_ms, Some(0));
                assert_eq!(config, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_board_argument() {
        let cli = Cli::try_parse_from(["noughts", "analyze", "XX..O....", "--computer", "X"])
            .unwrap();
        let Command::Analyze {
            board,
            computer,
            starting,
        } = cli.command
        else {
            panic!("expected analyze");
        };
        assert!(board.is_empty(2));
        assert_eq!(computer, Some(Player::X));
        assert_eq!(starting, Player::X);
    }

    #[test]
    fn analyze_accepts_starting_mark() {
        let cli = Cli::try_parse_from(["noughts", "analyze", "XO.......", "-s", "o"]).unwrap();
        let Command::Analyze { starting, .. } = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(starting, Player::O);
    }

    #[test]
    fn rejects_bad_board() {
        assert!(Cli::try_parse_from(["noughts", "analyze", "XX"]).is_err());
    }
}
