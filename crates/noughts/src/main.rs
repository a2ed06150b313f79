//! Noughts - tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{Console, Finish, Orchestrator, PlayConfig, analysis, seats};
use noughts_engine::{Board, Player};
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            starting,
            computer,
            think_ms,
        } => {
            let config = PlayConfig::load(config.as_deref())?
                .with_overrides(mode, starting, computer, think_ms);
            run_play(config)
        }
        Command::Analyze {
            board,
            computer,
            starting,
        } => run_analyze(board, computer, starting),
    }
}

/// Run interactive games until the user quits
#[instrument]
fn run_play(config: PlayConfig) -> Result<()> {
    info!("Starting noughts");

    let settings = config.session_settings();
    let (player_x, player_o) = seats(&settings, Duration::from_millis(*config.think_ms()));
    let mut orchestrator = Orchestrator::new(settings, player_x, player_o);
    let mut console = Console::stdio();

    console.say(format!(
        "Mode: {}. {} moves first. Cells are numbered 1-9, left to right, top to bottom.",
        settings.mode, settings.starting
    ))?;

    loop {
        match orchestrator.run(&mut console, |event| println!("{}", event))? {
            Finish::Quit => break,
            Finish::Completed(_) => match console.ask("Play again? [y/N] ")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => orchestrator.restart(),
                _ => break,
            },
        }
    }

    info!("Goodbye");
    Ok(())
}

/// Print the computer's choice for a single position
#[instrument]
fn run_analyze(board: Board, computer: Option<Player>, starting: Player) -> Result<()> {
    let text = analysis::report(&board, computer, starting)?;
    println!("{}", text);
    Ok(())
}
