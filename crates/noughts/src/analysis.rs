//! One-shot analysis of a position for the `analyze` command.

use noughts_engine::{
    Board, DRAW_SCORE, InvalidSearchState, Player, Position, SearchReport, analyze,
};
use tracing::instrument;

/// The mark to move on `board` when `starting` moved first.
pub fn side_to_move(board: &Board, starting: Player) -> Player {
    if board.count(starting) <= board.count(starting.opponent()) {
        starting
    } else {
        starting.opponent()
    }
}

/// Searches `board` for `computer` (or the side to move, given who
/// started) and describes the result.
///
/// # Errors
///
/// Returns [`InvalidSearchState`] for a full or already decided board.
#[instrument(skip(board))]
pub fn report(
    board: &Board,
    computer: Option<Player>,
    starting: Player,
) -> Result<String, InvalidSearchState> {
    let computer = computer.unwrap_or_else(|| side_to_move(board, starting));
    let SearchReport {
        index,
        score,
        nodes,
    } = analyze(board, computer, computer.opponent())?;

    let label = Position::from_index(index).map_or("?", |p| p.label());
    let verdict = match score {
        s if s > DRAW_SCORE => "forced win",
        s if s < DRAW_SCORE => "lost against best play",
        _ => "draw with best play",
    };
    Ok(format!(
        "{}\n\n{} plays {} (cell {}): {} [score {}, {} positions searched]",
        board,
        computer,
        label,
        index + 1,
        verdict,
        score,
        nodes
    ))
}
