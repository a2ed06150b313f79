//! Tests for move application and outcome evaluation.

use noughts_engine::{
    Board, IllegalMove, LINES, Outcome, Player, Square, apply_move, evaluate, is_terminal,
};

fn board(s: &str) -> Board {
    s.parse().expect("valid board")
}

#[test]
fn test_occupied_square_rejected() {
    let b = apply_move(&Board::new(), 4, Player::X).unwrap();
    let result = apply_move(&b, 4, Player::O);
    assert_eq!(result, Err(IllegalMove::Occupied(4)));
    // The input board is untouched.
    assert_eq!(b.get(4), Some(Square::Occupied(Player::X)));
}

#[test]
fn test_out_of_range_rejected() {
    assert_eq!(
        apply_move(&Board::new(), 9, Player::X),
        Err(IllegalMove::OutOfRange(9))
    );
    assert_eq!(
        apply_move(&Board::new(), usize::MAX, Player::O),
        Err(IllegalMove::OutOfRange(usize::MAX))
    );
}

#[test]
fn test_finished_game_rejects_moves() {
    let won = board("OOO XX. X..");
    assert_eq!(apply_move(&won, 5, Player::X), Err(IllegalMove::GameOver));

    let drawn = board("XOX XOO OXX");
    assert!(is_terminal(&drawn));
    assert_eq!(apply_move(&drawn, 0, Player::O), Err(IllegalMove::GameOver));
}

#[test]
fn test_every_line_wins() {
    for line in LINES {
        let mut b = Board::new();
        for cell in line.cells() {
            b = apply_move(&b, cell, Player::O).unwrap();
        }
        assert_eq!(
            evaluate(&b, Player::O),
            Outcome::Won {
                player: Player::O,
                line
            }
        );
    }
}

#[test]
fn test_in_progress() {
    let b = board("X.. .O. ...");
    assert_eq!(evaluate(&b, Player::O), Outcome::InProgress);
    assert!(!is_terminal(&b));
}

#[test]
fn test_draw_detection() {
    let b = board("XOX XOO OXX");
    assert_eq!(evaluate(&b, Player::X), Outcome::Draw);
    assert_eq!(evaluate(&b, Player::O), Outcome::Draw);
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    let b = board("XOX OXO OXX");
    assert!(b.is_full());
    assert_eq!(evaluate(&b, Player::X).winner(), Some(Player::X));
}

#[test]
fn test_evaluate_is_idempotent() {
    let b = board("XX. OO. X..");
    let first = evaluate(&b, Player::X);
    for _ in 0..3 {
        assert_eq!(evaluate(&b, Player::X), first);
    }
}
