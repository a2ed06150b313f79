//! Property tests over boards reachable by alternating legal moves.

use noughts_engine::{
    Board, BoardConsistent, Outcome, Player, apply_move, evaluate, is_terminal, select_move,
    winning_line,
};
use proptest::prelude::*;

/// Plays `picks` as "k-th empty cell" choices, X first, until the game ends.
fn play(picks: &[usize]) -> (Board, Option<Player>) {
    let mut board = Board::new();
    let mut mover = Player::X;
    let mut last = None;
    for &pick in picks {
        if is_terminal(&board) {
            break;
        }
        let empty: Vec<usize> = board.empty_cells().collect();
        let index = empty[pick % empty.len()];
        board = apply_move(&board, index, mover).expect("legal move");
        last = Some(mover);
        mover = mover.opponent();
    }
    (board, last)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn at_most_one_winner(picks in proptest::collection::vec(0usize..9, 0..=9)) {
        let (board, _) = play(&picks);
        let x = winning_line(&board, Player::X).is_some();
        let o = winning_line(&board, Player::O).is_some();
        prop_assert!(!(x && o));
        prop_assert!(BoardConsistent::holds(&board));
    }

    #[test]
    fn evaluate_agrees_with_terminal_check(picks in proptest::collection::vec(0usize..9, 1..=9)) {
        let (board, last) = play(&picks);
        let last = last.expect("at least one move");
        prop_assert_eq!(evaluate(&board, last).is_terminal(), is_terminal(&board));
    }

    #[test]
    fn draw_is_order_independent(
        xs in Just(vec![0usize, 2, 3, 7, 8]).prop_shuffle(),
        os in Just(vec![1usize, 4, 5, 6]).prop_shuffle(),
    ) {
        // Final position XOX / XOO / OXX has no line, so no prefix does either.
        let mut board = Board::new();
        for turn in 0..9 {
            let (index, player) = if turn % 2 == 0 {
                (xs[turn / 2], Player::X)
            } else {
                (os[turn / 2], Player::O)
            };
            board = apply_move(&board, index, player).expect("legal move");
        }
        prop_assert_eq!(evaluate(&board, Player::X), Outcome::Draw);
        prop_assert_eq!(board, "XOX XOO OXX".parse::<Board>().unwrap());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn search_picks_an_empty_cell(picks in proptest::collection::vec(0usize..9, 2..=8)) {
        let (board, last) = play(&picks);
        prop_assume!(!is_terminal(&board));
        let computer = last.expect("at least one move").opponent();
        let index = select_move(&board, computer, computer.opponent()).unwrap();
        prop_assert!(board.is_empty(index));
    }
}
