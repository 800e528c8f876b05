//! Behavioral properties of epsilon-greedy selection.

use rand::{SeedableRng, rngs::StdRng};
use valueplay::{Board, Player, PolicyTable, learning::select};

#[test]
fn full_exploration_is_roughly_uniform_over_open_cells() {
    let board = Board::new();
    let table = PolicyTable::new();
    let mut rng = StdRng::seed_from_u64(2024);

    const TRIALS: usize = 9_000;
    let mut counts = [0usize; 9];
    for _ in 0..TRIALS {
        counts[select(&board, 1.0, &table, &mut rng)] += 1;
    }

    // Expected 1000 per cell; +/-200 is far beyond seeded sampling noise.
    for (cell, &count) in counts.iter().enumerate() {
        assert!(
            (800..=1200).contains(&count),
            "cell {cell} selected {count} times out of {TRIALS}"
        );
    }
}

#[test]
fn zero_exploration_always_picks_the_strictly_best_candidate() {
    let board = Board::new();
    let mut table = PolicyTable::new();
    for position in 0..9 {
        table.set(board.preview_key(position, Player::X), 0.1);
    }
    table.set(board.preview_key(7, Player::X), 0.8);

    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        assert_eq!(select(&board, 0.0, &table, &mut rng), 7);
    }
}

#[test]
fn zero_exploration_breaks_ties_toward_the_lowest_index() {
    let board = Board::new();
    let mut table = PolicyTable::new();
    table.set(board.preview_key(2, Player::X), 0.8);
    table.set(board.preview_key(6, Player::X), 0.8);

    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        assert_eq!(select(&board, 0.0, &table, &mut rng), 2);
    }
}

#[test]
fn selection_scores_positions_for_the_active_player() {
    // After X opens at 0, O is to move; values stored for O's resulting
    // positions must drive the choice.
    let mut board = Board::new();
    board.apply(0, Player::X);
    board.resolve(0);
    assert_eq!(board.to_move(), Player::O);

    let mut table = PolicyTable::new();
    table.set(board.preview_key(8, Player::O), 0.6);

    let mut rng = StdRng::seed_from_u64(17);
    assert_eq!(select(&board, 0.0, &table, &mut rng), 8);
}
