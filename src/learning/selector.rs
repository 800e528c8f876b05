//! Epsilon-greedy action selection over a state-value table

use rand::{Rng, seq::IndexedRandom};

use super::table::PolicyTable;
use crate::tictactoe::Board;

/// Choose a move for the board's active player.
///
/// With probability `epsilon` a uniformly random open cell is explored.
/// Otherwise every open cell is scored by the value of the position it would
/// produce (unseen positions score 0.0) and the first cell achieving the
/// maximum wins, so ties break toward the lowest index. That tie-break is
/// load-bearing: it makes greedy evaluation deterministic.
///
/// Requires at least one open cell; calling on a full board is a caller bug.
pub fn select<R: Rng>(board: &Board, epsilon: f64, table: &PolicyTable, rng: &mut R) -> usize {
    let available = board.available();
    assert!(
        !available.is_empty(),
        "selection requires at least one open cell"
    );

    if rng.random::<f64>() < epsilon {
        return *available.choose(rng).expect("open cells are non-empty");
    }

    let mover = board.to_move();
    let mut best: Option<(usize, f64)> = None;
    for &position in available {
        let value = table.value_of(&board.preview_key(position, mover));
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((position, value)),
        }
    }

    best.expect("open cells are non-empty").0
}
