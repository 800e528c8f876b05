//! Backward temporal-difference credit assignment

use super::table::PolicyTable;
use crate::types::StateKey;

/// Propagate a terminal reward back through an episode's visited states.
///
/// The trace is replayed in reverse, most recent state first. Each state's
/// value moves toward the discounted reward signal:
///
/// `v' = v + learning_rate * (discount * signal - v)`
///
/// and the updated value becomes the signal for the next (earlier) state.
/// Earlier states therefore bootstrap off values already updated in this same
/// pass, not the pre-update values; that ordering is part of the contract.
/// States absent from the table enter it with their updated value.
pub fn propagate(
    terminal_reward: f64,
    trace: &[StateKey],
    table: &mut PolicyTable,
    learning_rate: f64,
    discount: f64,
) {
    let mut signal = terminal_reward;
    for key in trace.iter().rev() {
        let value = table.value_of(key);
        let updated = value + learning_rate * (discount * signal - value);
        table.set(key.clone(), updated);
        signal = updated;
    }
}
