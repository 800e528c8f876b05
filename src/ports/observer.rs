//! Observer port - abstraction for run observation and data collection

use crate::{Result, tictactoe::Outcome};

/// Observer trait for monitoring training and evaluation runs.
///
/// Observers can be composed to collect different kinds of data without
/// coupling the loop to specific output formats.
///
/// # Event Sequence
///
/// 1. `on_run_start(total_episodes)` - once at the beginning
/// 2. `on_episode_end(episode, outcome)` - after each terminal outcome
/// 3. `on_run_end()` - once at the end
pub trait Observer: Send {
    /// Called once before the first episode.
    fn on_run_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each episode reaches a terminal outcome.
    ///
    /// The outcome is always `Win` or `Draw`, never `Continue`.
    fn on_episode_end(&mut self, _episode: usize, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last episode.
    fn on_run_end(&mut self) -> Result<()> {
        Ok(())
    }
}
