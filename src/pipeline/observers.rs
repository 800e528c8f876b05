//! Observers for training and evaluation runs

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Outcome, Player},
};

/// Progress bar observer showing a live W/D/L tally.
///
/// Counts from the primary (X) side's perspective.
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    wins: usize,
    draws: usize,
    losses: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            wins: 0,
            draws: 0,
            losses: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_run_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} (W:{msg})")
                .map_err(|e| crate::Error::ProgressTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Win(Player::X) => self.wins += 1,
            Outcome::Win(Player::O) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Continue => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position((episode + 1) as u64);
            pb.set_message(format!("{} D:{} L:{}", self.wins, self.draws, self.losses));
        }
        Ok(())
    }

    fn on_run_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} D:{} L:{}", self.wins, self.draws, self.losses));
        }
        Ok(())
    }
}
