//! Evaluation against a uniform-random opponent

use rand::{rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{build_rng, training::Tally};
use crate::{
    Result,
    error::Error,
    learning::{PolicyTable, select},
    ports::Observer,
    tictactoe::{Board, Outcome, Player},
};

/// Evaluation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Number of evaluation games
    pub games: usize,

    /// Which side's wins the tally counts
    pub tally: Player,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            tally: Player::X,
            seed: None,
        }
    }
}

impl EvaluationConfig {
    /// Check that every parameter is inside its contract.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the game count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfig {
                message: "games must be a positive integer".to_string(),
            });
        }
        Ok(())
    }
}

/// Plays a trained table against a uniformly random opponent.
///
/// X moves greedily over the supplied table with exploration disabled; O picks
/// uniformly among the open cells and ignores value estimates entirely. The
/// starting player is still randomized per game, as in training.
pub struct Evaluator {
    config: EvaluationConfig,
    board: Board,
    rng: StdRng,
    observers: Vec<Box<dyn Observer>>,
}

impl Evaluator {
    /// Create an evaluator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration violates its
    /// contract.
    pub fn new(config: EvaluationConfig) -> Result<Self> {
        config.validate()?;
        let rng = build_rng(config.seed);
        Ok(Self {
            config,
            board: Board::new(),
            rng,
            observers: Vec::new(),
        })
    }

    /// Add an observer to the evaluator
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play the configured number of games and tally the results from the
    /// configured side's perspective.
    ///
    /// # Errors
    ///
    /// Propagates observer failures; the game loop itself cannot fail.
    pub fn run(&mut self, table: &PolicyTable) -> Result<Tally> {
        let games = self.config.games;
        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for observer in &mut self.observers {
            observer.on_run_start(games)?;
        }

        for game in 0..games {
            self.board.reset(&mut self.rng);

            let outcome = loop {
                let mover = self.board.to_move();
                let position = match mover {
                    Player::X => select(&self.board, 0.0, table, &mut self.rng),
                    Player::O => *self
                        .board
                        .available()
                        .choose(&mut self.rng)
                        .expect("non-terminal position has at least one open cell"),
                };

                self.board.apply(position, mover);
                match self.board.resolve(position) {
                    Outcome::Continue => {}
                    terminal => break terminal,
                }
            };

            match outcome {
                Outcome::Win(winner) if winner == self.config.tally => wins += 1,
                Outcome::Win(_) => losses += 1,
                Outcome::Draw => draws += 1,
                Outcome::Continue => unreachable!("game ended on a live position"),
            }

            for observer in &mut self.observers {
                observer.on_episode_end(game, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_run_end()?;
        }

        Ok(Tally::new(games, wins, draws, losses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(EvaluationConfig::default().validate().is_ok());

        let zero_games = EvaluationConfig {
            games: 0,
            ..Default::default()
        };
        assert!(zero_games.validate().is_err());
    }

    #[test]
    fn test_counts_sum_to_game_count() {
        let config = EvaluationConfig {
            games: 40,
            seed: Some(5),
            ..Default::default()
        };
        let mut evaluator = Evaluator::new(config).unwrap();
        let tally = evaluator.run(&PolicyTable::new()).unwrap();

        assert_eq!(tally.total, 40);
        assert_eq!(tally.wins + tally.draws + tally.losses, 40);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = EvaluationConfig {
            games: 25,
            seed: Some(11),
            ..Default::default()
        };

        let first = Evaluator::new(config.clone())
            .unwrap()
            .run(&PolicyTable::new())
            .unwrap();
        let second = Evaluator::new(config)
            .unwrap()
            .run(&PolicyTable::new())
            .unwrap();

        assert_eq!(first.wins, second.wins);
        assert_eq!(first.draws, second.draws);
        assert_eq!(first.losses, second.losses);
    }

    #[test]
    fn test_tally_side_flips_win_and_loss_counts() {
        let seed = Some(23);
        let x_tally = Evaluator::new(EvaluationConfig {
            games: 30,
            tally: Player::X,
            seed,
        })
        .unwrap()
        .run(&PolicyTable::new())
        .unwrap();

        let o_tally = Evaluator::new(EvaluationConfig {
            games: 30,
            tally: Player::O,
            seed,
        })
        .unwrap()
        .run(&PolicyTable::new())
        .unwrap();

        assert_eq!(x_tally.wins, o_tally.losses);
        assert_eq!(x_tally.losses, o_tally.wins);
        assert_eq!(x_tally.draws, o_tally.draws);
    }
}
