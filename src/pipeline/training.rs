//! Self-play training loop

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::build_rng;
use crate::{
    Result,
    error::Error,
    learning::{PolicyTable, propagate, select},
    ports::Observer,
    tictactoe::{Board, Outcome, Player},
    types::StateKey,
};

/// Exploration rate at the start of training; it decays linearly to zero
/// across the configured episode count.
const INITIAL_EPSILON: f64 = 0.95;

/// Terminal reward for the winning side's table.
const WIN_REWARD: f64 = 1.0;

/// Terminal reward for the losing side's table.
const LOSS_REWARD: f64 = -2.0;

/// Draw reward for the side that filled the final cell.
const DRAW_CLOSER_REWARD: f64 = 0.2;

/// Draw reward for the side that was waiting to move.
const DRAW_WAITER_REWARD: f64 = 0.5;

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of self-play episodes
    pub episodes: usize,

    /// Learning rate alpha, in (0, 1]
    pub learning_rate: f64,

    /// Discount factor gamma, in (0, 1]
    pub discount: f64,

    /// Random seed
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 100_000,
            learning_rate: 0.5,
            discount: 0.9,
            seed: None,
        }
    }
}

impl TrainingConfig {
    /// Check that every parameter is inside its contract.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.episodes == 0 {
            return Err(Error::InvalidConfig {
                message: "episodes must be a positive integer".to_string(),
            });
        }
        for (name, value) in [
            ("learning_rate", self.learning_rate),
            ("discount", self.discount),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be in (0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Aggregate win/draw/loss counts for a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tally {
    /// Total episodes played
    pub total: usize,

    /// Number of wins
    pub wins: usize,

    /// Number of draws
    pub draws: usize,

    /// Number of losses
    pub losses: usize,

    /// Win rate
    pub win_rate: f64,

    /// Draw rate
    pub draw_rate: f64,

    /// Loss rate
    pub loss_rate: f64,
}

impl Tally {
    /// Create a new tally, deriving the rates
    pub fn new(total: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total > 0 {
                count as f64 / total as f64
            } else {
                0.0
            }
        };

        Self {
            total,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }
}

/// Everything a completed training run produces.
///
/// The primary table is the one worth persisting; the sparring table exists to
/// give the primary side a learning opponent and is normally discarded. The
/// tally counts from the primary (X) side's perspective.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub primary: PolicyTable,
    pub sparring: PolicyTable,
    pub tally: Tally,
}

/// Self-play trainer driving two independently-tracked value tables.
///
/// X plays from the primary table and O from the sparring table, each side
/// selecting epsilon-greedily against its own estimates. Both tables are
/// updated after every episode from the shared trace of visited states.
pub struct Trainer {
    config: TrainingConfig,
    board: Board,
    rng: StdRng,
    observers: Vec<Box<dyn Observer>>,
}

impl Trainer {
    /// Create a trainer from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the configuration violates its
    /// contract.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        let rng = build_rng(config.seed);
        Ok(Self {
            config,
            board: Board::new(),
            rng,
            observers: Vec::new(),
        })
    }

    /// Add an observer to the trainer
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the configured number of self-play episodes.
    ///
    /// # Errors
    ///
    /// Propagates observer failures; the game loop itself cannot fail.
    pub fn run(&mut self) -> Result<TrainingOutcome> {
        let episodes = self.config.episodes;
        let mut primary = PolicyTable::new();
        let mut sparring = PolicyTable::new();
        let mut trace: Vec<StateKey> = Vec::new();

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for observer in &mut self.observers {
            observer.on_run_start(episodes)?;
        }

        for episode in 0..episodes {
            let epsilon = INITIAL_EPSILON - episode as f64 / episodes as f64;
            self.board.reset(&mut self.rng);
            trace.clear();

            let outcome = loop {
                let mover = self.board.to_move();
                let table = match mover {
                    Player::X => &primary,
                    Player::O => &sparring,
                };

                let position = select(&self.board, epsilon, table, &mut self.rng);
                self.board.apply(position, mover);
                trace.push(self.board.state_key());

                match self.board.resolve(position) {
                    Outcome::Continue => {}
                    terminal => break terminal,
                }
            };

            match outcome {
                Outcome::Win(Player::X) => wins += 1,
                Outcome::Win(Player::O) => losses += 1,
                Outcome::Draw => draws += 1,
                Outcome::Continue => unreachable!("episode ended on a live position"),
            }

            let last_mover = self.board.to_move();
            let (primary_reward, sparring_reward) = terminal_rewards(outcome, last_mover);

            propagate(
                sparring_reward,
                &trace,
                &mut sparring,
                self.config.learning_rate,
                self.config.discount,
            );
            propagate(
                primary_reward,
                &trace,
                &mut primary,
                self.config.learning_rate,
                self.config.discount,
            );

            for observer in &mut self.observers {
                observer.on_episode_end(episode, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_run_end()?;
        }

        Ok(TrainingOutcome {
            primary,
            sparring,
            tally: Tally::new(episodes, wins, draws, losses),
        })
    }
}

/// Terminal rewards as (primary, sparring).
///
/// A win pays the winner's table and penalizes the loser's harder than the win
/// pays, so losses carry more weight than victories. A draw pays both sides,
/// but the side that had to fill the final cell receives less than the side
/// that was still waiting to move. The asymmetry is a deliberate shaping bias.
fn terminal_rewards(outcome: Outcome, last_mover: Player) -> (f64, f64) {
    match outcome {
        Outcome::Win(Player::X) => (WIN_REWARD, LOSS_REWARD),
        Outcome::Win(Player::O) => (LOSS_REWARD, WIN_REWARD),
        Outcome::Draw => match last_mover {
            Player::X => (DRAW_CLOSER_REWARD, DRAW_WAITER_REWARD),
            Player::O => (DRAW_WAITER_REWARD, DRAW_CLOSER_REWARD),
        },
        Outcome::Continue => unreachable!("terminal rewards requested for a live position"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(TrainingConfig::default().validate().is_ok());

        let zero_episodes = TrainingConfig {
            episodes: 0,
            ..Default::default()
        };
        assert!(zero_episodes.validate().is_err());

        let bad_rate = TrainingConfig {
            learning_rate: 0.0,
            ..Default::default()
        };
        assert!(bad_rate.validate().is_err());

        let bad_discount = TrainingConfig {
            discount: 1.5,
            ..Default::default()
        };
        assert!(bad_discount.validate().is_err());

        let inclusive_upper_bound = TrainingConfig {
            learning_rate: 1.0,
            discount: 1.0,
            ..Default::default()
        };
        assert!(inclusive_upper_bound.validate().is_ok());
    }

    #[test]
    fn test_terminal_rewards_for_wins() {
        assert_eq!(
            terminal_rewards(Outcome::Win(Player::X), Player::X),
            (WIN_REWARD, LOSS_REWARD)
        );
        assert_eq!(
            terminal_rewards(Outcome::Win(Player::O), Player::O),
            (LOSS_REWARD, WIN_REWARD)
        );
    }

    #[test]
    fn test_draw_rewards_are_asymmetric() {
        let (primary, sparring) = terminal_rewards(Outcome::Draw, Player::X);
        assert_eq!((primary, sparring), (0.2, 0.5));

        let (primary, sparring) = terminal_rewards(Outcome::Draw, Player::O);
        assert_eq!((primary, sparring), (0.5, 0.2));
    }

    #[test]
    fn test_short_run_populates_both_tables() {
        let config = TrainingConfig {
            episodes: 50,
            seed: Some(42),
            ..Default::default()
        };
        let mut trainer = Trainer::new(config).unwrap();
        let outcome = trainer.run().unwrap();

        assert!(!outcome.primary.is_empty());
        assert!(!outcome.sparring.is_empty());
        assert_eq!(outcome.tally.total, 50);
        assert_eq!(
            outcome.tally.wins + outcome.tally.draws + outcome.tally.losses,
            50
        );
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = TrainingConfig {
            episodes: 30,
            seed: Some(7),
            ..Default::default()
        };

        let first = Trainer::new(config.clone()).unwrap().run().unwrap();
        let second = Trainer::new(config).unwrap().run().unwrap();

        assert_eq!(first.primary, second.primary);
        assert_eq!(first.sparring, second.sparring);
        assert_eq!(first.tally.wins, second.tally.wins);
    }

    #[test]
    fn test_tally_rates() {
        let tally = Tally::new(10, 5, 3, 2);
        assert!((tally.win_rate - 0.5).abs() < 1e-12);
        assert!((tally.draw_rate - 0.3).abs() < 1e-12);
        assert!((tally.loss_rate - 0.2).abs() < 1e-12);

        let empty = Tally::new(0, 0, 0, 0);
        assert_eq!(empty.win_rate, 0.0);
    }
}
