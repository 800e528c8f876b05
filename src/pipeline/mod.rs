//! Training and evaluation pipelines

pub mod evaluation;
pub mod observers;
pub mod training;

use rand::{SeedableRng, rngs::StdRng};

pub use evaluation::{EvaluationConfig, Evaluator};
pub use observers::ProgressObserver;
pub use training::{Tally, Trainer, TrainingConfig, TrainingOutcome};

pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}
