//! End-to-end training and evaluation sanity checks.

use tempfile::TempDir;
use valueplay::{
    Player,
    adapters::MsgPackStore,
    pipeline::{EvaluationConfig, Evaluator, Trainer, TrainingConfig},
    ports::PolicyStore,
};

#[test]
fn training_learns_to_beat_a_random_opponent() {
    let config = TrainingConfig {
        episodes: 1_000,
        seed: Some(97),
        ..Default::default()
    };
    let outcome = Trainer::new(config).unwrap().run().unwrap();

    assert!(!outcome.primary.is_empty(), "training produced no states");
    assert_eq!(outcome.tally.total, 1_000);

    let eval_config = EvaluationConfig {
        games: 200,
        tally: Player::X,
        seed: Some(98),
    };
    let tally = Evaluator::new(eval_config)
        .unwrap()
        .run(&outcome.primary)
        .unwrap();

    assert_eq!(tally.total, 200);
    // Random-vs-random is an even matchup, so learning shows up as a
    // strict win/loss imbalance in the trained side's favor.
    assert!(
        tally.wins > tally.losses,
        "trained side did not beat the random baseline: {} wins vs {} losses",
        tally.wins,
        tally.losses
    );
}

#[test]
fn persisted_policy_evaluates_identically_after_reload() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("policy.msgpack");

    let config = TrainingConfig {
        episodes: 300,
        seed: Some(5),
        ..Default::default()
    };
    let outcome = Trainer::new(config).unwrap().run().unwrap();

    let store = MsgPackStore::new();
    store.save(&outcome.primary, &path).unwrap();
    let reloaded = store.load(&path).unwrap();
    assert_eq!(reloaded, outcome.primary);

    let eval_config = EvaluationConfig {
        games: 50,
        tally: Player::X,
        seed: Some(6),
    };
    let fresh = Evaluator::new(eval_config.clone())
        .unwrap()
        .run(&outcome.primary)
        .unwrap();
    let persisted = Evaluator::new(eval_config).unwrap().run(&reloaded).unwrap();

    assert_eq!(fresh.wins, persisted.wins);
    assert_eq!(fresh.draws, persisted.draws);
    assert_eq!(fresh.losses, persisted.losses);
}
