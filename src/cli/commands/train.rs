//! Train command - run self-play and persist the primary table

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    adapters::MsgPackStore,
    pipeline::{ProgressObserver, Tally, Trainer, TrainingConfig},
    ports::PolicyStore,
};

#[derive(Parser, Debug)]
#[command(about = "Train the self-play value tables")]
pub struct TrainArgs {
    /// Number of self-play episodes
    #[arg(long, short = 'e', default_value_t = 100_000)]
    pub episodes: usize,

    /// Learning rate alpha, in (0, 1]
    #[arg(long, default_value_t = 0.5)]
    pub learning_rate: f64,

    /// Discount factor gamma, in (0, 1]
    #[arg(long, default_value_t = 0.9)]
    pub discount: f64,

    /// Where to persist the trained primary table
    #[arg(long, short = 'O', default_value = "policy.msgpack")]
    pub output: PathBuf,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,

    /// Optional path for a JSON training summary
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    training: Tally,
    episodes: usize,
    learning_rate: f64,
    discount: f64,
    seed: Option<u64>,
    stored_states: usize,
    output: String,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = TrainingConfig {
        episodes: args.episodes,
        learning_rate: args.learning_rate,
        discount: args.discount,
        seed: args.seed,
    };

    let mut trainer = Trainer::new(config)?;
    if args.progress {
        trainer = trainer.with_observer(Box::new(ProgressObserver::new()));
    }

    let outcome = trainer.run()?;
    let tally = &outcome.tally;

    println!("\n=== Training Complete ===");
    println!("Episodes: {}", tally.total);
    println!("X wins: {} ({:.1}%)", tally.wins, tally.win_rate * 100.0);
    println!("Draws: {} ({:.1}%)", tally.draws, tally.draw_rate * 100.0);
    println!("O wins: {} ({:.1}%)", tally.losses, tally.loss_rate * 100.0);

    let store = MsgPackStore::new();
    store.save(&outcome.primary, &args.output)?;
    println!(
        "\n✓ Policy saved to: {} ({} states)",
        args.output.display(),
        outcome.primary.len()
    );

    if let Some(summary_path) = args.summary {
        let summary = TrainingSummaryFile {
            training: outcome.tally.clone(),
            episodes: args.episodes,
            learning_rate: args.learning_rate,
            discount: args.discount,
            seed: args.seed,
            stored_states: outcome.primary.len(),
            output: args.output.display().to_string(),
        };

        let file = File::create(&summary_path)
            .with_context(|| format!("Failed to create summary file {}", summary_path.display()))?;
        serde_json::to_writer_pretty(file, &summary)?;
        println!("Summary written to {}", summary_path.display());
    }

    Ok(())
}
