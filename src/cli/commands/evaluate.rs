//! Evaluate command - play a trained table against a random opponent

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use super::parse_player_token;
use crate::{
    adapters::MsgPackStore,
    pipeline::{EvaluationConfig, Evaluator, ProgressObserver, Tally},
    ports::PolicyStore,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a trained policy against a random opponent")]
pub struct EvaluateArgs {
    /// Path to the trained policy store
    pub policy: PathBuf,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Which side's wins to tally (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub tally: String,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    pub progress: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EvaluationExport {
    policy: String,
    opponent: String,
    tally_side: String,
    evaluation: Tally,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let tally_side = parse_player_token(&args.tally, "--tally")?;

    println!("Loading policy from: {}", args.policy.display());
    let store = MsgPackStore::new();
    let table = store.load(&args.policy)?;
    println!("Loaded {} states", table.len());
    if table.is_empty() {
        println!("Note: the table is empty; play falls back to first-open-cell moves");
    }

    let config = EvaluationConfig {
        games: args.games,
        tally: tally_side,
        seed: args.seed,
    };

    let mut evaluator = Evaluator::new(config)?;
    if args.progress {
        evaluator = evaluator.with_observer(Box::new(ProgressObserver::new()));
    }

    println!("\n=== Running Evaluation ===");
    println!("Games: {} (tallying {tally_side:?} wins)", args.games);
    let result = evaluator.run(&table)?;

    println!("\n=== Evaluation Results ===");
    println!("Total games: {}", result.total);
    println!("Wins: {} ({:.1}%)", result.wins, result.win_rate * 100.0);
    println!("Draws: {} ({:.1}%)", result.draws, result.draw_rate * 100.0);
    println!(
        "Losses: {} ({:.1}%)",
        result.losses,
        result.loss_rate * 100.0
    );

    if let Some(export_path) = &args.export {
        let export = EvaluationExport {
            policy: args.policy.display().to_string(),
            opponent: "random".to_string(),
            tally_side: format!("{tally_side:?}"),
            evaluation: result,
        };

        let file = File::create(export_path)
            .with_context(|| format!("Failed to create export file {}", export_path.display()))?;
        serde_json::to_writer_pretty(file, &export)?;
        println!("\n✓ Results exported to: {}", export_path.display());
    }

    Ok(())
}
