//! valueplay CLI - train, evaluate, and play against a self-play value table

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "valueplay")]
#[command(version, about = "Self-play TD trainer for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the self-play value tables and persist the primary one
    Train(valueplay::cli::commands::train::TrainArgs),

    /// Evaluate a trained policy against a random opponent
    Evaluate(valueplay::cli::commands::evaluate::EvaluateArgs),

    /// Play a console game against a trained policy
    Play(valueplay::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => valueplay::cli::commands::train::execute(args),
        Commands::Evaluate(args) => valueplay::cli::commands::evaluate::execute(args),
        Commands::Play(args) => valueplay::cli::commands::play::execute(args),
    }
}
