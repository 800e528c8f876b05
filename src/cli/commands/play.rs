//! Play command - console game against the trained policy

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use super::parse_player_token;
use crate::{
    adapters::MsgPackStore,
    ports::PolicyStore,
    session::MatchSession,
    tictactoe::{Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a console game against the trained policy")]
pub struct PlayArgs {
    /// Path to the trained policy store
    pub policy: PathBuf,

    /// Which side the computer plays (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub computer: String,

    /// Which side makes the first move (`x` or `o`)
    #[arg(long, default_value = "x")]
    pub first: String,
}

fn read_human_move() -> Result<usize> {
    print!("Enter cell (1-9): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read move from stdin")?;

    let entered: usize = line
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a number between 1 and 9", line.trim()))?;
    if !(1..=9).contains(&entered) {
        anyhow::bail!("'{entered}' is not between 1 and 9");
    }

    Ok(entered - 1)
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let computer = parse_player_token(&args.computer, "--computer")?;
    let first = parse_player_token(&args.first, "--first")?;

    let store = MsgPackStore::new();
    let table = store.load(&args.policy)?;
    println!("Loaded {} states", table.len());

    let mut session = MatchSession::new(table).with_first_player(first);
    println!("You play {:?}; the computer plays {computer:?}\n", computer.opponent());

    loop {
        let mover = session.board().to_move();
        let position = if mover == computer {
            let position = session.select_move()?;
            println!("Computer plays cell {}", position + 1);
            position
        } else {
            match read_human_move() {
                Ok(position) => position,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            }
        };

        if let Err(e) = session.apply_move(position, mover) {
            println!("{e}");
            continue;
        }

        println!("{}\n", session.board());

        match session.evaluate_outcome(position) {
            Outcome::Win(Player::X) => {
                println!("X wins!");
                break;
            }
            Outcome::Win(Player::O) => {
                println!("O wins!");
                break;
            }
            Outcome::Draw => {
                println!("Draw!");
                break;
            }
            Outcome::Continue => {}
        }
    }

    Ok(())
}
