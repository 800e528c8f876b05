//! CLI subcommands

pub mod evaluate;
pub mod play;
pub mod train;

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Player::X),
        "o" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_token() {
        assert_eq!(parse_player_token("x", "--tally").unwrap(), Player::X);
        assert_eq!(parse_player_token("O", "--tally").unwrap(), Player::O);
        assert!(parse_player_token("q", "--tally").is_err());
    }
}
