//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tictactoe::Cell;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// A validated board-state key.
///
/// The key is the concatenation of the nine cell symbols in index order and is
/// the sole identity used for value lookups: two boards with identical cell
/// contents always produce equal keys, regardless of the move order that
/// reached them.
///
/// # Examples
///
/// ```
/// use valueplay::{Board, StateKey};
///
/// let board = Board::new();
/// assert_eq!(board.state_key(), StateKey::parse(".........").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey(String);

impl StateKey {
    /// Parse and validate a state key from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly nine cells long or
    /// contains a character other than `X`, `O`, or `.`.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        for (i, &c) in chars.iter().enumerate() {
            if !matches!(c, 'X' | 'O' | '.') {
                return Err(crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                });
            }
        }

        Ok(StateKey(s.to_string()))
    }

    /// Build a key directly from cell contents (unchecked, for internal use).
    pub(crate) fn from_cells(cells: &[Cell; BOARD_CELLS]) -> Self {
        StateKey(cells.iter().map(|&c| c.to_char()).collect())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for StateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
