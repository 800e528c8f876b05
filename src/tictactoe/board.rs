//! Board state representation and last-move outcome resolution

use std::fmt;

use rand::Rng;

use super::lines::LINES_THROUGH;
use crate::types::{BOARD_CELLS, StateKey};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Result of resolving the most recent move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Player),
    Draw,
    Continue,
}

impl Outcome {
    /// Whether the game ended with this outcome
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Mutable board state: cells, whose turn it is, and the open cells.
///
/// The open-cell list is kept in index order and only ever shrinks within an
/// episode; [`Board::reset`] restores it to all nine indices.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
    to_move: Player,
    available: Vec<usize>,
}

impl Board {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        Self::new_with_player(Player::X)
    }

    /// Create a new empty board with a specified player to move first
    pub fn new_with_player(first_player: Player) -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
            to_move: first_player,
            available: (0..BOARD_CELLS).collect(),
        }
    }

    /// Clear the board for a fresh episode.
    ///
    /// All cells become empty, every index is open again, and the starting
    /// player is drawn uniformly at random.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.cells = [Cell::Empty; BOARD_CELLS];
        self.available = (0..BOARD_CELLS).collect();
        self.to_move = if rng.random::<bool>() {
            Player::X
        } else {
            Player::O
        };
    }

    /// The player whose turn it is.
    ///
    /// After a terminal [`resolve`](Self::resolve) this remains the player who
    /// made the final move; the turn only toggles on `Continue`.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Open cell indices, in index order
    pub fn available(&self) -> &[usize] {
        &self.available
    }

    /// Get cell at position (0-8)
    pub fn get(&self, position: usize) -> Cell {
        self.cells[position]
    }

    /// Check whether a position is in range and unoccupied
    pub fn is_open(&self, position: usize) -> bool {
        position < BOARD_CELLS && self.cells[position] == Cell::Empty
    }

    /// Place `player`'s mark at `position`.
    ///
    /// The position must be open. Violating that is a caller bug, not a
    /// recoverable condition, and fails the precondition assertion; boundaries
    /// that accept untrusted input validate before calling
    /// (see [`MatchSession::apply_move`](crate::session::MatchSession::apply_move)).
    pub fn apply(&mut self, position: usize, player: Player) {
        assert!(
            self.available.contains(&position),
            "apply precondition violated: position {position} is not available"
        );
        self.cells[position] = player.to_cell();
    }

    /// Resolve the outcome of the most recent move.
    ///
    /// Only the lines through `last_move` are inspected, and the check happens
    /// before any turn-state mutation so a win is attributed to the player who
    /// just moved. On a non-win the cell leaves the open list; an empty open
    /// list is a draw, otherwise the turn passes to the opponent.
    pub fn resolve(&mut self, last_move: usize) -> Outcome {
        let mover = self.to_move;
        let mark = mover.to_cell();

        for line in LINES_THROUGH[last_move] {
            if line.iter().all(|&idx| self.cells[idx] == mark) {
                return Outcome::Win(mover);
            }
        }

        self.available.retain(|&p| p != last_move);
        if self.available.is_empty() {
            Outcome::Draw
        } else {
            self.to_move = mover.opponent();
            Outcome::Continue
        }
    }

    /// The canonical nine-character key for the current position
    pub fn state_key(&self) -> StateKey {
        StateKey::from_cells(&self.cells)
    }

    /// The key the board would have after `player` marked `position`.
    ///
    /// The board itself is left untouched; this is the lookahead used by
    /// greedy action selection.
    pub fn preview_key(&self, position: usize, player: Player) -> StateKey {
        debug_assert!(
            self.cells[position] == Cell::Empty,
            "preview of an occupied cell"
        );
        let mut cells = self.cells;
        cells[position] = player.to_cell();
        StateKey::from_cells(&cells)
    }

    /// Create a board from a string representation.
    ///
    /// The string contains nine cell characters (`.` or space for empty) and
    /// may carry a `_X`/`_O` suffix naming the player to move; without a
    /// suffix the player with fewer marks moves next, defaulting to X. No
    /// alternation validation is performed, so test positions that never arose
    /// from real play parse fine.
    ///
    /// # Errors
    ///
    /// Returns error if the board part is not nine characters, a character is
    /// not a valid cell, or the suffix names an unknown player.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let (board_part, suffix) = match s.split_once('_') {
            Some((board, suffix)) => (board, Some(suffix)),
            None => (s, None),
        };

        let chars: Vec<char> = board_part.chars().collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let to_move = match suffix {
            Some("X") => Player::X,
            Some("O") => Player::O,
            Some(other) => {
                return Err(crate::Error::InvalidPlayerString {
                    player: other.to_string(),
                    context: s.to_string(),
                });
            }
            None => {
                let x_count = cells.iter().filter(|&&c| c == Cell::X).count();
                let o_count = cells.iter().filter(|&&c| c == Cell::O).count();
                if o_count < x_count { Player::O } else { Player::X }
            }
        };

        let available = cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == Cell::Empty)
            .map(|(i, _)| i)
            .collect();

        Ok(Board {
            cells,
            to_move,
            available,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
