//! Interactive play boundary for external frontends.
//!
//! A frontend (console loop, GUI, ...) holds a `MatchSession` by composition
//! and drives it through `select_move`, `apply_move`, and `evaluate_outcome`.
//! The session validates untrusted moves before they reach the core and keeps
//! all rendering concerns out of the crate.

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Result,
    error::Error,
    learning::{PolicyTable, select},
    tictactoe::{Board, Outcome, Player},
};

/// One game driven by an external frontend against a loaded policy.
pub struct MatchSession {
    board: Board,
    table: PolicyTable,
    rng: StdRng,
    finished: bool,
}

impl MatchSession {
    /// Start a session over a loaded table, X to move
    pub fn new(table: PolicyTable) -> Self {
        Self {
            board: Board::new(),
            table,
            rng: StdRng::from_rng(&mut rand::rng()),
            finished: false,
        }
    }

    /// Seed the session's random number generator
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start a session with a chosen first player
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.board = Board::new_with_player(player);
        self
    }

    /// Read access to the board for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether a terminal outcome has been observed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pick a move for the active player from the loaded table.
    ///
    /// Exploration is forced off, so the choice is the deterministic greedy
    /// one: the first open cell whose resulting position has the highest
    /// stored value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once a terminal outcome was observed.
    pub fn select_move(&mut self) -> Result<usize> {
        if self.finished {
            return Err(Error::GameOver);
        }
        Ok(select(&self.board, 0.0, &self.table, &mut self.rng))
    }

    /// Place `player`'s mark at `position`.
    ///
    /// This is the validating boundary: out-of-range and occupied positions
    /// are rejected here so they never reach the core's preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] after a terminal outcome and
    /// [`Error::InvalidMove`] for an unplayable position.
    pub fn apply_move(&mut self, position: usize, player: Player) -> Result<()> {
        if self.finished {
            return Err(Error::GameOver);
        }
        if !self.board.is_open(position) {
            return Err(Error::InvalidMove { position });
        }
        self.board.apply(position, player);
        Ok(())
    }

    /// Resolve the outcome of the most recent move.
    ///
    /// A terminal outcome finishes the session; further moves are rejected.
    pub fn evaluate_outcome(&mut self, position: usize) -> Outcome {
        let outcome = self.board.resolve(position);
        if outcome.is_terminal() {
            self.finished = true;
        }
        outcome
    }
}
