//! Winning line tables for the 3x3 board

/// All winning line indices
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Winning lines passing through each cell.
///
/// A win line, if any, must include the last-placed cell, so checking a move's
/// outcome only needs these lines rather than a full-board scan.
pub const LINES_THROUGH: [&[[usize; 3]]; 9] = [
    &[[0, 1, 2], [0, 3, 6], [0, 4, 8]],
    &[[0, 1, 2], [1, 4, 7]],
    &[[0, 1, 2], [2, 5, 8], [2, 4, 6]],
    &[[3, 4, 5], [0, 3, 6]],
    &[[3, 4, 5], [1, 4, 7], [0, 4, 8], [2, 4, 6]],
    &[[3, 4, 5], [2, 5, 8]],
    &[[6, 7, 8], [0, 3, 6], [2, 4, 6]],
    &[[6, 7, 8], [1, 4, 7]],
    &[[6, 7, 8], [2, 5, 8], [0, 4, 8]],
];
