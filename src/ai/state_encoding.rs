use serde::{Deserialize, Serialize};

use crate::game::{Board, Cell, COLS, ROWS};

/// Board encoded as 42 characters, column by column, each column read
/// bottom to top: `.` for empty, `1` and `2` for pieces.
///
/// A position and its left-right reflection may share one key; see
/// [`Orientation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardKey(String);

impl BoardKey {
    pub fn of(board: &Board) -> Self {
        BoardKey(board.cells().map(cell_symbol).collect())
    }

    /// Key of the board reflected left to right.
    pub fn mirror_of(board: &Board) -> Self {
        Self::of(&board.mirrored())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `col` could take a piece in the encoded position.
    pub fn is_open(&self, col: usize) -> bool {
        col < COLS && self.as_str().as_bytes().get(col * ROWS + ROWS - 1) == Some(&b'.')
    }
}

impl std::fmt::Display for BoardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::One => '1',
        Cell::Two => '2',
    }
}

/// How a board relates to the canonical key it was looked up under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Direct,
    Mirrored,
}

impl Orientation {
    /// Translate a column between the canonical and the actual board. The
    /// mapping is its own inverse.
    pub fn apply(self, col: usize) -> usize {
        match self {
            Orientation::Direct => col,
            Orientation::Mirrored => COLS - 1 - col,
        }
    }
}
