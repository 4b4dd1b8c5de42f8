use std::fmt;

use super::{Board, Cell, Player, COLS, ROWS};
use crate::error::MoveError;

/// A single ply: drop a piece in a column, or give up the game.
///
/// Column indices are not validated on construction; playing an
/// out-of-range column puts the engine in the error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Column(usize),
    Resign,
}

impl Move {
    /// Reflect a column move left to right. Resignation is unchanged.
    pub fn mirrored(self) -> Move {
        match self {
            Move::Column(col) if col < COLS => Move::Column(COLS - 1 - col),
            other => other,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Column(col) => write!(f, "column {col}"),
            Move::Resign => write!(f, "resign"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(Player),
    Tie,
    Error(MoveError),
}

impl GameStatus {
    pub fn is_ongoing(self) -> bool {
        self == GameStatus::Ongoing
    }
}

/// Reversible Connect Four state machine.
///
/// Every applied move is kept in the history so that [`GameEngine::undo`]
/// can restore the previous position exactly, including after a win, a tie,
/// an illegal move or a resignation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameEngine {
    /// Empty board, player One to move
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::Ongoing,
            history: Vec::new(),
        }
    }

    /// Start from an arbitrary position with no history to undo into.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        GameEngine {
            board,
            current_player: to_move,
            status: GameStatus::Ongoing,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move while the game is ongoing. Once the game is won
    /// this is the winner; after an error it is the player who erred.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.board.is_column_full(col)
    }

    /// Columns that still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        self.board.open_columns()
    }

    /// Apply a move for the current player and return the resulting status.
    ///
    /// Playing on a finished game returns `Error(GameOver)` and changes
    /// nothing. Any other move is recorded in the history, even when it is
    /// illegal, so that `undo` can step back out of the error state.
    pub fn play(&mut self, mv: Move) -> GameStatus {
        if !self.status.is_ongoing() {
            return GameStatus::Error(MoveError::GameOver);
        }
        self.history.push(mv);

        let col = match mv {
            Move::Resign => {
                self.current_player = self.current_player.other();
                self.status = GameStatus::Won(self.current_player);
                return self.status;
            }
            Move::Column(col) => col,
        };

        let row = match self.board.drop_piece(col, self.current_player.to_cell()) {
            Ok(row) => row,
            Err(reason) => {
                self.status = GameStatus::Error(reason);
                return self.status;
            }
        };

        if self.board.check_win(col, row) {
            self.status = GameStatus::Won(self.current_player);
        } else if self.board.is_full() {
            self.status = GameStatus::Tie;
        } else {
            self.current_player = self.current_player.other();
        }
        self.status
    }

    /// Take back the last move. Always leaves the game ongoing, unless there
    /// was nothing to undo.
    pub fn undo(&mut self) {
        let Some(mv) = self.history.pop() else {
            return;
        };

        match mv {
            Move::Resign => self.current_player = self.current_player.other(),
            Move::Column(col) => {
                // an erroring move never reached the board
                if !matches!(self.status, GameStatus::Error(_)) {
                    self.board.lift_piece(col);
                    if self.status.is_ongoing() {
                        self.current_player = self.current_player.other();
                    }
                }
            }
        }
        self.status = GameStatus::Ongoing;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            GameStatus::Won(winner) => writeln!(f, "Player {winner} won:")?,
            GameStatus::Error(reason) => {
                writeln!(f, "Got error from player {}", self.current_player)?;
                writeln!(f, "reason: {reason}")?;
            }
            GameStatus::Tie => writeln!(f, "Tie:")?,
            GameStatus::Ongoing => {}
        }
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.board.get(col, row) {
                    Cell::Empty => ' ',
                    Cell::One => '1',
                    Cell::Two => '2',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
