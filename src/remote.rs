//! Adapter for the networked variant: a server posts the whole board on
//! every turn and expects a 1-indexed column back, then reports the outcome
//! once the match is over.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::Agent;
use crate::error::WireError;
use crate::game::{Board, Cell, GameEngine, Move, Player, COLS, ROWS};

/// A move request: the board as columns of cells (row 0 at the bottom,
/// `null`, `1` or `2`) and the id of the player to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: Vec<Vec<Option<u8>>>,
    pub player: u8,
}

impl MoveRequest {
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Request describing the position of `engine`.
    pub fn from_engine(engine: &GameEngine) -> Self {
        let board = engine.board();
        let columns = (0..COLS)
            .map(|col| {
                (0..ROWS)
                    .map(|row| match board.get(col, row) {
                        Cell::Empty => None,
                        Cell::One => Some(Player::One.id()),
                        Cell::Two => Some(Player::Two.id()),
                    })
                    .collect()
            })
            .collect();
        MoveRequest {
            board: columns,
            player: engine.current_player().id(),
        }
    }

    /// Validate the request and build the position it describes.
    pub fn to_engine(&self) -> Result<GameEngine, WireError> {
        let bad_shape = WireError::BadShape {
            expected_cols: COLS,
            expected_rows: ROWS,
        };
        if self.board.len() != COLS || self.board.iter().any(|c| c.len() != ROWS) {
            return Err(bad_shape);
        }

        let mut columns = [[Cell::Empty; ROWS]; COLS];
        for (col, column) in self.board.iter().enumerate() {
            for (row, value) in column.iter().enumerate() {
                columns[col][row] = match value {
                    None => Cell::Empty,
                    Some(id) => Player::from_id(*id)
                        .map(Player::to_cell)
                        .ok_or(WireError::BadCell {
                            col,
                            row,
                            value: *id,
                        })?,
                };
            }
        }

        let board = Board::from_columns(columns).map_err(WireError::FloatingPiece)?;
        let player = Player::from_id(self.player).ok_or(WireError::BadPlayer(self.player))?;
        Ok(GameEngine::from_position(board, player))
    }
}

/// Outcome notification sent once a match ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeNotice {
    pub win: u8,
}

impl OutcomeNotice {
    pub fn did_win(self) -> bool {
        self.win == 1
    }
}

/// Wraps any agent so it can answer stateless move requests.
///
/// The wrapper decides when a new match has started: on the first request,
/// after an outcome notice, when fewer pieces are on the board than in the
/// previous request, or when the agent is asked to play the other side.
pub struct RemoteAgent<A: Agent> {
    agent: A,
    seat: Option<Player>,
    last_pieces: Option<usize>,
}

impl<A: Agent> RemoteAgent<A> {
    pub fn new(agent: A) -> Self {
        RemoteAgent {
            agent,
            seat: None,
            last_pieces: None,
        }
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Choose a column for the posted position, 1-indexed.
    pub fn decide_move(&mut self, request: &MoveRequest) -> Result<usize, WireError> {
        let engine = request.to_engine()?;
        let player = engine.current_player();
        let pieces = engine.board().piece_count();

        let new_match = match self.last_pieces {
            None => true,
            Some(last) => pieces < last || self.seat != Some(player),
        };
        if new_match {
            debug!(%player, pieces, "starting new remote match");
            self.agent.reset(player);
            self.seat = Some(player);
        }
        self.last_pieces = Some(pieces);

        self.agent.sync(engine);
        match self.agent.get_move() {
            Move::Column(col) => Ok(col + 1),
            Move::Resign => Err(WireError::Resigned),
        }
    }

    /// Decode a JSON request and answer with the column as JSON.
    pub fn decide_move_json(&mut self, json: &str) -> Result<String, WireError> {
        let request = MoveRequest::from_json(json)?;
        let column = self.decide_move(&request)?;
        Ok(serde_json::to_string(&column)?)
    }

    /// Report the finished match to the agent.
    pub fn notify_outcome(&mut self, did_win: bool) {
        self.agent.notify_outcome(did_win);
        self.last_pieces = None;
        self.seat = None;
    }
}
