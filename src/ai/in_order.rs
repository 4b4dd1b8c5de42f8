use super::agent::Agent;
use crate::game::{GameEngine, Move, Player, COLS};

/// Fills the board from the left: always plays the lowest open column at
/// or after its cursor. The cursor only moves forward.
pub struct InOrderAgent {
    player: Player,
    engine: GameEngine,
    cursor: usize,
}

impl InOrderAgent {
    pub fn new() -> Self {
        InOrderAgent {
            player: Player::One,
            engine: GameEngine::new(),
            cursor: 0,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

impl Default for InOrderAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for InOrderAgent {
    fn name(&self) -> &str {
        "InOrder"
    }

    fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    fn reset(&mut self, player: Player) {
        self.player = player;
        self.engine = GameEngine::new();
        self.cursor = 0;
    }

    fn get_move(&mut self) -> Move {
        while self.cursor < COLS && self.engine.is_column_full(self.cursor) {
            self.cursor += 1;
        }
        let mv = if self.cursor < COLS {
            Move::Column(self.cursor)
        } else {
            Move::Resign
        };
        self.engine.play(mv);
        mv
    }
}
