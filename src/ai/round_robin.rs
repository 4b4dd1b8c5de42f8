use super::agent::Agent;
use crate::game::{GameEngine, Move, Player, COLS};

/// Cycles through the columns, starting one past the last column it played
/// and skipping full ones.
pub struct RoundRobinAgent {
    player: Player,
    engine: GameEngine,
    last_column: usize,
}

impl RoundRobinAgent {
    pub fn new() -> Self {
        RoundRobinAgent {
            player: Player::One,
            engine: GameEngine::new(),
            last_column: 0,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

impl Default for RoundRobinAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RoundRobinAgent {
    fn name(&self) -> &str {
        "RoundRobin"
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
        self.last_column = 0;
    }

    fn get_move(&mut self) -> Move {
        let next = (1..=COLS)
            .map(|step| (self.last_column + step) % COLS)
            .find(|&col| !self.engine.is_column_full(col));

        let mv = match next {
            Some(col) => {
                self.last_column = col;
                Move::Column(col)
            }
            None => Move::Resign,
        };
        self.engine.play(mv);
        mv
    }
}
