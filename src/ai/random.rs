use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::agent::Agent;
use crate::game::{GameEngine, Move, Player};

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    player: Player,
    engine: GameEngine,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Reproducible agent for tests and seeded tournaments.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        RandomAgent {
            player: Player::One,
            engine: GameEngine::new(),
            rng,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
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
    }

    fn get_move(&mut self) -> Move {
        let mv = match self.engine.legal_columns().choose(&mut self.rng) {
            Some(&col) => Move::Column(col),
            None => Move::Resign,
        };
        self.engine.play(mv);
        mv
    }
}
