use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::agent::Agent;
use crate::error::MoveError;
use crate::game::{GameEngine, GameStatus, Move, Player, COLS};

const WIN: f64 = 1.0;
const LOSS: f64 = 0.0;
/// Score of a tie, and of any position past the search horizon.
const NEUTRAL: f64 = 0.5;

/// Relative tolerance for treating two scores as equal.
const SCORE_TOLERANCE: f64 = 1e-9;

/// Depth-limited search that scores each column by the average outcome of
/// every continuation, assuming both sides move uniformly at random.
///
/// The search plays and undoes moves on the agent's own mirror; it never
/// copies the board.
pub struct LookaheadAgent {
    depth: usize,
    player: Player,
    engine: GameEngine,
    rng: StdRng,
}

impl LookaheadAgent {
    /// `depth` is the number of plies searched past the candidate move.
    /// At depth 0 only the immediate result of each column is considered.
    pub fn new(depth: usize) -> Self {
        Self::with_rng(depth, StdRng::from_os_rng())
    }

    pub fn with_seed(depth: usize, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }

    fn with_rng(depth: usize, rng: StdRng) -> Self {
        LookaheadAgent {
            depth,
            player: Player::One,
            engine: GameEngine::new(),
            rng,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// Expected outcome of playing `col` now, from this agent's point of
    /// view, or `None` if the column cannot be played.
    pub fn score(&mut self, col: usize, depth: usize) -> Option<f64> {
        let status = self.engine.play(Move::Column(col));
        let score = match status {
            GameStatus::Won(winner) if winner == self.player => Some(WIN),
            GameStatus::Won(_) => Some(LOSS),
            GameStatus::Tie => Some(NEUTRAL),
            GameStatus::Ongoing if depth > 0 => Some(self.average_reply(depth - 1)),
            GameStatus::Ongoing => Some(NEUTRAL),
            // nothing was recorded, so there is nothing to undo
            GameStatus::Error(MoveError::GameOver) => return None,
            GameStatus::Error(_) => None,
        };
        self.engine.undo();
        score
    }

    fn average_reply(&mut self, depth: usize) -> f64 {
        let scores: Vec<f64> = (0..COLS)
            .filter_map(|col| self.score(col, depth))
            .collect();
        if scores.is_empty() {
            return NEUTRAL;
        }
        scores.iter().sum::<f64>() / scores.len() as f64
    }

    /// Scores of all seven columns at the configured depth.
    pub fn evaluate(&mut self) -> [Option<f64>; COLS] {
        let depth = self.depth;
        std::array::from_fn(|col| self.score(col, depth))
    }

    /// Every column whose score ties the best one.
    pub fn best_columns(&mut self) -> Vec<usize> {
        let scores = self.evaluate();
        let best = scores.iter().flatten().copied().fold(f64::NEG_INFINITY, f64::max);
        scores
            .iter()
            .enumerate()
            .filter_map(|(col, score)| score.filter(|&s| is_close(s, best)).map(|_| col))
            .collect()
    }
}

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= SCORE_TOLERANCE * a.abs().max(b.abs())
}

impl Agent for LookaheadAgent {
    fn name(&self) -> &str {
        "Lookahead"
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
        let candidates = self.best_columns();
        let mv = match candidates.choose(&mut self.rng) {
            Some(&col) => Move::Column(col),
            None => Move::Resign,
        };
        self.engine.play(mv);
        mv
    }
}
