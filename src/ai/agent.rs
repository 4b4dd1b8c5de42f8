use super::experience::ExperienceStore;
use crate::game::{GameEngine, Move, Player};

/// Universal interface for all move-selection strategies.
///
/// Every agent keeps a private [`GameEngine`] mirroring the match. The
/// driver tells it about the opponent's moves; the agent applies its own
/// moves itself when it picks them.
pub trait Agent {
    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// The agent's private view of the match.
    fn engine(&self) -> &GameEngine;

    fn engine_mut(&mut self) -> &mut GameEngine;

    /// Start a new match playing as `player`, with a fresh mirror.
    fn reset(&mut self, player: Player);

    /// Choose a move, apply it to the mirror and return it.
    fn get_move(&mut self) -> Move;

    /// Apply a move made by the other side.
    fn opponent_moved(&mut self, mv: Move) {
        self.engine_mut().play(mv);
    }

    /// Replace the mirror with a position received from elsewhere.
    fn sync(&mut self, engine: GameEngine) {
        *self.engine_mut() = engine;
    }

    /// Outcome report from a runner that does not relay the final move.
    fn notify_outcome(&mut self, _won: bool) {}

    /// Learned state worth persisting, if the strategy has any.
    fn experience(&self) -> Option<&ExperienceStore> {
        None
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn engine(&self) -> &GameEngine {
        (**self).engine()
    }

    fn engine_mut(&mut self) -> &mut GameEngine {
        (**self).engine_mut()
    }

    fn reset(&mut self, player: Player) {
        (**self).reset(player)
    }

    fn get_move(&mut self) -> Move {
        (**self).get_move()
    }

    fn opponent_moved(&mut self, mv: Move) {
        (**self).opponent_moved(mv)
    }

    fn sync(&mut self, engine: GameEngine) {
        (**self).sync(engine)
    }

    fn notify_outcome(&mut self, won: bool) {
        (**self).notify_outcome(won)
    }

    fn experience(&self) -> Option<&ExperienceStore> {
        (**self).experience()
    }
}
