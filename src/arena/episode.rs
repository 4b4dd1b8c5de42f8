use tracing::{debug, error};

use crate::ai::Agent;
use crate::game::{GameEngine, GameStatus, Player};

/// How a single match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Winner(Player),
    Tie,
    /// An agent produced an illegal move; the match was aborted.
    Error,
}

impl MatchResult {
    /// Numeric outcome: the winner's id, 0 for a tie, -1 for an error.
    pub fn code(self) -> i8 {
        match self {
            MatchResult::Winner(player) => player.id() as i8,
            MatchResult::Tie => 0,
            MatchResult::Error => -1,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            MatchResult::Winner(player) => Some(player),
            _ => None,
        }
    }
}

/// Result of playing a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub result: MatchResult,
    /// Moves applied to the authoritative engine, resignations and the
    /// offending move of an error included.
    pub plies: usize,
}

/// Play one match, `one` moving first.
///
/// Every move is applied to the authoritative engine and then relayed to
/// the other agent, the final one included, so both mirrors end on the
/// finished position.
pub fn play_match(one: &mut dyn Agent, two: &mut dyn Agent) -> MatchRecord {
    one.reset(Player::One);
    two.reset(Player::Two);

    let mut engine = GameEngine::new();
    while engine.status().is_ongoing() {
        let mover = engine.current_player();
        let mv = match mover {
            Player::One => one.get_move(),
            Player::Two => two.get_move(),
        };
        engine.play(mv);
        match mover {
            Player::One => two.opponent_moved(mv),
            Player::Two => one.opponent_moved(mv),
        }
    }

    let result = match engine.status() {
        GameStatus::Won(winner) => MatchResult::Winner(winner),
        GameStatus::Tie => MatchResult::Tie,
        GameStatus::Error(reason) => {
            error!(
                player = %engine.current_player(),
                %reason,
                "match aborted on illegal move\n{engine}"
            );
            MatchResult::Error
        }
        GameStatus::Ongoing => unreachable!("loop exits only on a finished game"),
    };

    let plies = engine.history().len();
    debug!(
        one = one.name(),
        two = two.name(),
        code = result.code(),
        plies,
        "match finished"
    );

    MatchRecord { result, plies }
}

/// Derive a deterministic seed for a given agent or match index.
pub fn derive_seed(base: u64, index: usize) -> u64 {
    let index = index as u64;
    let mut hash = base ^ 0x517c_c1b7_2722_0a95;
    hash = hash.wrapping_mul(0x0100_0000_01b3);
    hash ^= index;
    hash = hash.wrapping_mul(0x0100_0000_01b3);
    hash ^= index >> 32;
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{InOrderAgent, LookaheadAgent, RandomAgent, RoundRobinAgent};
    use crate::game::Move;

    /// Plays a fixed list of moves, then resigns.
    struct Scripted {
        engine: GameEngine,
        moves: Vec<Move>,
        next: usize,
    }

    impl Scripted {
        fn new(moves: Vec<Move>) -> Self {
            Scripted {
                engine: GameEngine::new(),
                moves,
                next: 0,
            }
        }
    }

    impl Agent for Scripted {
        fn name(&self) -> &str {
            "Scripted"
        }

        fn engine(&self) -> &GameEngine {
            &self.engine
        }

        fn engine_mut(&mut self) -> &mut GameEngine {
            &mut self.engine
        }

        fn reset(&mut self, _player: Player) {
            self.engine = GameEngine::new();
            self.next = 0;
        }

        fn get_move(&mut self) -> Move {
            let mv = self.moves.get(self.next).copied().unwrap_or(Move::Resign);
            self.next += 1;
            self.engine.play(mv);
            mv
        }
    }

    #[test]
    fn test_in_order_agents_fill_columns_until_bottom_row_wins() {
        // Columns fill alternately, so every even row belongs to One and
        // the fourth column completes the bottom row.
        let mut one = InOrderAgent::new();
        let mut two = InOrderAgent::new();
        let record = play_match(&mut one, &mut two);
        assert_eq!(record.result, MatchResult::Winner(Player::One));
        assert_eq!(record.plies, 3 * 6 + 1);
        assert_eq!(one.engine(), two.engine());
    }

    #[test]
    fn test_scripted_vertical_win() {
        let mut one = Scripted::new(vec![Move::Column(0); 4]);
        let mut two = Scripted::new(vec![Move::Column(1); 4]);
        let record = play_match(&mut one, &mut two);
        assert_eq!(record.result, MatchResult::Winner(Player::One));
        assert_eq!(record.result.code(), 1);
        assert_eq!(record.plies, 7);
        assert_eq!(one.engine().status(), GameStatus::Won(Player::One));
        assert_eq!(two.engine().status(), GameStatus::Won(Player::One));
    }

    #[test]
    fn test_resignation_wins_for_other_side() {
        let mut one = Scripted::new(vec![Move::Column(3)]);
        let mut two = Scripted::new(vec![Move::Column(3), Move::Column(4)]);
        let record = play_match(&mut one, &mut two);
        assert_eq!(record.result, MatchResult::Winner(Player::Two));
        assert_eq!(record.result.code(), 2);
        assert_eq!(record.plies, 3);
    }

    #[test]
    fn test_illegal_move_reports_error() {
        let mut one = Scripted::new(vec![Move::Column(9)]);
        let mut two = Scripted::new(vec![]);
        let record = play_match(&mut one, &mut two);
        assert_eq!(record.result, MatchResult::Error);
        assert_eq!(record.result.code(), -1);
        assert_eq!(record.plies, 1);
    }

    #[test]
    fn test_random_matches_terminate_with_synced_mirrors() {
        for seed in 0..10 {
            let mut one = RandomAgent::with_seed(seed);
            let mut two = RoundRobinAgent::new();
            let record = play_match(&mut one, &mut two);
            assert_ne!(record.result, MatchResult::Error);
            assert!(record.plies >= 7 && record.plies <= 42);
            assert_eq!(one.engine(), two.engine());
        }
    }

    #[test]
    fn test_agents_are_reset_between_matches() {
        let mut one = LookaheadAgent::with_seed(0, 1);
        let mut two = RandomAgent::with_seed(2);
        let first = play_match(&mut one, &mut two);
        let second = play_match(&mut one, &mut two);
        assert_ne!(first.result, MatchResult::Error);
        assert_ne!(second.result, MatchResult::Error);
        assert_eq!(one.engine().history().len(), second.plies);
    }

    fn run_boxed(one: &mut dyn Agent, two: &mut dyn Agent) -> MatchRecord {
        play_match(one, two)
    }

    #[test]
    fn test_play_match_through_separately_borrowed_trait_objects() {
        let mut one: Box<dyn Agent> = Box::new(RandomAgent::with_seed(21));
        let record = {
            let mut two = RoundRobinAgent::new();
            let two_ref: &mut dyn Agent = &mut two;
            let record = run_boxed(&mut *one, two_ref);
            assert_eq!(one.engine(), two.engine());
            record
        };
        assert_ne!(record.result, MatchResult::Error);
        assert_eq!(one.engine().history().len(), record.plies);
    }

    #[test]
    fn test_tie_code() {
        assert_eq!(MatchResult::Tie.code(), 0);
        assert_eq!(MatchResult::Tie.winner(), None);
        assert_eq!(MatchResult::Winner(Player::Two).winner(), Some(Player::Two));
    }

    #[test]
    fn test_derive_seed_deterministic() {
        assert_eq!(derive_seed(42, 100), derive_seed(42, 100));
    }

    #[test]
    fn test_derive_seed_varies() {
        let s1 = derive_seed(42, 0);
        let s2 = derive_seed(42, 1);
        let s3 = derive_seed(42, 2);
        assert_ne!(s1, s2);
        assert_ne!(s2, s3);
        assert_ne!(s1, s3);
        assert_ne!(derive_seed(1, 0), derive_seed(2, 0));
    }
}
