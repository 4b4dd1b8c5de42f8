use connect_four_arena::ai::{
    Agent, ExperienceAgent, ExperienceStore, InOrderAgent, LookaheadAgent, RandomAgent,
    RoundRobinAgent,
};
use connect_four_arena::arena::{play_match, MatchResult, Tournament, TournamentConfig};
use connect_four_arena::config::AppConfig;
use connect_four_arena::game::{GameEngine, GameStatus, Move, Player};
use connect_four_arena::remote::{MoveRequest, RemoteAgent};

fn tournament(num_matches: usize) -> TournamentConfig {
    TournamentConfig {
        num_matches,
        log_interval: 10,
        seed: Some(11),
        stop_on_error: true,
    }
}

#[test]
fn every_pairing_finishes_without_errors() {
    let mut agents: Vec<Box<dyn Agent>> = vec![
        Box::new(RandomAgent::with_seed(1)),
        Box::new(RoundRobinAgent::new()),
        Box::new(InOrderAgent::new()),
        Box::new(LookaheadAgent::with_seed(1, 2)),
        Box::new(ExperienceAgent::with_seed(ExperienceStore::new(), 3)),
    ];

    let n = agents.len();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (left, right) = agents.split_at_mut(i.max(j));
            let (a, b) = if i < j {
                (&mut left[i], &mut right[0])
            } else {
                (&mut right[0], &mut left[j])
            };
            let record = play_match(&mut **a, &mut **b);
            assert_ne!(record.result, MatchResult::Error, "{} vs {}", i, j);
            assert_eq!(a.engine(), b.engine());
        }
    }
}

#[test]
fn experience_entries_only_hold_playable_columns() {
    let mut learner = ExperienceAgent::with_seed(ExperienceStore::new(), 5);
    let mut random = RandomAgent::with_seed(6);
    Tournament::new(tournament(200)).run(&mut learner, &mut random);

    let store = learner.store();
    assert!(store.len() > 10);
    for (key, moves) in store.iter() {
        for &col in moves {
            assert!(key.is_open(col), "column {} recorded for {}", col, key);
        }
    }
}

#[test]
fn experience_store_survives_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memory.json");

    let mut learner = ExperienceAgent::with_seed(ExperienceStore::new(), 7);
    let mut opponent = LookaheadAgent::with_seed(0, 8);
    Tournament::new(tournament(30)).run(&mut learner, &mut opponent);
    learner.store().save(&path).unwrap();

    let reloaded = ExperienceStore::load(&path).unwrap();
    assert_eq!(&reloaded, learner.store());
}

#[test]
fn deeper_lookahead_beats_random_play() {
    let mut lookahead = LookaheadAgent::with_seed(1, 9);
    let mut random = RandomAgent::with_seed(10);
    let metrics = Tournament::new(tournament(30)).run(&mut lookahead, &mut random);

    let totals = metrics.totals();
    assert_eq!(totals.errors, 0);
    assert!(totals.wins(Player::One) * 10 >= totals.matches * 6);
}

#[test]
fn remote_agent_plays_a_full_match() {
    let mut remote = RemoteAgent::new(LookaheadAgent::with_seed(1, 12));
    let mut local = RandomAgent::with_seed(13);
    local.reset(Player::Two);

    let mut engine = GameEngine::new();
    while engine.status().is_ongoing() {
        let mv = match engine.current_player() {
            Player::One => {
                let column = remote.decide_move(&MoveRequest::from_engine(&engine)).unwrap();
                assert!((1..=7).contains(&column));
                let mv = Move::Column(column - 1);
                local.opponent_moved(mv);
                mv
            }
            Player::Two => local.get_move(),
        };
        engine.play(mv);
    }

    assert!(matches!(
        engine.status(),
        GameStatus::Won(_) | GameStatus::Tie
    ));
    remote.notify_outcome(engine.status() == GameStatus::Won(Player::One));
}

#[test]
fn default_config_builds_both_agents() {
    let config = AppConfig::default();
    let mut one = config.player_one.build(Some(1)).unwrap();
    let mut two = config.player_two.build(Some(2)).unwrap();
    let record = play_match(&mut *one, &mut *two);
    assert_ne!(record.result, MatchResult::Error);
}
