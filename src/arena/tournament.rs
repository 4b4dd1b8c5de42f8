use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::episode::{play_match, MatchResult};
use super::metrics::MatchMetrics;
use crate::ai::Agent;
use crate::game::Player;

/// Tournament configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    pub num_matches: usize,
    pub log_interval: usize,
    /// Base seed for the agents' random sources; fresh entropy when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub stop_on_error: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            num_matches: 1000,
            log_interval: 100,
            seed: None,
            stop_on_error: true,
        }
    }
}

/// Plays a series of matches between the same two agents. The agents are
/// long-lived, so anything they learn carries into the next match.
pub struct Tournament {
    config: TournamentConfig,
}

impl Tournament {
    pub fn new(config: TournamentConfig) -> Self {
        Tournament { config }
    }

    /// Run every match, `one` always moving first.
    pub fn run(&self, one: &mut dyn Agent, two: &mut dyn Agent) -> MatchMetrics {
        let mut metrics = MatchMetrics::with_capacity(self.config.log_interval.max(1));

        info!(
            matches = self.config.num_matches,
            one = one.name(),
            two = two.name(),
            "starting tournament"
        );

        for game in 1..=self.config.num_matches {
            let record = play_match(one, two);
            metrics.record_match(record);

            if record.result == MatchResult::Error && self.config.stop_on_error {
                warn!(game, "stopping tournament after illegal move");
                break;
            }

            if self.config.log_interval > 0 && game % self.config.log_interval == 0 {
                let window = self.config.log_interval;
                info!(
                    game,
                    total = self.config.num_matches,
                    one_win_pct = metrics.win_rate(Player::One, window) * 100.0,
                    two_win_pct = metrics.win_rate(Player::Two, window) * 100.0,
                    tie_pct = metrics.tie_rate(window) * 100.0,
                    avg_len = metrics.average_match_length(window),
                    "progress"
                );
            }
        }

        // Learning agents apply the last outcome when reset
        one.reset(Player::One);
        two.reset(Player::Two);

        let totals = metrics.totals();
        info!(
            matches = totals.matches,
            one_wins = totals.one_wins,
            two_wins = totals.two_wins,
            ties = totals.ties,
            errors = totals.errors,
            "tournament complete"
        );

        metrics
    }
}
