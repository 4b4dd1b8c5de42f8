use std::collections::VecDeque;

use super::episode::{MatchRecord, MatchResult};
use crate::game::Player;

/// Lifetime counts, never capped by the rolling window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub matches: usize,
    pub one_wins: usize,
    pub two_wins: usize,
    pub ties: usize,
    pub errors: usize,
}

impl Totals {
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::One => self.one_wins,
            Player::Two => self.two_wins,
        }
    }
}

/// Match statistics tracker with rolling window computations.
pub struct MatchMetrics {
    recent: VecDeque<MatchRecord>,
    capacity: usize,
    totals: Totals,
}

impl MatchMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        MatchMetrics {
            recent: VecDeque::with_capacity(capacity),
            capacity,
            totals: Totals::default(),
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record_match(&mut self, record: MatchRecord) {
        self.totals.matches += 1;
        match record.result {
            MatchResult::Winner(Player::One) => self.totals.one_wins += 1,
            MatchResult::Winner(Player::Two) => self.totals.two_wins += 1,
            MatchResult::Tie => self.totals.ties += 1,
            MatchResult::Error => self.totals.errors += 1,
        }

        self.recent.push_back(record);
        if self.recent.len() > self.capacity {
            self.recent.pop_front();
        }
    }

    /// Fraction of the last N matches won by `player`.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.result == MatchResult::Winner(player))
    }

    /// Tie rate in the last N matches.
    pub fn tie_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.result == MatchResult::Tie)
    }

    fn rate(&self, last_n: usize, pred: impl Fn(&MatchRecord) -> bool) -> f32 {
        let n = self.recent.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let hits = self.recent.iter().rev().take(n).filter(|&r| pred(r)).count();
        hits as f32 / n as f32
    }

    /// Average number of plies over the last N matches.
    pub fn average_match_length(&self, last_n: usize) -> f32 {
        let n = self.recent.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self.recent.iter().rev().take(n).map(|r| r.plies).sum();
        total as f32 / n as f32
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }
}

impl Default for MatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(result: MatchResult, plies: usize) -> MatchRecord {
        MatchRecord { result, plies }
    }

    #[test]
    fn test_win_rate() {
        let mut metrics = MatchMetrics::new();
        metrics.record_match(record(MatchResult::Winner(Player::One), 10));
        metrics.record_match(record(MatchResult::Winner(Player::Two), 10));
        metrics.record_match(record(MatchResult::Winner(Player::One), 10));
        metrics.record_match(record(MatchResult::Tie, 42));

        assert!((metrics.win_rate(Player::One, 4) - 0.5).abs() < 1e-6);
        assert!((metrics.win_rate(Player::Two, 4) - 0.25).abs() < 1e-6);
        // Only the newest two: One then Tie
        assert!((metrics.win_rate(Player::One, 2) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_tie_rate() {
        let mut metrics = MatchMetrics::new();
        metrics.record_match(record(MatchResult::Tie, 42));
        metrics.record_match(record(MatchResult::Winner(Player::One), 7));
        assert!((metrics.tie_rate(2) - 0.5).abs() < 1e-6);
        assert!((metrics.tie_rate(1) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_average_match_length() {
        let mut metrics = MatchMetrics::new();
        metrics.record_match(record(MatchResult::Winner(Player::One), 10));
        metrics.record_match(record(MatchResult::Winner(Player::Two), 20));
        assert!((metrics.average_match_length(2) - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_metrics() {
        let metrics = MatchMetrics::new();
        assert_eq!(metrics.win_rate(Player::One, 10), 0.0);
        assert_eq!(metrics.tie_rate(10), 0.0);
        assert_eq!(metrics.average_match_length(10), 0.0);
        assert_eq!(metrics.totals(), Totals::default());
    }

    #[test]
    fn test_window_is_capped_but_totals_are_not() {
        let mut metrics = MatchMetrics::with_capacity(3);
        for _ in 0..5 {
            metrics.record_match(record(MatchResult::Winner(Player::Two), 8));
        }
        metrics.record_match(record(MatchResult::Error, 1));

        let totals = metrics.totals();
        assert_eq!(totals.matches, 6);
        assert_eq!(totals.two_wins, 5);
        assert_eq!(totals.wins(Player::Two), 5);
        assert_eq!(totals.errors, 1);
        // Window keeps only the newest three
        assert!((metrics.win_rate(Player::Two, 100) - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(metrics.win_rate(Player::Two, 1), 0.0);
    }
}
