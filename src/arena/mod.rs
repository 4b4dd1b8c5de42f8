pub mod episode;
pub mod metrics;
pub mod tournament;

pub use episode::{derive_seed, play_match, MatchRecord, MatchResult};
pub use metrics::{MatchMetrics, Totals};
pub use tournament::{Tournament, TournamentConfig};
