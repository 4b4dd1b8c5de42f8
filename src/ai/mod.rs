//! Move-selection strategies. Every strategy implements [`Agent`] and keeps
//! its own mirror of the match.

mod agent;
pub mod experience;
mod in_order;
pub mod lookahead;
mod random;
mod round_robin;
pub mod state_encoding;

pub use agent::Agent;
pub use experience::{ExperienceAgent, ExperienceStore};
pub use in_order::InOrderAgent;
pub use lookahead::LookaheadAgent;
pub use random::RandomAgent;
pub use round_robin::RoundRobinAgent;
pub use state_encoding::{BoardKey, Orientation};
