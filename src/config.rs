use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::{
    Agent, ExperienceAgent, ExperienceStore, InOrderAgent, LookaheadAgent, RandomAgent,
    RoundRobinAgent,
};
use crate::arena::TournamentConfig;
use crate::error::{ConfigError, StoreError};

/// Deepest lookahead accepted from configuration. The search visits up to
/// 7^(depth + 1) positions per move.
pub const MAX_LOOKAHEAD_DEPTH: usize = 8;

/// Which strategy an agent uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Random,
    RoundRobin,
    InOrder,
    Lookahead,
    Experience,
}

/// One side of the tournament.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub kind: AgentKind,
    /// Plies searched past the candidate move (lookahead only).
    pub depth: usize,
    /// JSON file holding the experience store (experience only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<PathBuf>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            kind: AgentKind::Lookahead,
            depth: 0,
            memory: None,
        }
    }
}

impl AgentConfig {
    pub fn lookahead(depth: usize) -> Self {
        AgentConfig {
            kind: AgentKind::Lookahead,
            depth,
            memory: None,
        }
    }

    /// Construct the agent. Experience agents start from their memory file
    /// when one is configured and exists.
    pub fn build(&self, seed: Option<u64>) -> Result<Box<dyn Agent>, StoreError> {
        let agent: Box<dyn Agent> = match self.kind {
            AgentKind::Random => Box::new(match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            }),
            AgentKind::RoundRobin => Box::new(RoundRobinAgent::new()),
            AgentKind::InOrder => Box::new(InOrderAgent::new()),
            AgentKind::Lookahead => Box::new(match seed {
                Some(seed) => LookaheadAgent::with_seed(self.depth, seed),
                None => LookaheadAgent::new(self.depth),
            }),
            AgentKind::Experience => {
                let store = match &self.memory {
                    Some(path) => ExperienceStore::load_or_default(path)?,
                    None => ExperienceStore::new(),
                };
                Box::new(match seed {
                    Some(seed) => ExperienceAgent::with_seed(store, seed),
                    None => ExperienceAgent::new(store),
                })
            }
        };
        Ok(agent)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tournament: TournamentConfig,
    pub player_one: AgentConfig,
    pub player_two: AgentConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            tournament: TournamentConfig::default(),
            player_one: AgentConfig::lookahead(0),
            player_two: AgentConfig::lookahead(1),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tournament.num_matches == 0 {
            return Err(ConfigError::Validation(
                "tournament.num_matches must be > 0".into(),
            ));
        }
        if self.tournament.log_interval == 0 {
            return Err(ConfigError::Validation(
                "tournament.log_interval must be > 0".into(),
            ));
        }

        for (section, agent) in [("player_one", &self.player_one), ("player_two", &self.player_two)] {
            if agent.kind == AgentKind::Lookahead && agent.depth > MAX_LOOKAHEAD_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "{section}.depth must be <= {MAX_LOOKAHEAD_DEPTH}"
                )));
            }
        }

        if let (Some(a), Some(b)) = (&self.player_one.memory, &self.player_two.memory) {
            if a == b {
                return Err(ConfigError::Validation(
                    "player_one.memory and player_two.memory must differ".into(),
                ));
            }
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}
