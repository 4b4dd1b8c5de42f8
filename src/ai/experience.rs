use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::agent::Agent;
use super::state_encoding::{BoardKey, Orientation};
use crate::error::StoreError;
use crate::game::{Board, GameEngine, GameStatus, Move, Player, CENTER};

/// Extra copies of a move added to its entry after a won match.
const REINFORCEMENT_COPIES: usize = 2;

/// Learned move preferences, keyed by canonical board.
///
/// Each entry is a multiset of columns: a column appearing more often is
/// more likely to be picked. Entries start as the open columns of the
/// position and are reshaped by match outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceStore {
    entries: BTreeMap<BoardKey, Vec<usize>>,
}

impl ExperienceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known positions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn moves(&self, key: &BoardKey) -> Option<&[usize]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BoardKey, &[usize])> {
        self.entries.iter().map(|(key, moves)| (key, moves.as_slice()))
    }

    /// Find the entry for `board`, trying the board itself and then its
    /// reflection. An unknown position is registered under its own key with
    /// every open column; with `opening` set each column is listed twice.
    pub fn resolve(&mut self, board: &Board, opening: bool) -> (BoardKey, Orientation) {
        let key = BoardKey::of(board);
        if self.entries.contains_key(&key) {
            return (key, Orientation::Direct);
        }

        let mirror = BoardKey::mirror_of(board);
        if self.entries.contains_key(&mirror) {
            return (mirror, Orientation::Mirrored);
        }

        let mut moves = board.open_columns();
        if opening {
            moves.extend_from_within(..);
        }
        self.entries.insert(key.clone(), moves);
        (key, Orientation::Direct)
    }

    /// Apply a finished match: drop one copy of every move played in a lost
    /// match, add copies of every move played in a won one.
    pub fn learn(&mut self, playout: &[(BoardKey, usize)], won: bool) {
        for (key, col) in playout {
            let Some(moves) = self.entries.get_mut(key) else {
                continue;
            };
            if won {
                moves.extend(std::iter::repeat(*col).take(REINFORCEMENT_COPIES));
            } else if let Some(pos) = moves.iter().position(|m| m == col) {
                moves.remove(pos);
            }
        }
    }

    /// Load a store previously written with [`ExperienceStore::save`].
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a store, starting empty if the file does not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self, StoreError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the store as JSON. The file is replaced atomically.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Agent that picks moves from an [`ExperienceStore`] and updates it after
/// every match.
pub struct ExperienceAgent {
    player: Player,
    engine: GameEngine,
    store: ExperienceStore,
    /// (canonical key, canonical column) for every learned move this match
    playout: Vec<(BoardKey, usize)>,
    rng: StdRng,
}

impl ExperienceAgent {
    pub fn new(store: ExperienceStore) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }

    pub fn with_seed(store: ExperienceStore, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: ExperienceStore, rng: StdRng) -> Self {
        ExperienceAgent {
            player: Player::One,
            engine: GameEngine::new(),
            store,
            playout: Vec::new(),
            rng,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn store(&self) -> &ExperienceStore {
        &self.store
    }

    pub fn into_store(self) -> ExperienceStore {
        self.store
    }

    pub fn playout(&self) -> &[(BoardKey, usize)] {
        &self.playout
    }

    fn finish_match(&mut self, won: bool) {
        if self.playout.is_empty() {
            return;
        }
        debug!(
            player = %self.player,
            won,
            moves = self.playout.len(),
            "updating experience"
        );
        self.store.learn(&self.playout, won);
        self.playout.clear();
    }
}

impl Agent for ExperienceAgent {
    fn name(&self) -> &str {
        "Experience"
    }

    fn engine(&self) -> &GameEngine {
        &self.engine
    }

    fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    /// Learns from the match the mirror just finished (ties and errors
    /// teach nothing), then starts over as `player`.
    fn reset(&mut self, player: Player) {
        if let GameStatus::Won(winner) = self.engine.status() {
            self.finish_match(winner == self.player);
        }
        self.playout.clear();
        self.engine = GameEngine::new();
        self.player = player;
    }

    fn get_move(&mut self) -> Move {
        let opening = self.playout.is_empty();
        let (key, orientation) = self.store.resolve(self.engine.board(), opening);

        let choice = self
            .store
            .moves(&key)
            .and_then(|moves| moves.choose(&mut self.rng).copied());

        let mv = match choice {
            Some(col) => {
                self.playout.push((key, col));
                Move::Column(orientation.apply(col))
            }
            None if opening => Move::Column(CENTER),
            None => Move::Resign,
        };
        self.engine.play(mv);
        mv
    }

    fn notify_outcome(&mut self, won: bool) {
        self.finish_match(won);
    }

    fn experience(&self) -> Option<&ExperienceStore> {
        Some(&self.store)
    }
}
