use std::path::PathBuf;

/// Why a move put the engine into the error state.
///
/// These are never returned as `Err` from the engine; they travel inside
/// [`crate::game::GameStatus::Error`] so callers inspect them as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column out of range")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when saving or loading an experience store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read experience store {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse experience store {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while decoding a remote move request or answering it.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board must have {expected_cols} columns of {expected_rows} cells")]
    BadShape {
        expected_cols: usize,
        expected_rows: usize,
    },

    #[error("unknown cell value {value} at column {col}, row {row}")]
    BadCell { col: usize, row: usize, value: u8 },

    #[error("piece floating above an empty cell in column {0}")]
    FloatingPiece(usize),

    #[error("unknown player id {0}")]
    BadPlayer(u8),

    #[error("agent resigned; no column to report")]
    Resigned,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to write TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
