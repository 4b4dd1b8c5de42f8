//! Core Connect Four game logic: board representation, player types, and a
//! reversible game engine with move history.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, CENTER, COLS, ROWS};
pub use engine::{GameEngine, GameStatus, Move};
pub use player::Player;
