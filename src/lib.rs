//! # Connect Four Arena
//!
//! A Connect Four engine with reversible moves, a family of move-selection
//! agents, and a driver that pits two agents against each other.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, reversible engine
//! - [`ai`]: Agent trait, simple strategies, lookahead search, experience learning
//! - [`arena`]: Match driver, tournaments, running statistics
//! - [`remote`]: Wire format and adapter for networked play
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod remote;
