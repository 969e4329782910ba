//! # onitama
//!
//! Rules engine for Onitama, a two-player abstract strategy game played on an
//! odd-sized square board with five movement style cards.
//!
//! ## Rules in brief
//!
//! - Each player starts with four monks and a grandmaster on their back row,
//!   the grandmaster on the center column (the throne).
//! - Two styles belong to each player and one floats. Playing a style hands
//!   it over to the floating slot and takes the floating style.
//! - A player wins by moving their grandmaster onto the opposing throne or by
//!   capturing the opposing grandmaster.
//!
//! ## Modules
//!
//! - `core`: Seats and players, tokens, styles, RNG, configuration, errors
//! - `board`: Token grid plus style ownership and exchange
//! - `history`: Pre-move snapshots for undo
//! - `rules`: Win detection
//! - `game`: Turn order, legality, moves, undo
//! - `agents`: Move enumeration, random agent, match loop

pub mod agents;
pub mod board;
pub mod core;
pub mod game;
pub mod history;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, OnitamaError, Offset, Player, PlayerId, PlayerMap, Result,
    Style, Token,
};

pub use crate::board::{Board, Grid};
pub use crate::game::{Game, Turn};
pub use crate::history::{HistoryStack, Snapshot};
pub use crate::rules::{Victory, WinCondition};
pub use crate::agents::{play_match, Agent, MatchEnd, MatchSummary, RandomAgent};
