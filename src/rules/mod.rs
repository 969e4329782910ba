//! Win detection.
//!
//! A game is over when a grandmaster reaches the opposing throne or a
//! grandmaster has been captured. Nothing is stored: the outcome is always
//! recomputed from the board.

mod victory;

pub use victory::{evaluate, Victory, WinCondition};
