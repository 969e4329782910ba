//! Players that pick moves.
//!
//! Agents hold no reference to a game. Each call to
//! [`Agent::choose_turn`] borrows the game it should act on, which keeps the
//! game the owner of all state while the agent only reads it.
//!
//! - `enumerate`: legal turn generation for a seat
//! - [`RandomAgent`]: uniform choice among legal turns
//! - [`play_match`]: drive two agents through a game

pub mod enumerate;
mod play;
mod random;

pub use enumerate::{all_valid_turns, styles_of, tokens_of, valid_turns};
pub use play::{play_match, MatchEnd, MatchSummary};
pub use random::RandomAgent;

use crate::game::{Game, Turn};

/// A move-selection strategy.
pub trait Agent {
    /// Pick a turn for the seat whose turn it is, or `None` if there is no
    /// move to make.
    fn choose_turn(&mut self, game: &Game) -> Option<Turn>;
}
