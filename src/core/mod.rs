//! Core value types: seats and players, tokens, styles, RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod style;
pub mod token;

pub use config::{validate_game_size, GameConfig, MIN_BOARD_SIZE};
pub use error::{OnitamaError, Result};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use style::{starting_styles, Moves, Offset, Style};
pub use token::Token;
