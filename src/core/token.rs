//! Board tokens.

use serde::{Deserialize, Serialize};

use super::error::{OnitamaError, Result};
use super::player::PlayerId;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    /// No token.
    #[default]
    Empty,
    /// Player 1 monk (`x`).
    FirstMonk,
    /// Player 1 grandmaster (`X`).
    FirstGrandmaster,
    /// Player 2 monk (`y`).
    SecondMonk,
    /// Player 2 grandmaster (`Y`).
    SecondGrandmaster,
}

impl Token {
    /// Monk token for a seat.
    #[must_use]
    pub const fn monk(player: PlayerId) -> Token {
        if player.index() == 0 {
            Token::FirstMonk
        } else {
            Token::SecondMonk
        }
    }

    /// Grandmaster token for a seat.
    #[must_use]
    pub const fn grandmaster(player: PlayerId) -> Token {
        if player.index() == 0 {
            Token::FirstGrandmaster
        } else {
            Token::SecondGrandmaster
        }
    }

    /// Seat owning this token, `None` for empty cells.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Token::Empty => None,
            Token::FirstMonk | Token::FirstGrandmaster => Some(PlayerId::FIRST),
            Token::SecondMonk | Token::SecondGrandmaster => Some(PlayerId::SECOND),
        }
    }

    /// True if the token belongs to `player`.
    #[must_use]
    pub fn belongs_to(self, player: PlayerId) -> bool {
        self.owner() == Some(player)
    }

    #[must_use]
    pub const fn is_grandmaster(self) -> bool {
        matches!(self, Token::FirstGrandmaster | Token::SecondGrandmaster)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Token::Empty)
    }

    /// Single-character symbol used in rendering and preset grids.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Token::Empty => ' ',
            Token::FirstMonk => 'x',
            Token::FirstGrandmaster => 'X',
            Token::SecondMonk => 'y',
            Token::SecondGrandmaster => 'Y',
        }
    }

    /// Parse a symbol. `.` is accepted as an alias for empty.
    pub fn from_symbol(symbol: char) -> Result<Token> {
        match symbol {
            ' ' | '.' => Ok(Token::Empty),
            'x' => Ok(Token::FirstMonk),
            'X' => Ok(Token::FirstGrandmaster),
            'y' => Ok(Token::SecondMonk),
            'Y' => Ok(Token::SecondGrandmaster),
            other => Err(OnitamaError::UnknownToken(other)),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
