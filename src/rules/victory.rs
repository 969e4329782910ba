use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{PlayerId, Token};

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinCondition {
    /// The winner's grandmaster stands on the loser's throne.
    Throne,
    /// The loser's grandmaster is no longer on the board.
    Capture,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    pub winner: PlayerId,
    pub condition: WinCondition,
}

impl Victory {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Evaluate the board. Checks, in order: player 2 on player 1's throne,
/// player 1's grandmaster gone, player 1 on player 2's throne, player 2's
/// grandmaster gone.
#[must_use]
pub fn evaluate(board: &Board) -> Option<Victory> {
    [PlayerId::SECOND, PlayerId::FIRST]
        .into_iter()
        .find_map(|winner| winning_condition(board, winner).map(|condition| Victory { winner, condition }))
}

fn winning_condition(board: &Board, winner: PlayerId) -> Option<WinCondition> {
    let loser = winner.opponent();
    let (row, col) = board.throne(loser);
    if board.get_token(row, col) == Token::grandmaster(winner) {
        return Some(WinCondition::Throne);
    }
    if !board.grid().contains(Token::grandmaster(loser)) {
        return Some(WinCondition::Capture);
    }
    None
}
