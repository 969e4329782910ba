//! Match loop: two agents alternate on one game until it ends.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{PlayerId, PlayerMap};
use crate::game::{Game, Turn};
use crate::rules::Victory;

use super::Agent;

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEnd {
    /// A player won.
    Victory(Victory),
    /// The seat to move had no legal turn.
    NoMoves(PlayerId),
    /// The seat to move proposed a turn the game rejected.
    Rejected(PlayerId),
    /// The turn cap was reached.
    TurnLimit,
}

/// Record of a played match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub end: MatchEnd,
    pub moves: Vec<Turn>,
}

impl MatchSummary {
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.end {
            MatchEnd::Victory(v) => Some(v.winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn turns(&self) -> usize {
        self.moves.len()
    }
}

/// Let each seat's agent move in turn until the game is won, an agent has no
/// move, or `max_turns` moves have been played (0 = no cap).
pub fn play_match(game: &mut Game, agents: &mut PlayerMap<Box<dyn Agent>>, max_turns: u32) -> MatchSummary {
    let mut moves = Vec::new();

    let end = loop {
        if let Some(victory) = game.victory() {
            break MatchEnd::Victory(victory);
        }
        if max_turns > 0 && moves.len() >= max_turns as usize {
            break MatchEnd::TurnLimit;
        }

        let seat = game.whose_turn_seat();
        let Some(turn) = agents[seat].choose_turn(game) else {
            break MatchEnd::NoMoves(seat);
        };
        if !game.apply_turn(&turn) {
            warn!(%turn, "agent proposed an illegal turn");
            break MatchEnd::Rejected(seat);
        }
        debug!(number = moves.len() + 1, %turn, "played turn");
        moves.push(turn);
    };

    info!(turns = moves.len(), ?end, "match finished");
    MatchSummary { end, moves }
}
