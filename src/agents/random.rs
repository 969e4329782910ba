//! Uniform random agent.
//!
//! Draws from [`all_valid_turns`], whose order is fixed, so a seeded agent
//! makes the same choices on the same position.

use crate::core::GameRng;
use crate::game::{Game, Turn};

use super::enumerate::all_valid_turns;
use super::Agent;

/// Picks uniformly among all legal turns of every owned style.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn choose_turn(&mut self, game: &Game) -> Option<Turn> {
        let turns = all_valid_turns(game, game.whose_turn_seat());
        self.rng.choose(&turns).cloned()
    }
}
