//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::{OnitamaError, Result};

/// Smallest playable board: five tokens per starting row.
pub const MIN_BOARD_SIZE: usize = 5;

/// Settings for building a game and running matches on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width and height. Must be odd and at least 5.
    pub board_size: usize,

    /// Display names for player 1 and player 2.
    pub player_names: [String; 2],

    /// Seed for agent randomness.
    pub seed: u64,

    /// Turn cap for automated matches (0 = unlimited).
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
            player_names: ["X".to_string(), "Y".to_string()],
            seed: 42,
            max_turns: 200,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    pub fn with_player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Check the board size is usable for a game.
    pub fn validate(&self) -> Result<()> {
        validate_game_size(self.board_size)
    }
}

/// Sizes accepted by [`crate::game::Game`]: odd and at least [`MIN_BOARD_SIZE`].
pub fn validate_game_size(size: usize) -> Result<()> {
    if size % 2 == 0 {
        return Err(OnitamaError::SizeMustBeOdd { size });
    }
    if size < MIN_BOARD_SIZE {
        return Err(OnitamaError::SizeTooSmall {
            size,
            min: MIN_BOARD_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 5);
        assert_eq!(config.player_names, ["X".to_string(), "Y".to_string()]);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_board_size(7)
            .with_player_names("id1", "id2")
            .with_seed(123)
            .with_max_turns(0);

        assert_eq!(config.board_size, 7);
        assert_eq!(config.player_names[1], "id2");
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_turns, 0);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            GameConfig::default().with_board_size(6).validate(),
            Err(OnitamaError::SizeMustBeOdd { size: 6 })
        );
        assert_eq!(
            GameConfig::default().with_board_size(3).validate(),
            Err(OnitamaError::SizeTooSmall { size: 3, min: 5 })
        );
        assert!(GameConfig::default().with_board_size(9).validate().is_ok());
    }

    #[test]
    fn test_serialization_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"board_size": 7}"#).unwrap();
        assert_eq!(config.board_size, 7);
        assert_eq!(config.seed, 42);

        let json = serde_json::to_string(&config).unwrap();
        let round: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, round);
    }
}
