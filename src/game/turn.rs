use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// One candidate move: origin, destination, the style card played, and the
/// seat making it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub row_o: i32,
    pub col_o: i32,
    pub row_d: i32,
    pub col_d: i32,
    pub style_name: String,
    pub player: PlayerId,
}

impl Turn {
    pub fn new(
        (row_o, col_o): (i32, i32),
        (row_d, col_d): (i32, i32),
        style_name: impl Into<String>,
        player: PlayerId,
    ) -> Self {
        Self {
            row_o,
            col_o,
            row_d,
            col_d,
            style_name: style_name.into(),
            player,
        }
    }

    #[must_use]
    pub fn origin(&self) -> (i32, i32) {
        (self.row_o, self.col_o)
    }

    #[must_use]
    pub fn destination(&self) -> (i32, i32) {
        (self.row_d, self.col_d)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: ({}, {}) -> ({}, {}) with {}",
            self.player, self.row_o, self.col_o, self.row_d, self.col_d, self.style_name
        )
    }
}
