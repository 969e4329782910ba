//! Undo history.
//!
//! Each entry is one [`Snapshot`] of the board taken before a move was
//! applied. Entries are pushed and popped as a unit. The stack is a
//! persistent `im::Vector`, so cloning a whole game keeps the history cheap
//! while each snapshot owns its own cells.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Grid};
use crate::core::Style;

/// Board grid and style list as they were before a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub styles: Vec<Style>,
}

impl Snapshot {
    /// Deep-copy the current state of a board.
    #[must_use]
    pub fn capture(board: &Board) -> Self {
        Self {
            grid: board.deep_copy(),
            styles: board.styles_deep_copy(),
        }
    }
}

/// LIFO stack of snapshots.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vector<Snapshot>,
}

impl HistoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
