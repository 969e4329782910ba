//! Error type for fallible construction.
//!
//! Move legality and style exchange are not errors: they report failure
//! through `bool` returns and never touch state on that path.

use thiserror::Error;

/// Errors raised while building boards and games.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnitamaError {
    /// Boards need a center column, so the size must be odd.
    #[error("size must be odd, got {size}")]
    SizeMustBeOdd { size: usize },

    /// A playable game needs at least five columns for the starting row.
    #[error("size must be at least {min}, got {size}")]
    SizeTooSmall { size: usize, min: usize },

    /// A preset grid does not match the declared board size.
    #[error("grid must be {size}x{size}, got {rows} rows with {cols} columns")]
    GridShape { size: usize, rows: usize, cols: usize },

    /// A preset grid contains a symbol that is not a token.
    #[error("unknown token symbol {0:?}")]
    UnknownToken(char),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, OnitamaError>;
