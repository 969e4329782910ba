//! Board: token grid plus the five style cards.
//!
//! The board is the sole owner of style state. Everything else reads styles
//! through borrows or deep copies, and ownership only changes through
//! [`Board::exchange_style`], which keeps exactly one style floating.

mod grid;
mod render;

pub use grid::Grid;

use tracing::debug;

use crate::core::{starting_styles, OnitamaError, PlayerId, Result, Style, Token};

/// Game board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Grid,
    styles: Vec<Style>,
}

impl Board {
    /// Create a board in the starting layout.
    ///
    /// Fails with [`OnitamaError::SizeMustBeOdd`] for even sizes.
    pub fn new(size: usize) -> Result<Self> {
        Self::with_grid(size, Grid::starting(size))
    }

    /// Create a board from a preset grid, with styles in their starting
    /// distribution.
    pub fn with_grid(size: usize, grid: Grid) -> Result<Self> {
        if size % 2 == 0 {
            return Err(OnitamaError::SizeMustBeOdd { size });
        }
        check_shape(size, &grid)?;
        let mut board = Self {
            size,
            grid,
            styles: Vec::new(),
        };
        board.construct_styles();
        Ok(board)
    }

    /// Reset the styles to the fixed starting distribution: crab and horse
    /// to player 1, mantis and rooster to player 2, dragon floating.
    pub fn construct_styles(&mut self) {
        self.styles = starting_styles();
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Live styles, in construction order.
    #[must_use]
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Independent copies of the styles.
    #[must_use]
    pub fn styles_deep_copy(&self) -> Vec<Style> {
        self.styles.clone()
    }

    /// First style with the given name.
    #[must_use]
    pub fn find_style(&self, name: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.name() == name)
    }

    /// The style no one owns.
    #[must_use]
    pub fn floating_style(&self) -> Option<&Style> {
        self.styles.iter().find(|s| s.is_floating())
    }

    /// Styles owned by `player`.
    pub fn styles_of(&self, player: PlayerId) -> impl Iterator<Item = &Style> {
        self.styles
            .iter()
            .filter(move |s| s.owner() == Some(player))
    }

    /// Hand `style` over to the floating slot: its owner takes the floating
    /// style and `style` becomes floating.
    ///
    /// Returns false, changing nothing, if `style` is not one of this board's
    /// styles (by name and owner) or is itself floating.
    pub fn exchange_style(&mut self, style: &Style) -> bool {
        let Some(owner) = style.owner() else {
            return false;
        };
        let Some(chosen) = self.styles.iter().position(|s| s == style) else {
            return false;
        };
        let Some(floating) = self.styles.iter().position(Style::is_floating) else {
            return false;
        };

        self.styles[floating].set_owner(Some(owner));
        self.styles[chosen].set_owner(None);
        debug!(
            given = self.styles[chosen].name(),
            taken = self.styles[floating].name(),
            %owner,
            "exchanged style"
        );
        true
    }

    /// True iff `0 <= row < size` and `0 <= col < size`.
    #[must_use]
    pub fn valid_coordinate(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Token at a coordinate, or [`Token::Empty`] if the coordinate is off
    /// the board.
    #[must_use]
    pub fn get_token(&self, row: i32, col: i32) -> Token {
        match self.index(row, col) {
            Some((r, c)) => self.grid.get(r, c),
            None => Token::Empty,
        }
    }

    /// Write a token. The coordinate must be on the board; callers validate
    /// first.
    ///
    /// # Panics
    ///
    /// If `(row, col)` is off the board.
    pub fn set_token(&mut self, row: i32, col: i32, token: Token) {
        let Some((r, c)) = self.index(row, col) else {
            panic!("({row}, {col}) is off the board");
        };
        self.grid.set(r, c, token);
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Independent copy of the grid.
    #[must_use]
    pub fn deep_copy(&self) -> Grid {
        self.grid.clone()
    }

    /// Replace the grid with a copy of `grid`, which must match the board size.
    pub fn set_grid(&mut self, grid: &Grid) -> Result<()> {
        check_shape(self.size, grid)?;
        self.grid = grid.clone();
        Ok(())
    }

    /// Overwrite grid and styles wholesale.
    pub(crate) fn restore(&mut self, grid: Grid, styles: Vec<Style>) {
        self.grid = grid;
        self.styles = styles;
    }

    /// The throne cell of a seat: center column of its starting row.
    #[must_use]
    pub fn throne(&self, player: PlayerId) -> (i32, i32) {
        let center = (self.size / 2) as i32;
        if player == PlayerId::FIRST {
            (0, center)
        } else {
            (self.size as i32 - 1, center)
        }
    }

    fn index(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        let r = usize::try_from(row).ok()?;
        let c = usize::try_from(col).ok()?;
        (r < self.size && c < self.size).then_some((r, c))
    }
}

fn check_shape(size: usize, grid: &Grid) -> Result<()> {
    if grid.size() != size {
        return Err(OnitamaError::GridShape {
            size,
            rows: grid.size(),
            cols: grid.size(),
        });
    }
    Ok(())
}
