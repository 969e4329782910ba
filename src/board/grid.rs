//! Square token grid.

use serde::{Deserialize, Serialize};

use crate::core::{OnitamaError, PlayerId, Result, Token};

/// A `size x size` grid of tokens stored row-major.
///
/// Cloning copies every cell; a clone never shares storage with its source.
/// Deserialization rejects a cell list that is not `size * size` long.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    cells: Vec<Token>,
}

#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    cells: Vec<Token>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = OnitamaError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let RawGrid { size, cells } = raw;
        if cells.len() != size * size {
            return Err(OnitamaError::GridShape {
                size,
                rows: cells.len() / size.max(1),
                cols: size,
            });
        }
        Ok(Self { size, cells })
    }
}

impl Grid {
    /// An all-empty grid.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Token::Empty; size * size],
        }
    }

    /// The starting layout: player 1 fills row 0 and player 2 the last row,
    /// each with the grandmaster on the center column.
    #[must_use]
    pub fn starting(size: usize) -> Self {
        let mut grid = Self::empty(size);
        if size == 0 {
            return grid;
        }
        let center = size / 2;
        for (row, player) in [(size - 1, PlayerId::SECOND), (0, PlayerId::FIRST)] {
            for col in 0..size {
                let token = if col == center {
                    Token::grandmaster(player)
                } else {
                    Token::monk(player)
                };
                grid.set(row, col, token);
            }
        }
        grid
    }

    /// Parse a preset layout, one string of token symbols per row.
    ///
    /// ```
    /// use onitama::board::Grid;
    /// use onitama::core::Token;
    ///
    /// let grid = Grid::from_rows(&[
    ///     "xxXxx",
    ///     ".....",
    ///     ".....",
    ///     ".....",
    ///     "yyYyy",
    /// ]).unwrap();
    /// assert_eq!(grid.get(0, 2), Token::FirstGrandmaster);
    /// assert_eq!(grid.get(2, 2), Token::Empty);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let before = cells.len();
            for symbol in row.as_ref().chars() {
                cells.push(Token::from_symbol(symbol)?);
            }
            let cols = cells.len() - before;
            if cols != size {
                return Err(OnitamaError::GridShape {
                    size,
                    rows: size,
                    cols,
                });
            }
        }
        Ok(Self { size, cells })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Token at a cell. Panics if the cell is outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Token {
        self.cells[row * self.size + col]
    }

    /// Overwrite a cell. Panics if the cell is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, token: Token) {
        self.cells[row * self.size + col] = token;
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Token]> {
        self.cells.chunks(self.size.max(1))
    }

    #[must_use]
    pub fn contains(&self, token: Token) -> bool {
        self.cells.contains(&token)
    }

    /// Row-major positions of every token belonging to `player`.
    #[must_use]
    pub fn positions_of(&self, player: PlayerId) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, token)| token.belongs_to(player))
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Number of cells holding `token`.
    #[must_use]
    pub fn count(&self, token: Token) -> usize {
        self.cells.iter().filter(|&&t| t == token).count()
    }
}
