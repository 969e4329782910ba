//! Text rendering of the board.

use std::fmt::{self, Write};

use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size;

        let mut header = String::from("  ");
        for col in 0..size {
            write!(header, "{col} ")?;
        }
        let separator = format!(" +{}", "-+".repeat(size));

        writeln!(f, "{header}")?;
        writeln!(f, "{separator}")?;
        for (row, cells) in self.grid.rows().enumerate() {
            write!(f, "{row}|")?;
            for token in cells {
                write!(f, "{}|", token.symbol())?;
            }
            writeln!(f, "{row}")?;
            writeln!(f, "{separator}")?;
        }
        writeln!(f, "{header}")
    }
}
