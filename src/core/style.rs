//! Style cards: named movement patterns with a current owner.
//!
//! Offsets are written from the point of view of the south seat (player 2),
//! where a negative row delta moves toward row 0. Move enumeration negates
//! them for the north seat so every pattern is relative to facing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;

/// A (row, column) movement delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub row: i32,
    pub col: i32,
}

impl Offset {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The same delta seen from the opposite side of the board.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::new(-self.row, -self.col)
    }

    /// The delta as the given seat applies it.
    #[must_use]
    pub const fn facing(self, player: PlayerId) -> Self {
        if player.index() == 0 {
            self.flipped()
        } else {
            self
        }
    }
}

impl From<(i32, i32)> for Offset {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Movement pattern storage. No built-in style has more than four moves.
pub type Moves = SmallVec<[Offset; 4]>;

/// A style card.
///
/// The move pattern is fixed at construction. The owner (`None` while the
/// style floats) changes only through the board's exchange operation.
///
/// Two styles are equal when name and owner match; names are unique within
/// a game so the pattern is not compared.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Style {
    name: String,
    owner: Option<PlayerId>,
    moves: Moves,
}

impl Style {
    pub fn new(
        name: impl Into<String>,
        owner: Option<PlayerId>,
        moves: impl IntoIterator<Item = (i32, i32)>,
    ) -> Self {
        Self {
            name: name.into(),
            owner,
            moves: moves.into_iter().map(Offset::from).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current owner, `None` for the floating style.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.owner.is_none()
    }

    /// The movement deltas. The borrow is read-only, so callers cannot alter
    /// the canonical pattern through it.
    #[must_use]
    pub fn moves(&self) -> &[Offset] {
        &self.moves
    }

    pub(crate) fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.owner == other.owner
    }
}

impl Eq for Style {}

/// The five styles of this variant in their fixed starting distribution:
/// crab and horse to player 1, mantis and rooster to player 2, dragon floating.
#[must_use]
pub fn starting_styles() -> Vec<Style> {
    vec![
        Style::new("crab", Some(PlayerId::FIRST), [(-1, 0), (0, -2), (0, 2)]),
        Style::new("horse", Some(PlayerId::FIRST), [(-1, 0), (1, 0), (0, -1)]),
        Style::new("mantis", Some(PlayerId::SECOND), [(-1, -1), (-1, 1), (1, 0)]),
        Style::new(
            "rooster",
            Some(PlayerId::SECOND),
            [(0, 1), (-1, 1), (0, -1), (1, -1)],
        ),
        Style::new("dragon", None, [(-1, -2), (1, -1), (1, 1), (-1, 2)]),
    ]
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [", self.name)?;
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", m.row, m.col)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_moves() {
        let a = Style::new("crab", Some(PlayerId::FIRST), [(-1, 0)]);
        let b = Style::new("crab", Some(PlayerId::FIRST), [(3, 3), (2, 2)]);
        let c = Style::new("crab", Some(PlayerId::SECOND), [(-1, 0)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Style::new("horse", Some(PlayerId::FIRST), [(-1, 0), (1, 0)]);
        let mut copy = original.clone();
        copy.set_owner(None);

        assert_eq!(original.owner(), Some(PlayerId::FIRST));
        assert!(copy.is_floating());
        assert_eq!(copy.moves(), original.moves());
    }

    #[test]
    fn test_starting_styles() {
        let styles = starting_styles();
        let owners: Vec<_> = styles.iter().map(Style::owner).collect();
        assert_eq!(
            owners,
            vec![
                Some(PlayerId::FIRST),
                Some(PlayerId::FIRST),
                Some(PlayerId::SECOND),
                Some(PlayerId::SECOND),
                None,
            ]
        );
        let names: Vec<_> = styles.iter().map(Style::name).collect();
        assert_eq!(names, vec!["crab", "horse", "mantis", "rooster", "dragon"]);
    }

    #[test]
    fn test_offset_facing() {
        let offset = Offset::new(-1, 2);
        assert_eq!(offset.facing(PlayerId::FIRST), Offset::new(1, -2));
        assert_eq!(offset.facing(PlayerId::SECOND), offset);
    }

    #[test]
    fn test_display() {
        let style = Style::new("crab", None, [(-1, 0), (0, -2)]);
        assert_eq!(style.to_string(), "crab: [(-1, 0), (0, -2)]");
    }
}
