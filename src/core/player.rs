//! Seats, per-seat storage and player identities.
//!
//! ## PlayerId
//!
//! The seat a player occupies: `PlayerId::FIRST` starts on row 0 (north),
//! `PlayerId::SECOND` on the last row. Tokens and style ownership are tagged
//! by seat.
//!
//! ## Player
//!
//! The identity registered with a game. Identity is a process-unique key,
//! not the display name, so two players named alike stay distinct.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

/// Seat identifier. Only two seats exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The north seat, moving first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The south seat.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Both seats in turn order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::FIRST, PlayerId::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ```
/// use onitama::core::{PlayerId, PlayerMap};
///
/// let mut captures: PlayerMap<u32> = PlayerMap::with_value(0);
/// captures[PlayerId::SECOND] += 1;
/// assert_eq!(captures[PlayerId::FIRST], 0);
/// assert_eq!(captures[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create from explicit first and second entries.
    pub fn from_pair(first: T, second: T) -> Self {
        Self { data: [first, second] }
    }

    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self::from_pair(factory(PlayerId::FIRST), factory(PlayerId::SECOND))
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().zip(self.data.iter())
    }

    /// Find the seat whose entry satisfies `pred`.
    pub fn position(&self, pred: impl Fn(&T) -> bool) -> Option<PlayerId> {
        self.iter().find(|(_, v)| pred(v)).map(|(seat, _)| seat)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

static NEXT_PLAYER_KEY: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct PlayerKey(u64);

/// A player identity registered with a game.
///
/// Equality is identity: a clone is the same player, a freshly constructed
/// player with the same name is not.
#[derive(Clone, Debug)]
pub struct Player {
    key: PlayerKey,
    name: String,
}

impl Player {
    /// Create a new player with a fresh identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: PlayerKey(NEXT_PLAYER_KEY.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if `other` is this very player.
    #[must_use]
    pub fn is(&self, other: &Player) -> bool {
        self.key == other.key
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.is(other)
    }
}

impl Eq for Player {}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::SECOND.index(), 1);
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);
        assert_eq!(map[PlayerId::FIRST], 0);
        assert_eq!(map[PlayerId::SECOND], 10);
    }

    #[test]
    fn test_player_map_position() {
        let map = PlayerMap::from_pair("a", "b");
        assert_eq!(map.position(|v| *v == "b"), Some(PlayerId::SECOND));
        assert_eq!(map.position(|v| *v == "c"), None);
    }

    #[test]
    fn test_player_identity() {
        let a = Player::new("id1");
        let b = Player::new("id1");
        let a2 = a.clone();

        assert_ne!(a, b);
        assert_eq!(a, a2);
        assert!(a.is(&a2));
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_pair(3, 4);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
