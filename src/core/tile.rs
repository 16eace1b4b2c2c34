//! Domino tiles and their identifiers.
//!
//! A double-six set has one tile per unordered pair `(i, j)` with
//! `0 <= i <= j <= 6`, 28 in total. Tiles keep the orientation they were
//! generated with (`first <= second`); the board records reversal as
//! separate metadata instead of changing the tile.
//!
//! ```
//! use dominoes_engine::core::Tile;
//!
//! let tile = Tile::from_pips(5, 3).unwrap();
//! assert_eq!((tile.first(), tile.second()), (3, 5));
//! assert_eq!(tile.pip_sum(), 8);
//! assert_eq!(Tile::from_id(tile.id()), Some(tile));
//! ```

use serde::{Deserialize, Serialize};

/// Highest pip value on a tile.
pub const MAX_PIP: u8 = 6;

/// Number of tiles in a double-six set.
pub const UNIVERSE_SIZE: usize = 28;

/// Tile identifier, unique within the set.
///
/// Ids follow generation order: ascending first pip, then second pip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable domino tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    first: u8,
    second: u8,
}

impl Tile {
    /// Build a tile from two pip values in any order.
    ///
    /// Returns `None` if either value exceeds [`MAX_PIP`].
    #[must_use]
    pub fn from_pips(a: u8, b: u8) -> Option<Self> {
        if a > MAX_PIP || b > MAX_PIP {
            return None;
        }
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Some(Self {
            id: id_for(first, second),
            first,
            second,
        })
    }

    /// Look up the tile with the given id.
    #[must_use]
    pub fn from_id(id: TileId) -> Option<Self> {
        let mut remaining = id.0;
        for first in 0..=MAX_PIP {
            let row = MAX_PIP - first + 1;
            if remaining < row {
                return Self::from_pips(first, first + remaining);
            }
            remaining -= row;
        }
        None
    }

    #[must_use]
    pub const fn id(self) -> TileId {
        self.id
    }

    /// The first stored pip (the lower one).
    #[must_use]
    pub const fn first(self) -> u8 {
        self.first
    }

    /// The second stored pip (the higher one).
    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }

    #[must_use]
    pub const fn pips(self) -> (u8, u8) {
        (self.first, self.second)
    }

    #[must_use]
    pub const fn is_double(self) -> bool {
        self.first == self.second
    }

    #[must_use]
    pub const fn pip_sum(self) -> u32 {
        self.first as u32 + self.second as u32
    }

    /// Does either half show `value`?
    #[must_use]
    pub const fn has(self, value: u8) -> bool {
        self.first == value || self.second == value
    }

    /// The pip opposite `value`, if the tile carries `value` at all.
    #[must_use]
    pub const fn other_end(self, value: u8) -> Option<u8> {
        if self.first == value {
            Some(self.second)
        } else if self.second == value {
            Some(self.first)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Position of `(first, second)` in generation order, `first <= second`.
const fn id_for(first: u8, second: u8) -> TileId {
    // Row `i` holds 7 - i tiles.
    let row_start = first * (2 * MAX_PIP + 3 - first) / 2;
    TileId(row_start + (second - first))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pips_normalizes_order() {
        let tile = Tile::from_pips(6, 2).unwrap();
        assert_eq!(tile.pips(), (2, 6));
        assert_eq!(tile, Tile::from_pips(2, 6).unwrap());
    }

    #[test]
    fn test_from_pips_out_of_range() {
        assert!(Tile::from_pips(7, 0).is_none());
        assert!(Tile::from_pips(0, 9).is_none());
    }

    #[test]
    fn test_ids_follow_generation_order() {
        assert_eq!(Tile::from_pips(0, 0).unwrap().id(), TileId(0));
        assert_eq!(Tile::from_pips(0, 6).unwrap().id(), TileId(6));
        assert_eq!(Tile::from_pips(1, 1).unwrap().id(), TileId(7));
        assert_eq!(Tile::from_pips(2, 2).unwrap().id(), TileId(13));
        assert_eq!(Tile::from_pips(6, 6).unwrap().id(), TileId(27));
    }

    #[test]
    fn test_from_id_round_trip() {
        for raw in 0..UNIVERSE_SIZE as u8 {
            let tile = Tile::from_id(TileId(raw)).unwrap();
            assert_eq!(tile.id(), TileId(raw));
        }
        assert!(Tile::from_id(TileId(28)).is_none());
    }

    #[test]
    fn test_double_and_sum() {
        let double = Tile::from_pips(4, 4).unwrap();
        assert!(double.is_double());
        assert_eq!(double.pip_sum(), 8);

        let single = Tile::from_pips(1, 5).unwrap();
        assert!(!single.is_double());
        assert_eq!(single.pip_sum(), 6);
    }

    #[test]
    fn test_other_end() {
        let tile = Tile::from_pips(2, 5).unwrap();
        assert!(tile.has(2));
        assert!(tile.has(5));
        assert!(!tile.has(3));
        assert_eq!(tile.other_end(2), Some(5));
        assert_eq!(tile.other_end(5), Some(2));
        assert_eq!(tile.other_end(3), None);

        let double = Tile::from_pips(3, 3).unwrap();
        assert_eq!(double.other_end(3), Some(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::from_pips(6, 1).unwrap().to_string(), "1-6");
        assert_eq!(TileId(12).to_string(), "#12");
    }
}
