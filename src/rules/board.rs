//! The chain of played tiles and its two open ends.
//!
//! Boards are values: `apply` returns a new board and leaves the old one
//! intact, so snapshots can be kept and compared. The tile sequence is an
//! `im::Vector`, which makes both prepending and cloning cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{End, InvariantViolation, PlayerId, SnapshotError, Tile};

/// A tile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub tile: Tile,
    pub owner: PlayerId,
    /// How many tiles were on the board when this one was placed.
    pub sequence: u32,
    /// The stored `(first, second)` reads reversed along the chain.
    pub flipped: bool,
}

impl PlacedTile {
    /// Pips as read from the left end of the chain towards the right.
    #[must_use]
    pub const fn display_pips(&self) -> (u8, u8) {
        if self.flipped {
            (self.tile.second(), self.tile.first())
        } else {
            (self.tile.first(), self.tile.second())
        }
    }
}

/// Played tiles, leftmost first.
///
/// Invariant: for a non-empty board, `left_end` is the left pip of the
/// first tile's `display_pips` and `right_end` the right pip of the last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vector<PlacedTile>,
    ends: Option<(u8, u8)>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Placed tiles, leftmost first.
    pub fn tiles(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.iter()
    }

    /// `(left_end, right_end)`, or `None` before the first tile.
    #[must_use]
    pub fn ends(&self) -> Option<(u8, u8)> {
        self.ends
    }

    #[must_use]
    pub fn left_end(&self) -> Option<u8> {
        self.ends.map(|(left, _)| left)
    }

    #[must_use]
    pub fn right_end(&self) -> Option<u8> {
        self.ends.map(|(_, right)| right)
    }

    /// The outermost tile at `end`.
    #[must_use]
    pub fn outermost(&self, end: End) -> Option<&PlacedTile> {
        match end {
            End::Left => self.tiles.front(),
            End::Right => self.tiles.back(),
        }
    }

    /// Check that `ends` agrees with the chain the way `apply` keeps it:
    /// neighbours touch, and the ends are the outer pips of the outermost
    /// tiles. Boards built through `apply` always pass.
    pub fn check_chain(&self) -> Result<(), SnapshotError> {
        let pips: Vec<(u8, u8)> = self.tiles.iter().map(PlacedTile::display_pips).collect();

        if let Some(position) = pips.windows(2).position(|pair| pair[0].1 != pair[1].0) {
            return Err(SnapshotError::BrokenChain { position });
        }

        let expected = pips.first().zip(pips.last()).map(|(first, last)| (first.0, last.1));
        if self.ends != expected {
            return Err(SnapshotError::BoardEnds {
                expected,
                found: self.ends,
            });
        }
        Ok(())
    }

    /// Place `tile` at `end` on behalf of `owner`.
    ///
    /// The first tile opens the chain as `first | second` whichever end is
    /// named. After that the pip touching the chain must match the open end:
    /// a tile is flipped iff its first stored pip is the one that matched,
    /// checking the non-flipping pip first so doubles never flip.
    ///
    /// Legality is not checked beyond that. A tile with no matching pip means
    /// the caller skipped the validator.
    pub fn apply(&self, tile: Tile, end: End, owner: PlayerId) -> Result<Board, InvariantViolation> {
        let sequence = self.tiles.len() as u32;
        let place = |flipped| PlacedTile {
            tile,
            owner,
            sequence,
            flipped,
        };

        let Some((left, right)) = self.ends else {
            return Ok(Board {
                tiles: Vector::unit(place(false)),
                ends: Some((tile.first(), tile.second())),
            });
        };

        let mut tiles = self.tiles.clone();
        let ends = match end {
            End::Left => {
                let (flipped, new_left) = if tile.second() == left {
                    (false, tile.first())
                } else if tile.first() == left {
                    (true, tile.second())
                } else {
                    return Err(no_match(tile, end, left));
                };
                tiles.push_front(place(flipped));
                (new_left, right)
            }
            End::Right => {
                let (flipped, new_right) = if tile.first() == right {
                    (false, tile.second())
                } else if tile.second() == right {
                    (true, tile.first())
                } else {
                    return Err(no_match(tile, end, right));
                };
                tiles.push_back(place(flipped));
                (left, new_right)
            }
        };

        Ok(Board {
            tiles,
            ends: Some(ends),
        })
    }
}

fn no_match(tile: Tile, end: End, open: u8) -> InvariantViolation {
    InvariantViolation::NoMatchingPip { tile, end, open }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn tile(a: u8, b: u8) -> Tile {
        Tile::from_pips(a, b).unwrap()
    }

    #[test]
    fn test_first_tile_sets_both_ends() {
        let board = Board::new().apply(tile(2, 5), End::Left, P0).unwrap();

        assert_eq!(board.len(), 1);
        assert_eq!(board.ends(), Some((2, 5)));
        let placed = board.outermost(End::Left).unwrap();
        assert!(!placed.flipped);
        assert_eq!(placed.sequence, 0);
        assert_eq!(placed.owner, P0);
    }

    #[test]
    fn test_check_chain_catches_tampering() {
        let board = Board::new().apply(tile(2, 5), End::Left, P0).unwrap();
        assert_eq!(board.check_chain(), Ok(()));

        let wrong_ends = Board {
            ends: Some((2, 6)),
            ..board.clone()
        };
        assert_eq!(
            wrong_ends.check_chain(),
            Err(SnapshotError::BoardEnds {
                expected: Some((2, 5)),
                found: Some((2, 6)),
            })
        );

        let mut tiles = board.tiles.clone();
        tiles.push_back(PlacedTile {
            tile: tile(0, 1),
            owner: P1,
            sequence: 1,
            flipped: false,
        });
        let broken = Board {
            tiles,
            ends: Some((2, 1)),
        };
        assert_eq!(broken.check_chain(), Err(SnapshotError::BrokenChain { position: 0 }));
    }

    #[test]
    fn test_empty_board_has_no_ends() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.left_end(), None);
        assert_eq!(board.right_end(), None);
        assert_eq!(board.check_chain(), Ok(()));
    }

    #[test]
    fn test_left_second_pip_matches_no_flip() {
        // Chain 2|5; 1-2 goes left showing 1|2.
        let board = Board::new().apply(tile(2, 5), End::Left, P0).unwrap();
        let board = board.apply(tile(1, 2), End::Left, P1).unwrap();

        assert_eq!(board.ends(), Some((1, 5)));
        let placed = board.outermost(End::Left).unwrap();
        assert!(!placed.flipped);
        assert_eq!(placed.display_pips(), (1, 2));
        assert_eq!(placed.sequence, 1);
    }

    #[test]
    fn test_left_first_pip_matches_flips() {
        // Chain 2|5; 2-6 goes left showing 6|2.
        let board = Board::new().apply(tile(2, 5), End::Left, P0).unwrap();
        let board = board.apply(tile(2, 6), End::Left, P1).unwrap();

        assert_eq!(board.ends(), Some((6, 5)));
        let placed = board.outermost(End::Left).unwrap();
        assert!(placed.flipped);
        assert_eq!(placed.display_pips(), (6, 2));
    }

    #[test]
    fn test_right_first_pip_matches_no_flip() {
        let board = Board::new().apply(tile(2, 5), End::Left, P0).unwrap();
        let board = board.apply(tile(5, 6), End::Right, P1).unwrap();

        assert_eq!(board.ends(), Some((2, 6)));
        assert!(!board.outermost(End::Right).unwrap().flipped);
    }

    #[test]
    fn test_right_second_pip_matches_flips() {
        let board = Board::new().apply(tile(2, 5), End::Left, P0).unwrap();
        let board = board.apply(tile(0, 5), End::Right, P1).unwrap();

        assert_eq!(board.ends(), Some((2, 0)));
        let placed = board.outermost(End::Right).unwrap();
        assert!(placed.flipped);
        assert_eq!(placed.display_pips(), (5, 0));
    }

    #[test]
    fn test_doubles_never_flip() {
        let board = Board::new().apply(tile(3, 4), End::Left, P0).unwrap();
        let board = board.apply(tile(3, 3), End::Left, P1).unwrap();
        let board = board.apply(tile(4, 4), End::Right, P0).unwrap();

        assert_eq!(board.ends(), Some((3, 4)));
        assert!(board.tiles().all(|p| !p.flipped));
    }

    #[test]
    fn test_no_matching_pip_is_invariant_violation() {
        let board = Board::new().apply(tile(2, 5), End::Left, P0).unwrap();
        let err = board.apply(tile(3, 6), End::Right, P1).unwrap_err();

        assert_eq!(
            err,
            InvariantViolation::NoMatchingPip {
                tile: tile(3, 6),
                end: End::Right,
                open: 5
            }
        );
    }

    #[test]
    fn test_apply_does_not_touch_original() {
        let board = Board::new().apply(tile(2, 5), End::Left, P0).unwrap();
        let _ = board.apply(tile(5, 5), End::Right, P1).unwrap();

        assert_eq!(board.len(), 1);
        assert_eq!(board.ends(), Some((2, 5)));
    }

    #[test]
    fn test_chain_order() {
        let board = Board::new()
            .apply(tile(3, 3), End::Left, P0)
            .and_then(|b| b.apply(tile(1, 3), End::Left, P1))
            .and_then(|b| b.apply(tile(3, 6), End::Right, P0))
            .unwrap();

        let shown: Vec<_> = board.tiles().map(PlacedTile::display_pips).collect();
        assert_eq!(shown, vec![(1, 3), (3, 3), (3, 6)]);
        let sequences: Vec<_> = board.tiles().map(|p| p.sequence).collect();
        assert_eq!(sequences, vec![1, 0, 2]);
    }
}
