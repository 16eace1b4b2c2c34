//! Move legality.
//!
//! A tile attaches at an end when either of its pips equals the pip exposed
//! there. On an empty board every tile is playable, at a single opening
//! reported as `Left`.

use smallvec::SmallVec;

use crate::core::{End, Hand, Move, Tile, TileId};

use super::board::Board;

/// Ends a tile qualifies for, left before right.
pub type Ends = SmallVec<[End; 2]>;

/// A playable tile and every end it attaches at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayableTile {
    pub tile: Tile,
    pub ends: Ends,
}

/// Playable tiles in hand order. Tiles with no legal end are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    entries: Vec<PlayableTile>,
}

impl LegalMoves {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of playable tiles (not tile/end pairs).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayableTile> {
        self.entries.iter()
    }

    /// Ends at which `tile_id` is playable; empty if it is not.
    #[must_use]
    pub fn ends_for(&self, tile_id: TileId) -> &[End] {
        self.entries
            .iter()
            .find(|e| e.tile.id() == tile_id)
            .map(|e| e.ends.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, tile_id: TileId, end: End) -> bool {
        self.ends_for(tile_id).contains(&end)
    }

    /// Every tile/end pair as a `Move`, in hand order then end order.
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        self.entries
            .iter()
            .flat_map(|e| e.ends.iter().map(move |&end| Move::new(e.tile, end)))
            .collect()
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = &'a PlayableTile;
    type IntoIter = std::slice::Iter<'a, PlayableTile>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Ends at which `tile` attaches to `board`.
#[must_use]
pub fn playable_ends(tile: Tile, board: &Board) -> Ends {
    let mut ends = Ends::new();
    match board.ends() {
        None => ends.push(End::Left),
        Some((left, right)) => {
            if tile.has(left) {
                ends.push(End::Left);
            }
            if tile.has(right) {
                ends.push(End::Right);
            }
        }
    }
    ends
}

/// Every playable tile in `hand` against `board`.
#[must_use]
pub fn legal_moves(hand: &Hand, board: &Board) -> LegalMoves {
    let entries = hand
        .iter()
        .filter_map(|&tile| {
            let ends = playable_ends(tile, board);
            (!ends.is_empty()).then_some(PlayableTile { tile, ends })
        })
        .collect();

    LegalMoves { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn tile(a: u8, b: u8) -> Tile {
        Tile::from_pips(a, b).unwrap()
    }

    fn board_with_ends(left: u8, right: u8) -> Board {
        // left|left double, then a tile turning the right end to `right`.
        let p = PlayerId::new(0);
        let board = Board::new().apply(tile(left, left), End::Left, p).unwrap();
        if left == right {
            board
        } else {
            board.apply(tile(left, right), End::Right, p).unwrap()
        }
    }

    #[test]
    fn test_empty_board_everything_left() {
        let hand = Hand::new([tile(0, 1), tile(6, 6)]);
        let moves = legal_moves(&hand, &Board::new());

        assert_eq!(moves.len(), 2);
        for entry in &moves {
            assert_eq!(entry.ends.as_slice(), &[End::Left]);
        }
    }

    #[test]
    fn test_only_matching_tiles_reported() {
        let board = board_with_ends(5, 2);
        let hand = Hand::new([tile(2, 6), tile(0, 1), tile(4, 5)]);

        let moves = legal_moves(&hand, &board);

        assert_eq!(moves.len(), 2);
        assert_eq!(moves.ends_for(tile(2, 6).id()), &[End::Right]);
        assert_eq!(moves.ends_for(tile(4, 5).id()), &[End::Left]);
        assert!(moves.ends_for(tile(0, 1).id()).is_empty());
    }

    #[test]
    fn test_tile_matching_both_ends() {
        let board = board_with_ends(5, 2);
        let hand = Hand::new([tile(2, 5)]);

        let moves = legal_moves(&hand, &board);

        assert_eq!(moves.ends_for(tile(2, 5).id()), &[End::Left, End::Right]);
        assert!(moves.contains(tile(2, 5).id(), End::Left));
        assert!(moves.contains(tile(2, 5).id(), End::Right));
    }

    #[test]
    fn test_equal_ends_report_both() {
        let board = board_with_ends(4, 4);
        let hand = Hand::new([tile(1, 4)]);

        let moves = legal_moves(&hand, &board);
        assert_eq!(moves.ends_for(tile(1, 4).id()), &[End::Left, End::Right]);
    }

    #[test]
    fn test_moves_flatten_in_order() {
        let board = board_with_ends(5, 2);
        let hand = Hand::new([tile(2, 5), tile(2, 6)]);

        let moves = legal_moves(&hand, &board).moves();
        assert_eq!(
            moves,
            vec![
                Move::new(tile(2, 5), End::Left),
                Move::new(tile(2, 5), End::Right),
                Move::new(tile(2, 6), End::Right),
            ]
        );
    }

    #[test]
    fn test_no_moves() {
        let board = board_with_ends(5, 2);
        let hand = Hand::new([tile(0, 1), tile(3, 4)]);
        assert!(legal_moves(&hand, &board).is_empty());
    }
}
