//! Opponent move selection.

use crate::core::{Hand, Move};
use crate::rules::{legal_moves, Board, PlayableTile};

// =============================================================================
// Opponent Policy
// =============================================================================

/// Policy for the computer seat's moves.
pub trait OpponentPolicy: Send + Sync + std::fmt::Debug {
    /// Choose a move for the given hand.
    ///
    /// Returns `None` if no tile attaches anywhere; the caller then passes.
    fn choose_move(&self, hand: &Hand, board: &Board) -> Option<Move>;
}

/// Greedy heuristic: dump doubles first, then the heaviest tile.
///
/// Precedence, strictly in order:
/// 1. doubles over non-doubles
/// 2. higher pip sum
/// 3. earlier in hand order
///
/// The chosen tile goes to the first end the validator lists (left before
/// right); the other end is not considered even when both are open.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyOpponent;

impl OpponentPolicy for GreedyOpponent {
    fn choose_move(&self, hand: &Hand, board: &Board) -> Option<Move> {
        choose_move(hand, board)
    }
}

/// The greedy heuristic as a free function.
#[must_use]
pub fn choose_move(hand: &Hand, board: &Board) -> Option<Move> {
    let moves = legal_moves(hand, board);

    let best = moves.iter().fold(None::<&PlayableTile>, |best, candidate| match best {
        Some(current) if rank(candidate) <= rank(current) => Some(current),
        _ => Some(candidate),
    })?;

    best.ends.first().map(|&end| Move::new(best.tile, end))
}

fn rank(candidate: &PlayableTile) -> (bool, u32) {
    (candidate.tile.is_double(), candidate.tile.pip_sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{End, PlayerId, Tile};

    fn tile(a: u8, b: u8) -> Tile {
        Tile::from_pips(a, b).unwrap()
    }

    fn board(tiles: &[(Tile, End)]) -> Board {
        tiles.iter().fold(Board::new(), |b, &(t, end)| {
            b.apply(t, end, PlayerId::new(0)).unwrap()
        })
    }

    #[test]
    fn test_prefers_double() {
        let hand = Hand::new([tile(5, 6), tile(1, 1), tile(4, 6)]);
        let mv = choose_move(&hand, &Board::new()).unwrap();
        assert_eq!(mv, Move::new(tile(1, 1), End::Left));
    }

    #[test]
    fn test_prefers_higher_double() {
        let hand = Hand::new([tile(1, 1), tile(5, 5), tile(3, 3)]);
        let mv = choose_move(&hand, &Board::new()).unwrap();
        assert_eq!(mv.tile, tile(5, 5));
    }

    #[test]
    fn test_prefers_higher_sum_without_doubles() {
        let hand = Hand::new([tile(0, 2), tile(4, 6), tile(1, 3)]);
        let mv = choose_move(&hand, &Board::new()).unwrap();
        assert_eq!(mv.tile, tile(4, 6));
    }

    #[test]
    fn test_ties_keep_hand_order() {
        // 1-6 and 3-4 both sum to 7.
        let hand = Hand::new([tile(1, 6), tile(3, 4)]);
        assert_eq!(choose_move(&hand, &Board::new()).unwrap().tile, tile(1, 6));

        let hand = Hand::new([tile(3, 4), tile(1, 6)]);
        assert_eq!(choose_move(&hand, &Board::new()).unwrap().tile, tile(3, 4));
    }

    #[test]
    fn test_only_playable_tiles_considered() {
        // Ends 5 | 2; 6-6 is the heaviest double but does not attach.
        let b = board(&[(tile(5, 5), End::Left), (tile(2, 5), End::Right)]);
        let hand = Hand::new([tile(6, 6), tile(0, 2), tile(1, 5)]);

        let mv = choose_move(&hand, &b).unwrap();
        assert_eq!(mv, Move::new(tile(1, 5), End::Left));
    }

    #[test]
    fn test_both_ends_takes_left() {
        let b = board(&[(tile(5, 5), End::Left), (tile(2, 5), End::Right)]);
        let hand = Hand::new([tile(2, 5)]);

        let mv = choose_move(&hand, &b).unwrap();
        assert_eq!(mv.end, End::Left);
    }

    #[test]
    fn test_no_move_returns_none() {
        let b = board(&[(tile(5, 5), End::Left)]);
        let hand = Hand::new([tile(0, 1), tile(2, 3)]);
        assert!(choose_move(&hand, &b).is_none());
        assert!(GreedyOpponent.choose_move(&Hand::default(), &b).is_none());
    }

    #[test]
    fn test_deterministic() {
        let b = board(&[(tile(3, 4), End::Left)]);
        let hand = Hand::new([tile(3, 6), tile(4, 5), tile(0, 3), tile(4, 4)]);

        let first = GreedyOpponent.choose_move(&hand, &b);
        for _ in 0..10 {
            assert_eq!(GreedyOpponent.choose_move(&hand, &b), first);
        }
        assert_eq!(first, Some(Move::new(tile(4, 4), End::Right)));
    }
}
