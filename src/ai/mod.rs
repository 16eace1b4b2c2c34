//! Computer opponent.
//!
//! The opponent is a policy: given its hand and the board, pick a move or
//! pass. `GreedyOpponent` is a single-ply heuristic with no search and no
//! randomness, so the same position always yields the same move.

pub mod policy;

pub use policy::{choose_move, GreedyOpponent, OpponentPolicy};
