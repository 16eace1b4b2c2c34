//! Block-domino rules.
//!
//! - `board`: the chain of played tiles and the move applier
//! - `validator`: which tiles attach where
//! - `deal`: tile set, shuffle, deal, starting seat
//! - `termination`: game-over and winner
//! - `engine`: `RulesEngine` trait and the pure turn transitions

pub mod board;
pub mod deal;
pub mod engine;
pub mod termination;
pub mod validator;

pub use board::{Board, PlacedTile};
pub use deal::{choose_starter, deal, generate_universe, shuffle, Deal};
pub use engine::{BlockDominoes, GameResult, RulesEngine};
pub use termination::{evaluate, Termination};
pub use validator::{legal_moves, playable_ends, Ends, LegalMoves, PlayableTile};
