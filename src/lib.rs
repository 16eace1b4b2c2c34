//! # dominoes-engine
//!
//! Rules engine and turn state machine for two-player block dominoes
//! (double-six set, no drawing).
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every rules operation reads a `GameState` and
//!    returns a new one. Nothing edits a published snapshot.
//!
//! 2. **Validate, then apply**: the move applier trusts its caller. The
//!    controller checks every command against the validator first, and a
//!    move that slips through anyway is an `InvariantViolation`, not a
//!    silent no-op.
//!
//! 3. **Deterministic given a seed**: shuffling draws from a seeded
//!    ChaCha8 stream and the computer opponent never rolls dice.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: hands, board, pool, and history are
//!   `im` vectors, so snapshots clone in O(1).
//!
//! - **Opponent at a seam**: the computer seat is an `OpponentPolicy`;
//!   when it moves is a separate `Pacing` policy.
//!
//! ## Modules
//!
//! - `core`: tiles, players, moves, RNG, configuration, errors, state
//! - `rules`: board, validator, deal, termination, `RulesEngine`
//! - `ai`: computer opponent heuristic
//! - `controller`: command surface and opponent pacing

pub mod core;
pub mod rules;
pub mod ai;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    Tile, TileId, Hand, Player, PlayerId, PlayerKind, PlayerMap,
    GameRng, RulesConfig,
    End, Move, CommittedMove, Action, ActionRecord,
    EngineError, ConfigError, InvariantViolation, RejectReason, Rejection, SnapshotError,
    GameState, GameStatus, GameStats, PlayerStats, EndReason,
};

pub use crate::rules::{Board, PlacedTile, BlockDominoes, GameResult, RulesEngine, LegalMoves, Termination};

pub use crate::ai::{GreedyOpponent, OpponentPolicy};

pub use crate::controller::{TurnController, Pacing, Immediate, FixedDelay, Manual};
