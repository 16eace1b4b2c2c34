//! Error types.
//!
//! Three kinds, matching how the caller is expected to react:
//! - `ConfigError`: the game cannot be set up at all
//! - `Rejection`: a command was refused; the state did not change
//! - `InvariantViolation`: a caller skipped the move validator
//! - `SnapshotError`: a stored snapshot is not a reachable game position

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::End;
use super::player::PlayerId;
use super::state::GameStatus;
use super::tile::{Tile, TileId};

/// Invalid game setup. Surfaces before any game starts.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot deal {requested} tiles from a set of {available}")]
    DealExceedsUniverse { requested: usize, available: usize },

    #[error("tiles per hand must be at least 1")]
    EmptyHands,

    #[error("block dominoes needs exactly {expected} players, got {got}")]
    PlayerCount { expected: usize, got: usize },

    #[error("opponent delay of {millis}ms exceeds the {max}ms limit")]
    DelayTooLong { millis: u64, max: u64 },
}

/// Why a command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The game is not in progress.
    NotPlaying,
    /// Another player is to act.
    NotYourTurn,
    /// The tile is not in the acting player's hand.
    TileNotInHand,
    /// The tile does not attach at the requested end.
    IllegalMove,
}

/// A refused command. The game state is unchanged.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("{reason:?}: {message}")]
pub struct Rejection {
    pub reason: RejectReason,
    pub message: String,
}

impl Rejection {
    pub fn new(reason: RejectReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// A rules function was called with input the validator would never produce.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvariantViolation {
    #[error("tile {tile} has no pip matching the {end} end ({open})")]
    NoMatchingPip { tile: Tile, end: End, open: u8 },

    #[error("tile {tile_id} is not in the hand")]
    TileNotInHand { tile_id: TileId },

    #[error("cannot act while the game is {status:?}")]
    NotInProgress { status: GameStatus },
}

/// A snapshot handed back to the engine (e.g. deserialized) is malformed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("snapshot has {got} seats, expected {expected}")]
    PlayerCount { expected: usize, got: usize },

    #[error("seat {index} is labelled {found}")]
    SeatMismatch { index: usize, found: PlayerId },

    #[error("{seat} is not at the table ({player_count} seats)")]
    UnknownSeat { seat: PlayerId, player_count: usize },

    #[error("tile {tile} is not part of the set")]
    UnknownTile { tile: Tile },

    #[error("tile {tile_id} appears more than once")]
    DuplicateTile { tile_id: TileId },

    #[error("snapshot accounts for {found} tiles, expected {expected}")]
    MissingTiles { expected: usize, found: usize },

    #[error("board ends {found:?} do not match the chain ({expected:?})")]
    BoardEnds {
        expected: Option<(u8, u8)>,
        found: Option<(u8, u8)>,
    },

    #[error("board tile {position} does not touch the next one")]
    BrokenChain { position: usize },
}

/// Umbrella error for the controller surface.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl EngineError {
    /// The rejection, if this error is one.
    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            EngineError::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
