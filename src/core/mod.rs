//! Core types: tiles, players and hands, moves, configuration, errors, and
//! game state snapshots.

pub mod tile;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use tile::{Tile, TileId, MAX_PIP, UNIVERSE_SIZE};
pub use player::{Hand, Player, PlayerId, PlayerKind, PlayerMap};
pub use rng::GameRng;
pub use config::{check_deal, RulesConfig, DEFAULT_TILES_PER_HAND, MAX_OPPONENT_DELAY_MS, PLAYER_COUNT};
pub use error::{ConfigError, EngineError, InvariantViolation, RejectReason, Rejection, Result, SnapshotError};
pub use action::{Action, ActionRecord, CommittedMove, End, Move};
pub use state::{EndReason, GameState, GameStats, GameStatus, PlayerStats};
