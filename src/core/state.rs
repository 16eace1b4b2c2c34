//! Game state snapshots.
//!
//! ## GameState
//!
//! Everything about one game at one moment:
//! - Seats with their hands
//! - Board and pool
//! - Status, active seat, consecutive passes
//! - Winner and why the game ended
//! - Last move and the full turn history
//!
//! Snapshots are never edited in place once published. Rules functions
//! clone and return a successor; the `im` collections inside make that
//! clone O(1).
//!
//! ## GameStats
//!
//! Derived per-seat counts and scores for display.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, CommittedMove};
use super::config::PLAYER_COUNT;
use super::error::SnapshotError;
use super::player::{Player, PlayerId, PlayerMap};
use super::tile::{Tile, UNIVERSE_SIZE};
use crate::rules::{Board, GameResult};

/// Game lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Seats set, nothing dealt yet.
    Waiting,
    /// Tiles dealt, turns in progress.
    Playing,
    /// A seat emptied its hand.
    Finished,
    /// Every seat passed in succession.
    Blocked,
}

impl GameStatus {
    /// Only a new game leaves a terminal status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Finished | GameStatus::Blocked)
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    EmptiedHand,
    Blocked,
}

/// Full game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seats in turn order.
    pub players: PlayerMap<Player>,

    /// Seat to act.
    pub active: PlayerId,

    pub board: Board,

    pub status: GameStatus,

    /// Set once the game ends with a winner; `None` on a drawn block.
    pub winner: Option<PlayerId>,

    pub end_reason: Option<EndReason>,

    /// Undealt tiles. Never drawn from.
    pub pool: Vector<Tile>,

    pub last_move: Option<CommittedMove>,

    /// Consecutive passes since the last placed tile.
    pub pass_count: u32,

    /// Turns taken so far; the next action is turn `turn_number + 1`.
    pub turn_number: u32,

    /// Every action in order.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// A table with seats but nothing dealt.
    #[must_use]
    pub fn new(players: PlayerMap<Player>) -> Self {
        Self {
            players,
            active: PlayerId::new(0),
            board: Board::new(),
            status: GameStatus::Waiting,
            winner: None,
            end_reason: None,
            pool: Vector::new(),
            last_move: None,
            pass_count: 0,
            turn_number: 0,
            history: Vector::new(),
        }
    }

    /// A game in progress from explicit parts.
    ///
    /// Used to start a dealt game and to resume from a known position.
    #[must_use]
    pub fn in_progress(players: PlayerMap<Player>, board: Board, pool: Vector<Tile>, active: PlayerId) -> Self {
        Self {
            active,
            board,
            pool,
            status: GameStatus::Playing,
            ..Self::new(players)
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Outcome of a finished or blocked game.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.status.is_terminal() {
            return None;
        }
        Some(self.winner.map_or(GameResult::Draw, GameResult::Winner))
    }

    /// Check a snapshot that did not come from the rules functions (e.g. one
    /// read back from JSON).
    ///
    /// Seats must be labelled in order and the active seat and winner must
    /// exist. Every tile of the set appears exactly once across hands, board
    /// and pool, and the board's ends agree with its chain.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let player_count = self.player_count();
        if player_count != PLAYER_COUNT {
            return Err(SnapshotError::PlayerCount {
                expected: PLAYER_COUNT,
                got: player_count,
            });
        }

        for (index, player) in self.players.values().enumerate() {
            if player.id.index() != index {
                return Err(SnapshotError::SeatMismatch { index, found: player.id });
            }
        }

        for seat in std::iter::once(self.active).chain(self.winner) {
            if seat.index() >= player_count {
                return Err(SnapshotError::UnknownSeat { seat, player_count });
            }
        }

        self.check_tiles()?;
        self.board.check_chain()
    }

    fn check_tiles(&self) -> Result<(), SnapshotError> {
        let tiles = self
            .players
            .values()
            .flat_map(|p| p.hand.iter().copied())
            .chain(self.board.tiles().map(|placed| placed.tile))
            .chain(self.pool.iter().copied());

        let mut seen = [false; UNIVERSE_SIZE];
        let mut found = 0;
        for tile in tiles {
            if Tile::from_id(tile.id()) != Some(tile) {
                return Err(SnapshotError::UnknownTile { tile });
            }
            let slot = &mut seen[usize::from(tile.id().raw())];
            if *slot {
                return Err(SnapshotError::DuplicateTile { tile_id: tile.id() });
            }
            *slot = true;
            found += 1;
        }

        if found != UNIVERSE_SIZE {
            return Err(SnapshotError::MissingTiles {
                expected: UNIVERSE_SIZE,
                found,
            });
        }
        Ok(())
    }

    /// Derived counts and scores.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats {
            tiles_played: self.board.len(),
            pool_size: self.pool.len(),
            players: self
                .players
                .values()
                .map(|p| PlayerStats {
                    id: p.id,
                    name: p.name.clone(),
                    tiles_left: p.hand.len(),
                    score: p.hand.pip_sum(),
                })
                .collect(),
        }
    }
}

/// Per-seat summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub id: PlayerId,
    pub name: String,
    pub tiles_left: usize,
    /// Pip sum of the tiles still held.
    pub score: u32,
}

/// Table summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub tiles_played: usize,
    pub pool_size: usize,
    pub players: Vec<PlayerStats>,
}
