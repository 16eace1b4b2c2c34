//! Rules configuration.
//!
//! The variant is fixed (block dominoes, two seats, no drawing); what a
//! caller can tune is the deal size, the seed, and how the computer seat is
//! presented.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::tile::UNIVERSE_SIZE;

/// Seats at the table. The variant is strictly one human against one computer.
pub const PLAYER_COUNT: usize = 2;

/// Default tiles dealt to each seat.
pub const DEFAULT_TILES_PER_HAND: usize = 7;

/// Upper bound on the opponent's presentation delay.
pub const MAX_OPPONENT_DELAY_MS: u64 = 5_000;

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Number of seats (must equal [`PLAYER_COUNT`]).
    pub player_count: usize,

    /// Tiles dealt to each seat.
    pub tiles_per_hand: usize,

    /// Seed for the dealing RNG.
    /// Same seed produces the same sequence of deals.
    pub seed: u64,

    /// Display name of the computer seat.
    pub opponent_name: String,

    /// Pause before each computer move, in milliseconds (0 = none).
    pub opponent_delay_ms: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            player_count: PLAYER_COUNT,
            tiles_per_hand: DEFAULT_TILES_PER_HAND,
            seed: 42,
            opponent_name: "Computer".to_string(),
            opponent_delay_ms: 0,
        }
    }
}

impl RulesConfig {
    pub fn with_tiles_per_hand(mut self, tiles: usize) -> Self {
        self.tiles_per_hand = tiles;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_opponent_name(mut self, name: impl Into<String>) -> Self {
        self.opponent_name = name.into();
        self
    }

    pub fn with_opponent_delay_ms(mut self, millis: u64) -> Self {
        self.opponent_delay_ms = millis;
        self
    }

    /// Check the configuration can produce a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count != PLAYER_COUNT {
            return Err(ConfigError::PlayerCount {
                expected: PLAYER_COUNT,
                got: self.player_count,
            });
        }
        check_deal(self.player_count, self.tiles_per_hand)?;
        if self.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(ConfigError::DelayTooLong {
                millis: self.opponent_delay_ms,
                max: MAX_OPPONENT_DELAY_MS,
            });
        }
        Ok(())
    }
}

/// Can `player_count` hands of `tiles_per_hand` come out of one set?
pub fn check_deal(player_count: usize, tiles_per_hand: usize) -> Result<(), ConfigError> {
    if tiles_per_hand == 0 {
        return Err(ConfigError::EmptyHands);
    }
    let requested = player_count.saturating_mul(tiles_per_hand);
    if requested > UNIVERSE_SIZE {
        return Err(ConfigError::DealExceedsUniverse {
            requested,
            available: UNIVERSE_SIZE,
        });
    }
    Ok(())
}
