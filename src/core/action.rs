//! Moves, turn actions, and the records kept for replay.
//!
//! A turn is either a tile played at one end of the chain or a pass:
//! - `Move` = a candidate placement (tile + end)
//! - `CommittedMove` = a placement that happened, with its mover and flip
//! - `ActionRecord` = one entry of the turn history

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::tile::Tile;

/// One of the two open ends of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    Left,
    Right,
}

impl End {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            End::Left => "left",
            End::Right => "right",
        }
    }
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub tile: Tile,
    pub end: End,
}

impl Move {
    #[must_use]
    pub const fn new(tile: Tile, end: End) -> Self {
        Self { tile, end }
    }
}

/// A placement that was applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedMove {
    pub player: PlayerId,
    pub tile: Tile,
    pub end: End,
    /// The tile's stored orientation is reversed along the chain.
    pub flipped: bool,
}

/// What a player did on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Play(CommittedMove),
    Pass,
}

/// A recorded turn for history tracking and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub const fn new(player: PlayerId, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self.action, Action::Pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(a: u8, b: u8) -> Tile {
        Tile::from_pips(a, b).unwrap()
    }

    #[test]
    fn test_end_display() {
        assert_eq!(End::Left.to_string(), "left");
        assert_eq!(End::Right.as_str(), "right");
    }

    #[test]
    fn test_action_record() {
        let pass = ActionRecord::new(PlayerId::new(0), Action::Pass, 3);
        assert!(pass.is_pass());
        assert_eq!(pass.turn, 3);

        let play = ActionRecord::new(
            PlayerId::new(1),
            Action::Play(CommittedMove {
                player: PlayerId::new(1),
                tile: tile(6, 6),
                end: End::Left,
                flipped: false,
            }),
            4,
        );
        assert!(!play.is_pass());
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(0),
            Action::Play(CommittedMove {
                player: PlayerId::new(0),
                tile: tile(1, 5),
                end: End::Left,
                flipped: true,
            }),
            2,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
