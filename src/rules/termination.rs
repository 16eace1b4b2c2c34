//! Game-over detection and winner selection.

use crate::core::{EndReason, GameStatus, Player, PlayerId, PlayerMap};

/// Verdict after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Play goes on.
    Continue,
    /// A seat ran out of tiles.
    Finished { winner: PlayerId },
    /// Nobody can move; lowest remaining pips wins, exact tie is a draw.
    Blocked { winner: Option<PlayerId> },
}

impl Termination {
    #[must_use]
    pub const fn status(self) -> GameStatus {
        match self {
            Termination::Continue => GameStatus::Playing,
            Termination::Finished { .. } => GameStatus::Finished,
            Termination::Blocked { .. } => GameStatus::Blocked,
        }
    }

    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Termination::Continue => None,
            Termination::Finished { winner } => Some(winner),
            Termination::Blocked { winner } => winner,
        }
    }

    #[must_use]
    pub const fn reason(self) -> Option<EndReason> {
        match self {
            Termination::Continue => None,
            Termination::Finished { .. } => Some(EndReason::EmptiedHand),
            Termination::Blocked { .. } => Some(EndReason::Blocked),
        }
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Termination::Continue)
    }
}

/// Decide whether the game is over.
///
/// An empty hand ends the game first (first such seat wins). Otherwise, if
/// nobody has a legal move, the game is blocked.
#[must_use]
pub fn evaluate(players: &PlayerMap<Player>, any_legal_move_exists: bool) -> Termination {
    if let Some((winner, _)) = players.iter().find(|(_, p)| p.hand.is_empty()) {
        return Termination::Finished { winner };
    }

    if any_legal_move_exists {
        return Termination::Continue;
    }

    Termination::Blocked {
        winner: lowest_pip_sum(players),
    }
}

/// The seat holding strictly the fewest pips, or `None` on a tie.
fn lowest_pip_sum(players: &PlayerMap<Player>) -> Option<PlayerId> {
    let mut best: Option<(PlayerId, u32)> = None;
    let mut tied = false;

    for (id, player) in players.iter() {
        let sum = player.hand.pip_sum();
        match best {
            Some((_, low)) if sum > low => {}
            Some((_, low)) if sum == low => tied = true,
            _ => {
                best = Some((id, sum));
                tied = false;
            }
        }
    }

    if tied {
        None
    } else {
        best.map(|(id, _)| id)
    }
}
