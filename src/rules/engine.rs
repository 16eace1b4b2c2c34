//! Rules engine: pure transitions between game snapshots.
//!
//! Every transition takes the current `GameState` by reference and returns
//! its successor:
//! - `start`: deal and pick who leads
//! - `apply_move`: place a tile for the active seat
//! - `apply_pass`: skip the active seat's turn
//!
//! None of them check legality against the validator. Callers (the turn
//! controller) do that first; a transition fed an impossible move reports an
//! `InvariantViolation` and produces nothing.

use log::{debug, info, warn};

use crate::core::{
    Action, ActionRecord, CommittedMove, ConfigError, GameRng, GameState, InvariantViolation, Move, Player,
    PlayerId, PlayerKind, PlayerMap, RulesConfig,
};

use super::deal::{choose_starter, deal};
use super::termination::{evaluate, Termination};
use super::validator::{legal_moves, LegalMoves};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Blocked with equal pip sums.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: hand of `player` against the current board, whoever is
///   active
/// - `apply_move` / `apply_pass`: act for `state.active`, never mutate the
///   input
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &RulesConfig;

    /// Playable tiles for a seat. An unknown seat has none (and is logged).
    fn legal_moves(&self, state: &GameState, player: PlayerId) -> LegalMoves;

    /// Place a tile for the active seat.
    fn apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, InvariantViolation>;

    /// Pass for the active seat.
    fn apply_pass(&self, state: &GameState) -> Result<GameState, InvariantViolation>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result()
    }

    /// Does `player` hold any playable tile?
    fn has_legal_move(&self, state: &GameState, player: PlayerId) -> bool {
        !self.legal_moves(state, player).is_empty()
    }
}

/// Block dominoes: no drawing, game ends on an empty hand or when every
/// seat passes in a row.
#[derive(Clone, Debug)]
pub struct BlockDominoes {
    config: RulesConfig,
}

impl BlockDominoes {
    /// Rules for a validated configuration.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Seat `human_name` against the computer, deal, and pick who leads.
    pub fn start(&self, human_name: &str, rng: &mut GameRng) -> Result<GameState, ConfigError> {
        let seats = [
            (human_name, PlayerKind::Human),
            (self.config.opponent_name.as_str(), PlayerKind::Computer),
        ];
        let dealt = deal(seats.len(), self.config.tiles_per_hand, rng)?;

        let players = PlayerMap::from_vec(
            seats
                .into_iter()
                .zip(dealt.hands)
                .enumerate()
                .map(|(i, ((name, kind), hand))| Player::new(PlayerId::new(i as u8), name, kind).with_hand(hand))
                .collect(),
        );
        let starter = choose_starter(&players);

        info!(
            "new game: {} leads, {} tiles each, {} in the pool",
            players[starter].name,
            self.config.tiles_per_hand,
            dealt.pool.len()
        );

        Ok(GameState::in_progress(
            players,
            Default::default(),
            dealt.pool,
            starter,
        ))
    }
}

impl RulesEngine for BlockDominoes {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn legal_moves(&self, state: &GameState, player: PlayerId) -> LegalMoves {
        match state.player(player) {
            Some(seat) => legal_moves(&seat.hand, &state.board),
            None => {
                warn!("legal moves asked for {player}, who has no seat ({} seats)", state.player_count());
                LegalMoves::default()
            }
        }
    }

    fn apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, InvariantViolation> {
        ensure_playing(state)?;

        let mover = state.active;
        let hand = state.players[mover].hand.remove(mv.tile.id())?;
        let board = state.board.apply(mv.tile, mv.end, mover)?;
        let flipped = board.outermost(mv.end).is_some_and(|placed| placed.flipped);

        let committed = CommittedMove {
            player: mover,
            tile: mv.tile,
            end: mv.end,
            flipped,
        };

        let mut next = state.clone();
        next.players[mover].hand = hand;
        next.board = board;
        next.pass_count = 0;
        next.last_move = Some(committed);
        record(&mut next, mover, Action::Play(committed));

        debug!(
            "turn {}: {} played {} at {}{}",
            next.turn_number,
            mover,
            mv.tile,
            mv.end,
            if flipped { " (flipped)" } else { "" }
        );

        // A tile just went down, so only an emptied hand can end the game here.
        let verdict = evaluate(&next.players, true);
        conclude(&mut next, verdict);
        Ok(next)
    }

    fn apply_pass(&self, state: &GameState) -> Result<GameState, InvariantViolation> {
        ensure_playing(state)?;

        let mover = state.active;
        let mut next = state.clone();
        next.pass_count += 1;
        record(&mut next, mover, Action::Pass);

        debug!("turn {}: {} passed ({} in a row)", next.turn_number, mover, next.pass_count);

        if next.pass_count as usize >= next.player_count() {
            let verdict = evaluate(&next.players, false);
            conclude(&mut next, verdict);
        } else {
            next.active = mover.next(next.player_count());
        }
        Ok(next)
    }
}

fn ensure_playing(state: &GameState) -> Result<(), InvariantViolation> {
    if state.is_playing() {
        Ok(())
    } else {
        Err(InvariantViolation::NotInProgress { status: state.status })
    }
}

fn record(state: &mut GameState, player: PlayerId, action: Action) {
    state.turn_number += 1;
    state.history.push_back(ActionRecord::new(player, action, state.turn_number));
}

/// Apply a verdict: end the game in place or hand the turn on.
fn conclude(state: &mut GameState, verdict: Termination) {
    if !verdict.is_over() {
        state.active = state.active.next(state.player_count());
        return;
    }

    state.status = verdict.status();
    state.winner = verdict.winner();
    state.end_reason = verdict.reason();

    match state.winner.and_then(|id| state.player(id)) {
        Some(winner) => info!("game over ({:?}): {} wins", state.status, winner.name),
        None => info!("game over ({:?}): draw", state.status),
    }
}
