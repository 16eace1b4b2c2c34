//! The turn controller: one human seat against the computer.
//!
//! ## States
//!
//! `Waiting -> Playing -> {Finished, Blocked}`. Terminal states only leave
//! through `new_game`, which is accepted from any state.
//!
//! ## Commands
//!
//! The human acts through `submit_move` / `submit_pass`. Both are refused
//! with a `Rejection` (and the snapshot left as it was) unless the game is
//! in progress and the human is the active seat. Computer turns run as soon
//! as they become due, subject to the configured `Pacing`; while one is
//! pending the active seat is the computer, so human commands are refused.

use log::{debug, error, warn};

use crate::ai::{GreedyOpponent, OpponentPolicy};
use crate::core::{
    ActionRecord, ConfigError, End, EngineError, GameRng, GameState, GameStats, InvariantViolation, Move,
    Player, PlayerId, PlayerKind, PlayerMap, RejectReason, Rejection, RulesConfig, TileId,
};
use crate::rules::{legal_moves, BlockDominoes, LegalMoves, RulesEngine};

use super::pacing::{self, Pacing, Tempo};

/// Drives a game from discrete commands.
#[derive(Debug)]
pub struct TurnController {
    rules: BlockDominoes,
    opponent: Box<dyn OpponentPolicy>,
    pacing: Box<dyn Pacing>,
    rng: GameRng,
    state: GameState,
    opponent_pending: bool,
}

impl TurnController {
    /// A controller with an empty table, waiting for `new_game`.
    ///
    /// Uses the greedy opponent and the pacing implied by the config.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        let rules = BlockDominoes::new(config)?;
        let pacing = pacing::from_config(rules.config());
        let rng = GameRng::new(rules.config().seed);
        let state = GameState::new(empty_table(rules.config()));

        Ok(Self {
            rules,
            opponent: Box::new(GreedyOpponent),
            pacing,
            rng,
            state,
            opponent_pending: false,
        })
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: impl Pacing + 'static) -> Self {
        self.pacing = Box::new(pacing);
        self
    }

    #[must_use]
    pub fn with_opponent(mut self, opponent: impl OpponentPolicy + 'static) -> Self {
        self.opponent = Box::new(opponent);
        self
    }

    /// Continue from a given snapshot instead of dealing.
    ///
    /// The snapshot is checked with `GameState::validate` first; a malformed
    /// one is refused and the controller is dropped. A computer turn due in
    /// `state` is scheduled right away.
    pub fn resume(mut self, state: GameState) -> Result<Self, EngineError> {
        if let Err(err) = state.validate() {
            warn!("snapshot refused: {err}");
            return Err(err.into());
        }
        self.state = state;
        self.drive_opponent()?;
        Ok(self)
    }

    // === Commands ===

    /// Deal a fresh game with the human seat named `display_name`.
    pub fn new_game(&mut self, display_name: &str) -> Result<&GameState, EngineError> {
        self.state = self.rules.start(display_name, &mut self.rng)?;
        self.opponent_pending = false;
        self.drive_opponent()?;
        Ok(&self.state)
    }

    /// Play `tile_id` at `end` for the human seat.
    pub fn submit_move(&mut self, tile_id: TileId, end: End) -> Result<&GameState, EngineError> {
        self.ensure_human_turn()?;

        let Some(tile) = self.state.active_player().hand.get(tile_id) else {
            return Err(reject(RejectReason::TileNotInHand, format!("tile {tile_id} is not in your hand")));
        };

        let legal = self.rules.legal_moves(&self.state, self.state.active);
        if !legal.contains(tile_id, end) {
            return Err(reject(
                RejectReason::IllegalMove,
                format!("{tile} does not attach at the {end} end"),
            ));
        }

        self.commit(Move::new(tile, end))?;
        self.drive_opponent()?;
        Ok(&self.state)
    }

    /// Pass for the human seat.
    ///
    /// Whether the human really has no move is not re-checked; callers
    /// consult `legal_moves_for` first.
    pub fn submit_pass(&mut self) -> Result<&GameState, EngineError> {
        self.ensure_human_turn()?;
        self.pass()?;
        self.drive_opponent()?;
        Ok(&self.state)
    }

    /// Resolve a due computer turn now, whatever the pacing.
    ///
    /// Returns `false` if no computer turn was due.
    pub fn step_opponent(&mut self) -> Result<bool, EngineError> {
        if !self.is_opponent_due() {
            return Ok(false);
        }
        self.opponent_turn()?;
        self.opponent_pending = self.is_opponent_due();
        Ok(true)
    }

    // === Queries ===

    /// Read-only view of the current game.
    #[must_use]
    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    /// Playable tiles for `player` against the current board, whoever is
    /// active. `None` if `player` has no seat at this table.
    #[must_use]
    pub fn legal_moves_for(&self, player: PlayerId) -> Option<LegalMoves> {
        let seat = self.state.player(player)?;
        Some(legal_moves(&seat.hand, &self.state.board))
    }

    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.state.stats()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.state.active_player()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.player(id)
    }

    #[must_use]
    pub fn can_current_player_move(&self) -> bool {
        self.rules.has_legal_move(&self.state, self.state.active)
    }

    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.state.is_playing() && !self.current_player().is_computer()
    }

    /// A computer turn is waiting for `step_opponent`.
    #[must_use]
    pub fn is_opponent_pending(&self) -> bool {
        self.opponent_pending
    }

    pub fn history(&self) -> impl Iterator<Item = &ActionRecord> {
        self.state.history.iter()
    }

    #[must_use]
    pub fn rules(&self) -> &BlockDominoes {
        &self.rules
    }

    // === Internals ===

    fn ensure_human_turn(&self) -> Result<(), EngineError> {
        if !self.state.is_playing() {
            return Err(reject(
                RejectReason::NotPlaying,
                format!("the game is {:?}", self.state.status),
            ));
        }
        if self.current_player().is_computer() {
            return Err(reject(
                RejectReason::NotYourTurn,
                format!("waiting for {}", self.current_player().name),
            ));
        }
        Ok(())
    }

    fn is_opponent_due(&self) -> bool {
        self.state.is_playing() && self.current_player().is_computer()
    }

    /// Run computer turns until the human is up, the game ends, or pacing
    /// defers.
    fn drive_opponent(&mut self) -> Result<(), EngineError> {
        while self.is_opponent_due() {
            if self.pacing.before_opponent_move() == Tempo::Later {
                debug!("{} to move, pending", self.current_player().name);
                self.opponent_pending = true;
                return Ok(());
            }
            self.opponent_turn()?;
        }
        self.opponent_pending = false;
        Ok(())
    }

    fn opponent_turn(&mut self) -> Result<(), EngineError> {
        let mover = self.current_player();
        match self.opponent.choose_move(&mover.hand, &self.state.board) {
            Some(mv) => self.commit(mv),
            None => self.pass(),
        }
    }

    fn commit(&mut self, mv: Move) -> Result<(), EngineError> {
        self.state = self.rules.apply_move(&self.state, mv).map_err(invariant)?;
        Ok(())
    }

    fn pass(&mut self) -> Result<(), EngineError> {
        self.state = self.rules.apply_pass(&self.state).map_err(invariant)?;
        Ok(())
    }
}

fn empty_table(config: &RulesConfig) -> PlayerMap<Player> {
    PlayerMap::from_vec(vec![
        Player::new(PlayerId::new(0), "Player", PlayerKind::Human),
        Player::new(PlayerId::new(1), config.opponent_name.as_str(), PlayerKind::Computer),
    ])
}

fn reject(reason: RejectReason, message: String) -> EngineError {
    warn!("command rejected ({reason:?}): {message}");
    Rejection::new(reason, message).into()
}

/// The validator was bypassed somewhere. Loud in debug builds.
fn invariant(violation: InvariantViolation) -> EngineError {
    error!("rules invariant violated: {violation}");
    if cfg!(debug_assertions) {
        panic!("rules invariant violated: {violation}");
    }
    violation.into()
}
