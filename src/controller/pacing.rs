//! Scheduling of the computer's moves.
//!
//! The rules are synchronous; pacing only decides *when* the controller
//! resolves a computer turn:
//! - `Immediate`: right away (tests, headless play)
//! - `FixedDelay`: after a bounded sleep (interactive play)
//! - `Manual`: not until the caller asks via `TurnController::step_opponent`

use std::time::Duration;

use crate::core::{RulesConfig, MAX_OPPONENT_DELAY_MS};

/// What to do with a computer turn that just became due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tempo {
    /// Resolve it now.
    Now,
    /// Leave it pending.
    Later,
}

/// Pacing policy for the computer seat.
pub trait Pacing: Send + Sync + std::fmt::Debug {
    /// Called once per computer turn before it is resolved.
    fn before_opponent_move(&self) -> Tempo;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Immediate;

impl Pacing for Immediate {
    fn before_opponent_move(&self) -> Tempo {
        Tempo::Now
    }
}

/// Sleep for a fixed time, then resolve.
#[derive(Clone, Copy, Debug)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Delays beyond [`MAX_OPPONENT_DELAY_MS`] are clamped.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.min(Duration::from_millis(MAX_OPPONENT_DELAY_MS)),
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Pacing for FixedDelay {
    fn before_opponent_move(&self) -> Tempo {
        std::thread::sleep(self.delay);
        Tempo::Now
    }
}

/// Leave computer turns pending until stepped explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Manual;

impl Pacing for Manual {
    fn before_opponent_move(&self) -> Tempo {
        Tempo::Later
    }
}

/// Pacing implied by a configuration.
#[must_use]
pub fn from_config(config: &RulesConfig) -> Box<dyn Pacing> {
    match config.opponent_delay_ms {
        0 => Box::new(Immediate),
        millis => Box::new(FixedDelay::new(Duration::from_millis(millis))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_and_manual() {
        assert_eq!(Immediate.before_opponent_move(), Tempo::Now);
        assert_eq!(Manual.before_opponent_move(), Tempo::Later);
    }

    #[test]
    fn test_fixed_delay_clamped() {
        let pacing = FixedDelay::new(Duration::from_secs(60));
        assert_eq!(pacing.delay(), Duration::from_millis(MAX_OPPONENT_DELAY_MS));
    }

    #[test]
    fn test_fixed_delay_resolves() {
        let pacing = FixedDelay::new(Duration::from_millis(1));
        assert_eq!(pacing.before_opponent_move(), Tempo::Now);
    }

    #[test]
    fn test_from_config() {
        let immediate = from_config(&RulesConfig::default());
        assert_eq!(immediate.before_opponent_move(), Tempo::Now);
        assert!(format!("{:?}", immediate).contains("Immediate"));

        let delayed = from_config(&RulesConfig::default().with_opponent_delay_ms(1500));
        assert!(format!("{:?}", delayed).contains("FixedDelay"));
    }
}
