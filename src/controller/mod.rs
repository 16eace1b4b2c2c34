//! Turn control: the command surface a UI drives, and opponent pacing.

pub mod pacing;
pub mod turn;

pub use pacing::{FixedDelay, Immediate, Manual, Pacing, Tempo};
pub use turn::TurnController;
