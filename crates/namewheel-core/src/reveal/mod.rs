#![forbid(unsafe_code)]

//! Reveal drivers: animate toward the chosen outcome.
//!
//! Both strategies share one lifecycle: construct at trigger time, feed
//! [`RevealDriver::tick`] from an external loop until it stops asking to be
//! rescheduled, then read the winner. There is no cancellation and no
//! mid-run strategy switch; a run always reaches its terminal state.
//!
//! The two strategies determine their winner differently on purpose. The
//! highlight cycler is handed a target index up front and is guaranteed to
//! land on it; the rotating wheel stops wherever friction says and the winner
//! is read off the final angle. See [`RotationDecay`] for why the wheel does
//! not honor scripted outcomes.

pub mod highlight;
pub mod rotation;

pub use highlight::HighlightCycler;
pub use rotation::RotationDecay;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which reveal animation a deployment uses. Fixed per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealStrategy {
    /// Discrete reveal: flickering highlight that locks onto the target.
    Highlight,
    /// Continuous reveal: spinning wheel decaying under friction.
    Wheel,
}

/// A single reveal run, polymorphic over the two strategies.
#[derive(Debug, Clone)]
pub enum RevealDriver {
    Highlight(HighlightCycler),
    Wheel(RotationDecay),
}

impl RevealDriver {
    /// Advance the run. Returns the delay after which the caller should tick
    /// again, or `None` once the run is complete. Ticking a completed run is
    /// a no-op.
    pub fn tick(&mut self, delta: Duration) -> Option<Duration> {
        match self {
            Self::Highlight(cycler) => cycler.tick(delta),
            Self::Wheel(wheel) => wheel.tick(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Highlight(cycler) => cycler.is_complete(),
            Self::Wheel(wheel) => wheel.is_complete(),
        }
    }

    /// The currently highlighted entry, for the rendering collaborator.
    /// `None` under the wheel strategy.
    #[must_use]
    pub fn highlight(&self) -> Option<usize> {
        match self {
            Self::Highlight(cycler) => Some(cycler.current_highlight()),
            Self::Wheel(_) => None,
        }
    }

    /// The current wheel angle in radians, for the rendering collaborator.
    /// `None` under the highlight strategy.
    #[must_use]
    pub fn angle(&self) -> Option<f64> {
        match self {
            Self::Highlight(_) => None,
            Self::Wheel(wheel) => Some(wheel.angle()),
        }
    }

    /// The winning index once the run is complete; `None` while running.
    #[must_use]
    pub fn winner_index(&self) -> Option<usize> {
        match self {
            Self::Highlight(cycler) => cycler.winner_index(),
            Self::Wheel(wheel) => wheel.winner_index(),
        }
    }
}
