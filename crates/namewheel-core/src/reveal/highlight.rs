#![forbid(unsafe_code)]

//! Discrete reveal: a highlight that flickers across the entries and locks
//! onto the target near the end.
//!
//! The run lasts a fixed duration. Each tick the driver reports the delay to
//! wait before the next tick; that delay shrinks as progress grows, so the
//! flicker visibly slows toward the finish. Until the lock threshold the
//! highlighted index is re-randomized every tick (a flicker, not a cycle);
//! past it the highlight is pinned to the target for the remainder of the
//! run, guaranteeing the reveal matches the scheduled outcome.

use std::time::Duration;

use rand::Rng;
use rand::rngs::SmallRng;

/// Total run length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);
/// Progress at which the highlight pins to the target.
pub const LOCK_THRESHOLD: f64 = 0.95;
/// Reschedule delay floor.
pub const BASE_DELAY: Duration = Duration::from_millis(50);
/// Extra reschedule delay at progress 0, decaying linearly to nothing.
pub const DELAY_RANGE: Duration = Duration::from_millis(200);

/// A single highlight-cycling run.
#[derive(Debug, Clone)]
pub struct HighlightCycler {
    duration: Duration,
    elapsed: Duration,
    target: usize,
    entry_count: usize,
    current: usize,
    rng: SmallRng,
}

impl HighlightCycler {
    /// Start a run toward `target` over a snapshot of `entry_count` entries.
    ///
    /// `target` must be in `0..entry_count`; the caller (the session) derives
    /// it from the same snapshot via the scheduler.
    #[must_use]
    pub fn new(target: usize, entry_count: usize, rng: SmallRng) -> Self {
        debug_assert!(entry_count > 0);
        debug_assert!(target < entry_count);
        Self {
            duration: DEFAULT_DURATION,
            elapsed: Duration::ZERO,
            target,
            entry_count,
            current: target,
            rng,
        }
    }

    /// Override the run duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Fraction of the run elapsed, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// The index currently highlighted. Fixed at the target once complete.
    #[must_use]
    pub fn current_highlight(&self) -> usize {
        self.current
    }

    /// The index this run was started toward.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// The winner, available once the run is complete. Always the target.
    #[must_use]
    pub fn winner_index(&self) -> Option<usize> {
        self.is_complete().then_some(self.target)
    }

    /// Advance the run by `delta` of virtual time.
    ///
    /// Returns the delay before the next tick, or `None` once complete. The
    /// delay is `base + (1 - progress) * range`, monotonically decreasing
    /// over the run.
    pub fn tick(&mut self, delta: Duration) -> Option<Duration> {
        if self.is_complete() {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        let progress = self.progress();
        if progress >= LOCK_THRESHOLD {
            self.current = self.target;
        } else {
            self.current = self.rng.random_range(0..self.entry_count);
        }
        if progress >= 1.0 {
            return None;
        }
        Some(BASE_DELAY + DELAY_RANGE.mul_f64(1.0 - progress))
    }
}
