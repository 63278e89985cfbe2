#![forbid(unsafe_code)]

//! Continuous reveal: a wheel spun with an initial angular velocity that
//! decays under friction until it rests.
//!
//! Each frame tick applies `angle += velocity; velocity *= friction`; the run
//! is terminal once velocity drops below the stop threshold, at which point
//! velocity is zeroed. The winner is derived purely from the final angle:
//! whichever segment sits under the fixed pointer wins. No target index is
//! involved, so this strategy cannot honor scripted outcomes — landing on a
//! chosen segment would require solving the initial velocity for a target
//! angle, which this driver deliberately does not attempt.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

use rand::Rng;

/// Velocity retained per frame.
pub const DEFAULT_FRICTION: f64 = 0.985;
/// Velocity below which the wheel is considered at rest (radians/frame).
pub const DEFAULT_MIN_VELOCITY: f64 = 0.002;
/// Frame cadence requested from the driving loop.
pub const FRAME_DELAY: Duration = Duration::from_millis(16);
/// Where the winning pointer sits: straight up, in the same screen-space
/// convention as segment 0 starting at angle 0.
pub const POINTER_ANGLE: f64 = 3.0 * FRAC_PI_2;

const LAUNCH_VELOCITY_MIN: f64 = 0.25;
const LAUNCH_VELOCITY_MAX: f64 = 0.45;

/// The segment index under the pointer for a wheel rotated by `angle`
/// radians, over `entry_count` equal segments.
#[must_use]
pub fn index_at_angle(angle: f64, entry_count: usize) -> usize {
    debug_assert!(entry_count > 0);
    let width = TAU / entry_count as f64;
    let local = (POINTER_ANGLE - angle).rem_euclid(TAU);
    // Float division can land exactly on the upper edge; clamp into range.
    ((local / width) as usize).min(entry_count - 1)
}

/// A single wheel-spin run.
#[derive(Debug, Clone)]
pub struct RotationDecay {
    angle: f64,
    velocity: f64,
    friction: f64,
    min_velocity: f64,
    entry_count: usize,
}

impl RotationDecay {
    /// Start a run with an explicit initial velocity (radians/frame) over a
    /// snapshot of `entry_count` entries.
    #[must_use]
    pub fn new(entry_count: usize, initial_velocity: f64) -> Self {
        debug_assert!(entry_count > 0);
        Self {
            angle: 0.0,
            velocity: initial_velocity.max(0.0),
            friction: DEFAULT_FRICTION,
            min_velocity: DEFAULT_MIN_VELOCITY,
            entry_count,
        }
    }

    /// Start a run with a random launch velocity, the normal trigger path.
    #[must_use]
    pub fn launch<R: Rng>(entry_count: usize, rng: &mut R) -> Self {
        Self::new(
            entry_count,
            rng.random_range(LAUNCH_VELOCITY_MIN..LAUNCH_VELOCITY_MAX),
        )
    }

    /// Override the per-frame friction factor, clamped into `(0, 1)`.
    #[must_use]
    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = friction.clamp(f64::EPSILON, 1.0 - f64::EPSILON);
        self
    }

    /// Override the rest threshold. Must be positive for the run to
    /// terminate; non-positive values are raised to the default.
    #[must_use]
    pub fn with_min_velocity(mut self, min_velocity: f64) -> Self {
        self.min_velocity = if min_velocity > 0.0 {
            min_velocity
        } else {
            DEFAULT_MIN_VELOCITY
        };
        self
    }

    /// Current rotation in radians (unbounded; callers render modulo a turn).
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Current angular velocity in radians per frame.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.velocity == 0.0
    }

    /// The winner, available once the wheel rests: the segment under the
    /// pointer at the final angle.
    #[must_use]
    pub fn winner_index(&self) -> Option<usize> {
        (self.entry_count > 0 && self.is_complete())
            .then(|| index_at_angle(self.angle, self.entry_count))
    }

    /// Advance one frame. Returns the frame delay for the driving loop, or
    /// `None` once the wheel has come to rest. Ticking a resting wheel is a
    /// no-op.
    pub fn tick(&mut self) -> Option<Duration> {
        if self.is_complete() {
            return None;
        }
        self.angle += self.velocity;
        self.velocity *= self.friction;
        if self.velocity < self.min_velocity {
            self.velocity = 0.0;
            return None;
        }
        Some(FRAME_DELAY)
    }
}
