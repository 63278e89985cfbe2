#![forbid(unsafe_code)]

//! Core engine for the namewheel picker.
//!
//! Everything here is a pure state machine driven by injected time deltas: an
//! ordered [`entry::EntryList`], a scripted-outcome [`schedule::SpinSchedule`],
//! the two-phase [`scheduler`] that decides which entry wins a spin, and the
//! two [`reveal`] drivers that animate toward that outcome. The
//! [`session::PickerSession`] ties them together behind a single-run guard.
//!
//! Rendering, text editing, persistence, and the winner dialog are external
//! collaborators. The engine only exposes the values they consume: per-tick
//! highlight index or wheel angle, entry colors, the entry count, and a
//! one-shot revealed event.

pub mod entry;
pub mod error;
pub mod palette;
pub mod reveal;
pub mod schedule;
pub mod scheduler;
pub mod session;

pub use entry::EntryList;
pub use error::{PickError, ScheduleError};
pub use palette::{Color, Palette};
pub use reveal::{HighlightCycler, RevealDriver, RevealStrategy, RotationDecay};
pub use schedule::SpinSchedule;
pub use session::{PickerSession, SessionEvent};
