#![forbid(unsafe_code)]

//! Error types for the picker engine.

use thiserror::Error;

/// Why a pick could not start or resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    /// The entry list is empty; there is nothing to select.
    #[error("cannot pick from an empty entry list")]
    NoEntries,
    /// A reveal is already running. The trigger is dropped, never queued.
    #[error("a reveal is already in progress")]
    RevealInProgress,
}

/// Why a persisted spin schedule could not be loaded.
///
/// A failed load leaves the in-memory schedule untouched; there is no
/// partial apply.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The document parsed but is not a JSON object.
    #[error("spin schedule must be a JSON object")]
    NotAnObject,
    /// The document is not valid JSON at all.
    #[error("malformed spin schedule: {0}")]
    Json(#[from] serde_json::Error),
}
