#![forbid(unsafe_code)]

//! Outcome scheduling: decide which entry wins a given spin.
//!
//! Selection is two-phase. A spin with a scripted slot returns the first
//! scripted name still present in the entries. Otherwise the draw is uniform
//! over the entries minus every name reserved for a *later* scripted spin, so
//! an early unbiased spin cannot steal a name a later script needs. If that
//! exclusion empties the pool, the draw falls back to the full entry list and
//! a reserved name may win early.

use rand::Rng;

use crate::entry::EntryList;
use crate::error::PickError;
use crate::schedule::SpinSchedule;

/// Pick the winning index for spin `spin_count` (1-based).
///
/// The returned index is always within `0..entries.len()`; an empty entry
/// list is rejected before any index arithmetic. Duplicate names resolve to
/// the first matching index.
pub fn pick<R: Rng>(
    spin_count: u32,
    entries: &EntryList,
    schedule: &SpinSchedule,
    rng: &mut R,
) -> Result<usize, PickError> {
    if entries.is_empty() {
        return Err(PickError::NoEntries);
    }

    // Scripted winner: first slot candidate still on the list. Later
    // candidates are the fallback for names removed before their spin.
    for name in schedule.candidates(spin_count) {
        if let Some(index) = entries.position(name) {
            return Ok(index);
        }
    }

    // Unbiased draw, holding back names reserved for later spins.
    let reserved = schedule.reserved_after(spin_count);
    let pool: Vec<usize> = (0..entries.len())
        .filter(|&i| {
            entries
                .get(i)
                .is_some_and(|name| !reserved.contains(name))
        })
        .collect();

    let index = if pool.is_empty() {
        // Every remaining entry is reserved; picking from all of them beats
        // picking nothing.
        rng.random_range(0..entries.len())
    } else {
        pool[rng.random_range(0..pool.len())]
    };

    // Normalize duplicates to the first occurrence of the drawn name.
    let winner = entries
        .get(index)
        .and_then(|name| entries.position(name))
        .unwrap_or(index);
    Ok(winner)
}
