#![forbid(unsafe_code)]

//! The scripted-outcome table.
//!
//! Maps a 1-based spin sequence number to an ordered list of preferred
//! winners, highest priority first. Spins without a slot fall through to the
//! unbiased draw. The persisted form is a JSON object with `spin{N}Names`
//! keys for arbitrary `N >= 1`; loading is tolerant of junk per key but
//! all-or-nothing for the document as a whole.

use std::collections::{BTreeMap, HashSet};
use std::ops::Bound;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::ScheduleError;

/// Parse a persisted slot key of the form `spin{N}Names`.
fn parse_slot_key(key: &str) -> Option<u32> {
    let digits = key.strip_prefix("spin")?.strip_suffix("Names")?;
    digits.parse::<u32>().ok().filter(|&n| n >= 1)
}

/// Scripted preferred winners keyed by spin sequence number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpinSchedule {
    slots: BTreeMap<u32, Vec<String>>,
}

impl SpinSchedule {
    /// An empty schedule: every spin is unbiased.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred winners for `spin` (1-based). Names are trimmed and
    /// blanks dropped; an empty result clears the slot. Spin 0 has no slot
    /// and is ignored.
    pub fn set<I, S>(&mut self, spin: u32, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if spin == 0 {
            return;
        }
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            self.slots.remove(&spin);
        } else {
            self.slots.insert(spin, names);
        }
    }

    /// The ordered preferred winners for `spin`, or an empty slice when the
    /// spin is unscripted.
    #[must_use]
    pub fn candidates(&self, spin: u32) -> &[String] {
        self.slots.get(&spin).map_or(&[], Vec::as_slice)
    }

    /// All names reserved for spins strictly after `spin`. These are held
    /// back from earlier unbiased draws so later scripts stay satisfiable.
    #[must_use]
    pub fn reserved_after(&self, spin: u32) -> HashSet<&str> {
        self.slots
            .range((Bound::Excluded(spin), Bound::Unbounded))
            .flat_map(|(_, names)| names.iter().map(String::as_str))
            .collect()
    }

    /// Spin numbers that have a slot, ascending.
    pub fn spins(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.keys().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Build a schedule from a parsed JSON document.
    ///
    /// The document must be an object. Within it, keys that are not of the
    /// `spin{N}Names` form are skipped, non-array values for a recognised key
    /// are ignored, and non-string array elements are dropped. None of those
    /// are errors; the persisted table may carry unrelated keys.
    pub fn from_value(value: &Value) -> Result<Self, ScheduleError> {
        let object = value.as_object().ok_or(ScheduleError::NotAnObject)?;
        let mut schedule = Self::new();
        for (key, slot) in object {
            let Some(spin) = parse_slot_key(key) else {
                continue;
            };
            let Some(names) = slot.as_array() else {
                continue;
            };
            schedule.set(spin, names.iter().filter_map(Value::as_str));
        }
        Ok(schedule)
    }

    /// Parse a schedule from its persisted JSON text. On any error the caller
    /// keeps its current schedule; nothing is partially applied.
    pub fn from_json_str(text: &str) -> Result<Self, ScheduleError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}

impl Serialize for SpinSchedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (spin, names) in &self.slots {
            map.serialize_entry(&format!("spin{spin}Names"), names)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpinSchedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}
