#![forbid(unsafe_code)]

//! The ordered list of candidate names.
//!
//! Order is semantically significant: it defines segment geometry on the wheel
//! and drives color cycling. Names are stored trimmed and non-empty; blank
//! input is dropped at the boundary. Duplicate names are allowed and always
//! resolve to the first matching index.

use rand::Rng;
use rand::seq::SliceRandom;

/// Ordered, mutable collection of candidate names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<String>,
}

impl EntryList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from an iterator of names, trimming each and dropping
    /// blanks.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        list.replace_all(names);
        list
    }

    /// Split pasted multi-line text into candidate names: one name per line,
    /// trimmed, blank lines dropped. This is the editor collaborator's input
    /// contract.
    #[must_use]
    pub fn parse_lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Replace the whole list. Trims each name and drops blanks.
    pub fn replace_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_owned())
            .filter(|name| !name.is_empty())
            .collect();
    }

    /// Append a name. Returns `false` (and adds nothing) if the name is blank
    /// after trimming.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.entries.push(name.to_owned());
        true
    }

    /// Remove and return the entry at `index`, if in range.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Remove the first entry equal to `name`. Returns the removed index, or
    /// `None` if the name is absent (a stale reference is a no-op).
    pub fn remove_first(&mut self, name: &str) -> Option<usize> {
        let index = self.position(name)?;
        self.entries.remove(index);
        Some(index)
    }

    /// Index of the first entry equal to `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == name)
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// The entry at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The names in order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Uniform random permutation (Fisher–Yates).
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.entries.shuffle(rng);
    }

    /// Lexicographic ascending sort.
    pub fn sort(&mut self) {
        self.entries.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn from_names_trims_and_drops_blanks() {
        let list = EntryList::from_names(["  Ann ", "", "Bob", "   "]);
        assert_eq!(list.names(), &["Ann", "Bob"]);
    }

    #[test]
    fn parse_lines_splits_and_filters() {
        let lines = EntryList::parse_lines("Ann\r\n\n  Bob  \n\nCid\n");
        assert_eq!(lines, vec!["Ann", "Bob", "Cid"]);
    }

    #[test]
    fn parse_lines_all_blank() {
        assert!(EntryList::parse_lines("\n  \n\r\n").is_empty());
    }

    #[test]
    fn add_rejects_blank() {
        let mut list = EntryList::new();
        assert!(!list.add("   "));
        assert!(list.add(" Cid "));
        assert_eq!(list.names(), &["Cid"]);
    }

    #[test]
    fn remove_at_out_of_range() {
        let mut list = EntryList::from_names(["Ann"]);
        assert_eq!(list.remove_at(5), None);
        assert_eq!(list.remove_at(0), Some("Ann".to_owned()));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_first_is_stale_safe() {
        let mut list = EntryList::from_names(["Ann", "Bob"]);
        assert_eq!(list.remove_first("Zed"), None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn duplicates_resolve_to_first_index() {
        let mut list = EntryList::from_names(["Ann", "Bob", "Ann"]);
        assert_eq!(list.position("Ann"), Some(0));
        assert_eq!(list.remove_first("Ann"), Some(0));
        assert_eq!(list.names(), &["Bob", "Ann"]);
    }

    #[test]
    fn sort_is_lexicographic() {
        let mut list = EntryList::from_names(["Cid", "Ann", "Bob"]);
        list.sort();
        assert_eq!(list.names(), &["Ann", "Bob", "Cid"]);
    }

    #[test]
    fn shuffle_keeps_membership() {
        let mut list = EntryList::from_names(["Ann", "Bob", "Cid", "Dee"]);
        let before = list.clone();
        let mut rng = SmallRng::seed_from_u64(7);
        list.shuffle(&mut rng);
        assert_eq!(list.len(), 4);
        for name in before.iter() {
            assert!(list.contains(name));
        }
    }

    #[test]
    fn shuffle_is_deterministic_for_seed() {
        let mut a = EntryList::from_names(["Ann", "Bob", "Cid", "Dee"]);
        let mut b = a.clone();
        let mut rng_a = SmallRng::seed_from_u64(42);
        let mut rng_b = SmallRng::seed_from_u64(42);
        a.shuffle(&mut rng_a);
        b.shuffle(&mut rng_b);
        assert_eq!(a, b);
    }
}
