#![forbid(unsafe_code)]

//! Session glue: one entry list, one spin counter, one reveal at a time.
//!
//! The session owns the single source of truth for order and membership and
//! threads it through the scheduler and the active driver. A trigger during a
//! running reveal is rejected, never queued. Entry edits during a reveal are
//! applied immediately, but the running animation keeps the snapshot it was
//! started with; only the next trigger sees the new list.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::entry::EntryList;
use crate::error::{PickError, ScheduleError};
use crate::palette::{Color, Palette};
use crate::reveal::{HighlightCycler, RevealDriver, RevealStrategy, RotationDecay};
use crate::schedule::SpinSchedule;
use crate::scheduler;

/// Event emitted to the winner-dialog collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A reveal reached its terminal state. Emitted exactly once per run.
    Revealed { winner: String },
}

/// The picker engine behind one wheel.
#[derive(Debug, Clone)]
pub struct PickerSession {
    entries: EntryList,
    colors: Vec<Color>,
    palette: Palette,
    schedule: SpinSchedule,
    strategy: RevealStrategy,
    spin_count: u32,
    driver: Option<RevealDriver>,
    revealed: bool,
    last_winner: Option<String>,
    results_count: u32,
    next_delay: Option<Duration>,
    rng: SmallRng,
}

impl PickerSession {
    /// A session with OS-seeded randomness.
    #[must_use]
    pub fn new(strategy: RevealStrategy) -> Self {
        Self::with_rng(strategy, SmallRng::from_os_rng())
    }

    /// A fully deterministic session, for tests and replays.
    #[must_use]
    pub fn with_seed(strategy: RevealStrategy, seed: u64) -> Self {
        Self::with_rng(strategy, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(strategy: RevealStrategy, rng: SmallRng) -> Self {
        Self {
            entries: EntryList::new(),
            colors: Vec::new(),
            palette: Palette::default(),
            schedule: SpinSchedule::new(),
            strategy,
            spin_count: 0,
            driver: None,
            revealed: false,
            last_winner: None,
            results_count: 0,
            next_delay: None,
            rng,
        }
    }

    /// Replace the scripted-outcome schedule wholesale.
    pub fn set_schedule(&mut self, schedule: SpinSchedule) {
        self.schedule = schedule;
    }

    /// Load the schedule from persisted JSON. On error the current schedule
    /// is left untouched.
    pub fn load_schedule_json(&mut self, text: &str) -> Result<(), ScheduleError> {
        self.schedule = SpinSchedule::from_json_str(text)?;
        Ok(())
    }

    /// Replace the entry list wholesale (the editor collaborator's path).
    ///
    /// Resets the spin counter and recomputes colors, but only when the
    /// normalized names actually differ from the current list; an echo of
    /// the same content is a no-op. Returns whether anything changed. A
    /// running reveal keeps its snapshot either way.
    pub fn replace_entries<I, S>(&mut self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let incoming = EntryList::from_names(names);
        if incoming == self.entries {
            return false;
        }
        self.entries = incoming;
        self.spin_count = 0;
        self.recolor();
        true
    }

    /// Append one entry. No spin-count reset.
    pub fn add_entry(&mut self, name: &str) -> bool {
        let added = self.entries.add(name);
        if added {
            self.recolor();
        }
        added
    }

    /// Remove the entry at `index`. No spin-count reset.
    pub fn remove_entry_at(&mut self, index: usize) -> Option<String> {
        let removed = self.entries.remove_at(index);
        if removed.is_some() {
            self.recolor();
        }
        removed
    }

    /// Shuffle the entries (uniform permutation).
    pub fn shuffle(&mut self) {
        self.entries.shuffle(&mut self.rng);
        self.recolor();
    }

    /// Sort the entries lexicographically ascending.
    pub fn sort(&mut self) {
        self.entries.sort();
        self.recolor();
    }

    /// Trigger a reveal.
    ///
    /// Rejected while a reveal is running and when the list is empty; both
    /// are guarded no-ops for the caller to surface or drop. On success the
    /// spin counter advances and a driver for the configured strategy is
    /// armed; under [`RevealStrategy::Highlight`] the outcome is fixed here
    /// by the scheduler, under [`RevealStrategy::Wheel`] it is left to the
    /// physics.
    pub fn start_pick(&mut self) -> Result<(), PickError> {
        if self.is_animating() {
            return Err(PickError::RevealInProgress);
        }
        if self.entries.is_empty() {
            return Err(PickError::NoEntries);
        }
        self.spin_count += 1;
        let driver = match self.strategy {
            RevealStrategy::Highlight => {
                let target =
                    scheduler::pick(self.spin_count, &self.entries, &self.schedule, &mut self.rng)?;
                let rng = SmallRng::from_rng(&mut self.rng);
                RevealDriver::Highlight(HighlightCycler::new(target, self.entries.len(), rng))
            }
            RevealStrategy::Wheel => {
                RevealDriver::Wheel(RotationDecay::launch(self.entries.len(), &mut self.rng))
            }
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(spin = self.spin_count, strategy = ?self.strategy, "reveal started");
        self.driver = Some(driver);
        self.revealed = false;
        self.last_winner = None;
        self.next_delay = Some(Duration::ZERO);
        Ok(())
    }

    /// Advance the active reveal by `delta` of virtual time.
    ///
    /// Returns the revealed event exactly once, when the run reaches its
    /// terminal state. Ticking while idle or after the reveal is a no-op.
    /// If an entry edit shrank the list past the snapshot target, the run
    /// still completes but no event is emitted (stale outcome).
    pub fn tick(&mut self, delta: Duration) -> Option<SessionEvent> {
        let driver = self.driver.as_mut()?;
        if driver.is_complete() {
            self.next_delay = None;
            return None;
        }
        self.next_delay = driver.tick(delta);
        if !driver.is_complete() || self.revealed {
            return None;
        }
        self.revealed = true;
        let winner = driver
            .winner_index()
            .and_then(|index| self.entries.get(index))
            .map(str::to_owned)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(winner = %winner, spin = self.spin_count, "reveal complete");
        self.last_winner = Some(winner.clone());
        Some(SessionEvent::Revealed { winner })
    }

    /// The delay the active driver asked to be rescheduled after, for the
    /// driving loop. `None` while idle or once the run is complete.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        self.next_delay
    }

    /// Whether a reveal is currently running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.as_ref().is_some_and(|d| !d.is_complete())
    }

    /// The dialog collaborator's "remove" action: drop the first entry
    /// matching the revealed name and count a result. A stale name (already
    /// edited away) is a no-op. Clears the resting reveal frame.
    pub fn remove_winner(&mut self, name: &str) -> bool {
        match self.entries.remove_first(name) {
            Some(_) => {
                self.recolor();
                self.results_count += 1;
                self.driver = None;
                true
            }
            None => false,
        }
    }

    /// Highlight index for the rendering collaborator. Stays on the winner
    /// after a highlight run completes; `None` while idle or spinning the
    /// wheel.
    #[must_use]
    pub fn current_highlight(&self) -> Option<usize> {
        self.driver.as_ref().and_then(RevealDriver::highlight)
    }

    /// Wheel angle for the rendering collaborator. `None` while idle or
    /// under the highlight strategy.
    #[must_use]
    pub fn current_angle(&self) -> Option<f64> {
        self.driver.as_ref().and_then(RevealDriver::angle)
    }

    #[must_use]
    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    /// One color per entry, recomputed after every structural change.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn schedule(&self) -> &SpinSchedule {
        &self.schedule
    }

    #[must_use]
    pub fn strategy(&self) -> RevealStrategy {
        self.strategy
    }

    /// Reveals since the last wholesale entry replacement.
    #[must_use]
    pub fn spin_count(&self) -> u32 {
        self.spin_count
    }

    /// The entry-count badge value for the editor collaborator.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Winners removed via [`Self::remove_winner`], the external results
    /// counter.
    #[must_use]
    pub fn results_count(&self) -> u32 {
        self.results_count
    }

    /// The name revealed by the most recent completed run, if any.
    #[must_use]
    pub fn last_winner(&self) -> Option<&str> {
        self.last_winner.as_deref()
    }

    fn recolor(&mut self) {
        self.colors = self.palette.assign(self.entries.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlight_session(names: &[&str]) -> PickerSession {
        let mut session = PickerSession::with_seed(RevealStrategy::Highlight, 1234);
        session.replace_entries(names.iter().copied());
        session
    }

    /// Drive the session until the reveal emits, with a tick cap.
    fn run_to_reveal(session: &mut PickerSession) -> Option<SessionEvent> {
        for _ in 0..100_000 {
            if let Some(event) = session.tick(Duration::from_millis(40)) {
                return Some(event);
            }
            if !session.is_animating() {
                return None;
            }
        }
        panic!("reveal never completed");
    }

    #[test]
    fn empty_list_cannot_start() {
        let mut session = PickerSession::with_seed(RevealStrategy::Highlight, 1);
        assert_eq!(session.start_pick(), Err(PickError::NoEntries));
        assert_eq!(session.spin_count(), 0);
    }

    #[test]
    fn double_trigger_is_rejected_not_queued() {
        let mut session = highlight_session(&["Ann", "Bob"]);
        session.start_pick().unwrap();
        assert_eq!(session.start_pick(), Err(PickError::RevealInProgress));
        assert_eq!(session.spin_count(), 1);
    }

    #[test]
    fn reveal_emits_exactly_once() {
        let mut session = highlight_session(&["Ann", "Bob", "Cid"]);
        session.start_pick().unwrap();
        let event = run_to_reveal(&mut session).unwrap();
        let SessionEvent::Revealed { winner } = event;
        assert!(session.entries().contains(&winner));
        // Further ticks stay silent.
        for _ in 0..10 {
            assert!(session.tick(Duration::from_millis(40)).is_none());
        }
        assert_eq!(session.last_winner(), Some(winner.as_str()));
    }

    #[test]
    fn scripted_spin_wins_through_the_session() {
        let mut session = highlight_session(&["Ann", "Bob", "Cid"]);
        let mut schedule = SpinSchedule::new();
        schedule.set(1, ["Bob"]);
        session.set_schedule(schedule);
        session.start_pick().unwrap();
        let SessionEvent::Revealed { winner } = run_to_reveal(&mut session).unwrap();
        assert_eq!(winner, "Bob");
        assert_eq!(session.current_highlight(), Some(1));
    }

    #[test]
    fn highlight_rests_on_winner_after_reveal() {
        let mut session = highlight_session(&["Ann", "Bob"]);
        session.start_pick().unwrap();
        let SessionEvent::Revealed { winner } = run_to_reveal(&mut session).unwrap();
        let resting = session.current_highlight().unwrap();
        assert_eq!(session.entries().get(resting), Some(winner.as_str()));
        assert!(!session.is_animating());
    }

    #[test]
    fn wheel_reveal_derives_winner_from_angle() {
        let mut session = PickerSession::with_seed(RevealStrategy::Wheel, 77);
        session.replace_entries(["Ann", "Bob", "Cid", "Dee"]);
        session.start_pick().unwrap();
        assert!(session.current_angle().is_some());
        assert!(session.current_highlight().is_none());
        let SessionEvent::Revealed { winner } = run_to_reveal(&mut session).unwrap();
        assert!(session.entries().contains(&winner));
    }

    #[test]
    fn replace_entries_resets_spin_count() {
        let mut session = highlight_session(&["Ann", "Bob"]);
        session.start_pick().unwrap();
        run_to_reveal(&mut session);
        assert_eq!(session.spin_count(), 1);
        session.replace_entries(["Dee", "Eli"]);
        assert_eq!(session.spin_count(), 0);
    }

    #[test]
    fn replacing_with_same_content_is_a_noop() {
        let mut session = highlight_session(&["Ann", "Bob"]);
        session.start_pick().unwrap();
        run_to_reveal(&mut session);
        // Editor echoes identical lines back; the counter must survive.
        assert!(!session.replace_entries([" Ann ", "Bob"]));
        assert_eq!(session.spin_count(), 1);
    }

    #[test]
    fn edit_during_reveal_keeps_running_snapshot() {
        let mut session = highlight_session(&["Ann", "Bob", "Cid"]);
        let mut schedule = SpinSchedule::new();
        schedule.set(1, ["Cid"]);
        session.set_schedule(schedule);
        session.start_pick().unwrap();
        session.tick(Duration::from_millis(40));
        // Mid-run wholesale edit: applied to the list, spin count reset, but
        // the running target index (2) is untouched.
        assert!(session.replace_entries(["Xul", "Yan", "Zed"]));
        assert_eq!(session.spin_count(), 0);
        let SessionEvent::Revealed { winner } = run_to_reveal(&mut session).unwrap();
        // Winner resolves against the *current* list at the fixed index.
        assert_eq!(winner, "Zed");
    }

    #[test]
    fn shrinking_edit_past_target_suppresses_event() {
        let mut session = highlight_session(&["Ann", "Bob", "Cid"]);
        let mut schedule = SpinSchedule::new();
        schedule.set(1, ["Cid"]);
        session.set_schedule(schedule);
        session.start_pick().unwrap();
        session.tick(Duration::from_millis(40));
        session.replace_entries(["Solo"]);
        assert!(run_to_reveal(&mut session).is_none());
        assert!(!session.is_animating());
    }

    #[test]
    fn remove_winner_removes_exactly_one_and_counts() {
        let mut session = highlight_session(&["Ann", "Bob", "Cid"]);
        session.start_pick().unwrap();
        let SessionEvent::Revealed { winner } = run_to_reveal(&mut session).unwrap();
        assert!(session.remove_winner(&winner));
        assert_eq!(session.entry_count(), 2);
        assert_eq!(session.results_count(), 1);
        assert!(!session.entries().contains(&winner));
        // Frame cleared; colors recomputed to the new length.
        assert_eq!(session.current_highlight(), None);
        assert_eq!(session.colors().len(), 2);
        // Removal does not reset the spin counter.
        assert_eq!(session.spin_count(), 1);
    }

    #[test]
    fn remove_winner_is_stale_safe() {
        let mut session = highlight_session(&["Ann", "Bob"]);
        assert!(!session.remove_winner("Zed"));
        assert_eq!(session.results_count(), 0);
        assert_eq!(session.entry_count(), 2);
    }

    #[test]
    fn colors_track_entry_count() {
        let mut session = highlight_session(&["Ann", "Bob", "Cid"]);
        assert_eq!(session.colors().len(), 3);
        session.add_entry("Dee");
        assert_eq!(session.colors().len(), 4);
        session.remove_entry_at(0);
        assert_eq!(session.colors().len(), 3);
        for pair in session.colors().windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn bad_schedule_json_leaves_schedule_untouched() {
        let mut session = highlight_session(&["Ann"]);
        session
            .load_schedule_json(r#"{"spin1Names": ["Ann"]}"#)
            .unwrap();
        assert!(session.load_schedule_json("{broken").is_err());
        assert_eq!(session.schedule().candidates(1), &["Ann"]);
    }

    #[test]
    fn next_delay_present_only_while_running() {
        let mut session = highlight_session(&["Ann", "Bob"]);
        assert_eq!(session.next_delay(), None);
        session.start_pick().unwrap();
        assert_eq!(session.next_delay(), Some(Duration::ZERO));
        session.tick(Duration::from_millis(40));
        assert!(session.next_delay().is_some());
        run_to_reveal(&mut session);
        assert_eq!(session.next_delay(), None);
    }
}
