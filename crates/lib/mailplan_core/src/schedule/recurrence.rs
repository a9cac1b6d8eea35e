//! One-time/pattern field synchronization.

use serde::{Deserialize, Serialize};

use crate::models::job::RecurrencePattern;

/// The synchronized (pattern, one-time) field pair of a job form.
///
/// Reachable states are exactly `(OneTime, true)` and `(p, false)` for the
/// four repeating patterns; [`apply`] maintains that invariant on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceState {
    pub pattern: RecurrencePattern,
    pub one_time: bool,
}

impl RecurrenceState {
    /// Initial state for a new job.
    pub const INITIAL: RecurrenceState = RecurrenceState {
        pattern: RecurrencePattern::Daily,
        one_time: false,
    };
}

impl Default for RecurrenceState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// A user edit to one of the two synchronized fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceChange {
    /// The one-time checkbox was toggled.
    OneTimeToggled(bool),
    /// A pattern was picked from the dropdown.
    PatternSelected(RecurrencePattern),
}

/// Apply a field edit, overwriting the sibling field so the pair stays
/// consistent. Idempotent: re-applying an edit to its own result changes
/// nothing.
pub fn apply(state: RecurrenceState, change: RecurrenceChange) -> RecurrenceState {
    match change {
        RecurrenceChange::OneTimeToggled(true) => RecurrenceState {
            pattern: RecurrencePattern::OneTime,
            one_time: true,
        },
        // Unchecking falls back to the default repeating pattern; leaving
        // the pattern at OneTime would desynchronize the pair.
        RecurrenceChange::OneTimeToggled(false) => RecurrenceState {
            pattern: if state.pattern == RecurrencePattern::OneTime {
                RecurrencePattern::Daily
            } else {
                state.pattern
            },
            one_time: false,
        },
        RecurrenceChange::PatternSelected(pattern) => RecurrenceState {
            pattern,
            one_time: pattern == RecurrencePattern::OneTime,
        },
    }
}
