use std::collections::BTreeMap;

use super::ids::ActivityId;
use super::progress::PageProgress;

/// What a single recorded interaction did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The activity went from untouched to completed; page progress moved.
    FirstCompletion,
    /// The activity was already completed; only its own count grew.
    Repeat,
    /// The identifier is not part of this page. Tolerated no-op.
    Unknown,
}

/// Per-page tally of activity completions.
///
/// The identifier set is fixed at construction: `possible` never changes
/// afterwards, and recording an identifier outside the set is a no-op.
/// `completed` starts at 1 because the page view itself counts, so the
/// completion ratio can legitimately exceed 100%.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityLedger {
    activities: BTreeMap<ActivityId, u32>,
    possible: usize,
    completed: usize,
}

impl ActivityLedger {
    /// Build a ledger from counts reported by the platform, used verbatim.
    ///
    /// Counts greater than zero are credited as already completed.
    #[must_use]
    pub fn from_reported(activities: BTreeMap<ActivityId, u32>) -> Self {
        let possible = activities.len();
        let completed = 1 + activities.values().filter(|count| **count > 0).count();
        Self {
            activities,
            possible,
            completed,
        }
    }

    /// Build a ledger from identifiers discovered on the page.
    ///
    /// Adds the reserved page-view identifier alongside every discovered id,
    /// all starting untouched. Duplicate discoveries collapse to one entry.
    #[must_use]
    pub fn from_discovered(ids: impl IntoIterator<Item = ActivityId>) -> Self {
        let mut activities = BTreeMap::new();
        activities.insert(ActivityId::page_view(), 0);
        for id in ids {
            activities.entry(id).or_insert(0);
        }
        Self::from_reported(activities)
    }

    /// Record one reader interaction with the given activity.
    ///
    /// Only the first interaction with an activity moves `completed`;
    /// later interactions grow the activity's own count and nothing else.
    /// Unknown identifiers never fault.
    pub fn record(&mut self, id: &ActivityId) -> RecordOutcome {
        let Some(count) = self.activities.get_mut(id) else {
            return RecordOutcome::Unknown;
        };
        *count = count.saturating_add(1);
        if *count == 1 {
            self.completed += 1;
            RecordOutcome::FirstCompletion
        } else {
            RecordOutcome::Repeat
        }
    }

    /// Total number of known activity identifiers, fixed at construction.
    #[must_use]
    pub fn possible(&self) -> usize {
        self.possible
    }

    /// Number of completions credited so far, including the page view.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Interaction count for one identifier, `None` when unknown.
    #[must_use]
    pub fn count(&self, id: &ActivityId) -> Option<u32> {
        self.activities.get(id).copied()
    }

    /// Returns a snapshot of the current page progress.
    #[must_use]
    pub fn progress(&self) -> PageProgress {
        PageProgress {
            completed: self.completed,
            possible: self.possible,
        }
    }
}
