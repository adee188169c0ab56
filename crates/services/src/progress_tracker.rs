use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use book_core::model::{ActivityId, ActivityLedger, PageConfig, PageProgress, RecordOutcome};

use crate::surface::{ActivityScanner, CompletionControl, ProgressIndicator};

/// Label the page-level completion control carries while the page has not
/// been marked complete yet. Compared case-insensitively.
const MARK_AS_COMPLETED: &str = "mark as completed";

/// Tracks a reader's progress through the activities on one page and keeps
/// the progress indicator in sync.
///
/// Created exactly once per page load, after the login state is resolved.
/// Widgets report interactions through [`ProgressHandle::record_activity`];
/// the tracker re-renders on each first completion and triggers the page's
/// completion control when the ratio reaches exactly 100.
pub struct ProgressTracker {
    ledger: ActivityLedger,
    indicator: Arc<dyn ProgressIndicator>,
    completion: Arc<dyn CompletionControl>,
    logged_in: bool,
}

impl ProgressTracker {
    /// Build the tracker for the current page and render the initial state.
    ///
    /// A non-empty reported activity map in the configuration is used
    /// verbatim; otherwise the scanner discovers the page's activities. The
    /// indicator is hidden on navigation pages either way.
    #[must_use]
    pub fn new(
        config: &PageConfig,
        scanner: &dyn ActivityScanner,
        indicator: Arc<dyn ProgressIndicator>,
        completion: Arc<dyn CompletionControl>,
    ) -> Self {
        let ledger = match config.activities() {
            Some(reported) => ActivityLedger::from_reported(reported.clone()),
            None => ActivityLedger::from_discovered(scanner.scan()),
        };
        debug!(
            possible = ledger.possible(),
            completed = ledger.completed(),
            "progress ledger built"
        );

        let tracker = Self {
            ledger,
            indicator,
            completion,
            logged_in: config.session().is_logged_in(),
        };
        if config.path().is_navigation() {
            tracker.indicator.hide();
        }
        tracker.render();
        tracker
    }

    /// Publish the current counts and fill percentage to the indicator.
    pub fn render(&self) {
        let progress = self.ledger.progress();
        self.indicator
            .set_counts(progress.completed, progress.possible);
        self.indicator.set_fill(progress.percent());
        if !self.logged_in {
            self.indicator.mark_logged_out();
        }
    }

    /// Record one reader interaction with the given activity.
    ///
    /// Only the first interaction with an activity updates the indicator;
    /// repeats grow the activity's own count and nothing else. Unknown
    /// identifiers are ignored.
    pub fn record_activity(&mut self, id: &ActivityId) {
        match self.ledger.record(id) {
            RecordOutcome::Unknown => {
                debug!(activity = %id, "ignoring interaction with unknown activity");
            }
            RecordOutcome::Repeat => {}
            RecordOutcome::FirstCompletion => {
                let progress = self.ledger.progress();
                debug!(
                    activity = %id,
                    completed = progress.completed,
                    possible = progress.possible,
                    "first interaction recorded"
                );
                self.indicator
                    .set_counts(progress.completed, progress.possible);
                self.indicator.set_fill(progress.percent());
                if progress.at_capacity() && self.completion_is_pending() {
                    debug!("page fully completed, triggering completion control");
                    self.completion.complete();
                }
            }
        }
    }

    /// Returns a snapshot of the current page progress.
    #[must_use]
    pub fn progress(&self) -> PageProgress {
        self.ledger.progress()
    }

    fn completion_is_pending(&self) -> bool {
        self.completion
            .label()
            .eq_ignore_ascii_case(MARK_AS_COMPLETED)
    }
}

impl fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("ledger", &self.ledger)
            .field("logged_in", &self.logged_in)
            .finish_non_exhaustive()
    }
}

/// Cheap-to-clone handle to the page's shared tracker.
///
/// Each widget receives one at its own construction time and this is its
/// whole view of the tracker. Interactions are serialized; the lock is an
/// ownership-sharing device, not a concurrency claim.
#[derive(Clone)]
pub struct ProgressHandle {
    inner: Arc<Mutex<ProgressTracker>>,
}

impl ProgressHandle {
    #[must_use]
    pub fn new(tracker: ProgressTracker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Record one reader interaction with the given activity.
    pub fn record_activity(&self, id: &ActivityId) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record_activity(id);
    }

    /// Returns a snapshot of the current page progress.
    #[must_use]
    pub fn progress(&self) -> PageProgress {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .progress()
    }
}

impl fmt::Debug for ProgressHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressHandle").finish_non_exhaustive()
    }
}
