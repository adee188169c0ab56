//! Collaborator seams provided by the embedding page runtime.
//!
//! The decoration services never touch a real page. Everything that reads
//! from or writes to the page goes through one of these traits, which keeps
//! the services synchronous, deterministic and testable with in-memory
//! fakes.

use book_core::model::ActivityId;

use crate::navbar::NavbarView;
use crate::reading_list::ReadingListNotice;

/// Discovers the activity container identifiers present on the current page.
///
/// Consulted only when the configuration carries no reported activity map;
/// callers must not invoke it otherwise.
pub trait ActivityScanner: Send + Sync {
    fn scan(&self) -> Vec<ActivityId>;
}

/// The page's progress indicator: a count display plus a percentage-driven
/// fill bar. Sink only, no return values.
pub trait ProgressIndicator: Send + Sync {
    fn set_counts(&self, completed: usize, possible: usize);
    /// Fill percentage. Not clamped by the caller; may exceed 100.
    fn set_fill(&self, percent: f64);
    /// Hide the indicator entirely (navigation pages).
    fn hide(&self);
    /// Style the indicator for an unauthenticated reader. Visual only.
    fn mark_logged_out(&self);
}

/// The page-level "mark complete" control.
pub trait CompletionControl: Send + Sync {
    /// Current label text of the control.
    fn label(&self) -> String;
    /// Invoke the control's completion action.
    fn complete(&self);
}

/// Applies a computed navbar view to the page chrome.
pub trait NavbarSurface: Send + Sync {
    fn apply(&self, view: &NavbarView);
}

/// Main-content hooks: status line, reading-list notice, and the signal
/// that deferred page components may finish loading.
pub trait ContentSurface: Send + Sync {
    fn set_status_message(&self, message: &str);
    fn append_notice(&self, notice: &ReadingListNotice);
    fn notify_components_ready(&self);
}

/// Fire-and-forget reports to the platform backend. The transport lives in
/// the embedding layer.
pub trait SessionBackend: Send + Sync {
    /// Report the reader's UTC offset in whole hours, west-positive.
    fn report_timezone_offset(&self, hours: i32);
}
