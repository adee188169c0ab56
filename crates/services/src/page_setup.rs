use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use book_core::model::{PageConfig, PageConfigDraft};

use crate::error::SetupError;
use crate::idle::IdleRedirect;
use crate::navbar::NavbarView;
use crate::progress_tracker::{ProgressHandle, ProgressTracker};
use crate::reading_list::continue_reading;
use crate::surface::{
    ActivityScanner, CompletionControl, ContentSurface, NavbarSurface, ProgressIndicator,
    SessionBackend,
};

/// Everything the embedding page runtime provides to the decoration pass.
#[derive(Clone)]
pub struct PageSurfaces {
    pub scanner: Arc<dyn ActivityScanner>,
    pub indicator: Arc<dyn ProgressIndicator>,
    pub completion: Arc<dyn CompletionControl>,
    pub navbar: Arc<dyn NavbarSurface>,
    pub content: Arc<dyn ContentSurface>,
    pub backend: Arc<dyn SessionBackend>,
}

impl fmt::Debug for PageSurfaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageSurfaces").finish_non_exhaustive()
    }
}

/// What a completed decoration pass hands back to the embedder.
#[derive(Debug)]
pub struct PageDecoration {
    progress: ProgressHandle,
    idle: Option<IdleRedirect>,
}

impl PageDecoration {
    /// Handle to pass to each widget at its construction time.
    #[must_use]
    pub fn progress(&self) -> ProgressHandle {
        self.progress.clone()
    }

    /// Idle policy to arm, when this page warrants one.
    #[must_use]
    pub fn idle(&self) -> Option<&IdleRedirect> {
        self.idle.as_ref()
    }
}

/// One page-load decoration pass.
///
/// Runs once the server has resolved the login state and the page skeleton
/// exists: reports the reader's timezone, applies the navbar transition,
/// injects continue-reading navigation, decides the idle policy, builds the
/// shared progress tracker, and finally signals deferred components to load.
pub struct PageSetup {
    config: PageConfig,
    surfaces: PageSurfaces,
    timezone_offset_hours: Option<i32>,
}

impl PageSetup {
    /// Validate a raw configuration and prepare a decoration pass.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::Config` when the configuration does not
    /// validate.
    pub fn new(draft: PageConfigDraft, surfaces: PageSurfaces) -> Result<Self, SetupError> {
        Ok(Self::from_config(draft.validate()?, surfaces))
    }

    /// Prepare a decoration pass from an already-validated configuration.
    #[must_use]
    pub fn from_config(config: PageConfig, surfaces: PageSurfaces) -> Self {
        Self {
            config,
            surfaces,
            timezone_offset_hours: None,
        }
    }

    /// Supply the reader's UTC offset (whole hours, west-positive) for the
    /// backend report.
    #[must_use]
    pub fn with_timezone_offset(mut self, hours: i32) -> Self {
        self.timezone_offset_hours = Some(hours);
        self
    }

    /// Run the decoration pass.
    #[must_use]
    pub fn run(&self) -> PageDecoration {
        let session = self.config.session();
        info!(
            path = self.config.path().as_str(),
            logged_in = session.is_logged_in(),
            "decorating page"
        );

        if self.config.use_services() {
            if let Some(hours) = self.timezone_offset_hours {
                self.surfaces.backend.report_timezone_offset(hours);
            }
        }

        self.surfaces
            .content
            .set_status_message(&session.status_message());
        if let Some(view) = NavbarView::for_session(&self.config) {
            self.surfaces.navbar.apply(&view);
        }

        let mut idle = None;
        if session.is_logged_in() {
            if let Some(assignment) = self.config.assignment() {
                let notice = continue_reading(assignment, self.config.path());
                debug!(?notice, "appending reading-list notice");
                self.surfaces.content.append_notice(&notice);
            }
            if self.config.path().is_grading() {
                debug!("grading page, idle redirect not armed");
            } else {
                idle = self.config.app_url().cloned().map(IdleRedirect::new);
            }
        }

        let tracker = ProgressTracker::new(
            &self.config,
            self.surfaces.scanner.as_ref(),
            Arc::clone(&self.surfaces.indicator),
            Arc::clone(&self.surfaces.completion),
        );
        let progress = ProgressHandle::new(tracker);

        self.surfaces.content.notify_components_ready();

        PageDecoration { progress, idle }
    }
}
