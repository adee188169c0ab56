use chrono::{DateTime, Duration, Utc};
use url::Url;

use book_core::Clock;
use book_core::model::PagePath;

use crate::navbar::user_action_href;

/// Default idle window before a reader is routed back through login.
const DEFAULT_TIMEOUT_MINUTES: i64 = 15;

/// Idle-session redirect policy.
///
/// The idle timer itself lives in the embedding layer; when it fires, the
/// embedder asks this policy where to send the reader. Routing through the
/// login page makes sure readers on shared or sleeping machines are
/// properly authenticated before they resume saving work.
#[derive(Debug, Clone, PartialEq)]
pub struct IdleRedirect {
    app_url: Url,
    timeout: Duration,
}

impl IdleRedirect {
    #[must_use]
    pub fn new(app_url: Url) -> Self {
        Self {
            app_url,
            timeout: Duration::minutes(DEFAULT_TIMEOUT_MINUTES),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// How long the page may sit idle before the redirect applies.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Moment the idle window closes, counted from the clock's now.
    ///
    /// Embedders reset their timer to this on each reader interaction.
    #[must_use]
    pub fn deadline_after(&self, clock: &Clock) -> DateTime<Utc> {
        clock.now() + self.timeout
    }

    /// Redirect target once the idle window elapses.
    ///
    /// Index pages stay put: the reader is already at the point a login
    /// round-trip would land them. Everyone else goes to the login page
    /// with `_next` set so they come straight back after authenticating.
    #[must_use]
    pub fn redirect_for(&self, page: &PagePath, query: &str) -> Option<String> {
        if page.as_str().contains("index.html") {
            return None;
        }
        Some(format!(
            "{}?_next={}{}",
            user_action_href(&self.app_url, "login"),
            page.as_str(),
            query
        ))
    }
}
