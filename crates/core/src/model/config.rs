use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

use super::assignment::ReadingAssignment;
use super::ids::ActivityId;
use super::page::PagePath;
use super::session::ReaderSession;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid application base URL")]
    InvalidAppUrl,
    #[error("page path is missing")]
    MissingPath,
}

/// Raw page configuration as the platform embeds it in the page, before
/// validation. Field names follow the embedded JSON object's camelCase keys.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfigDraft {
    /// Activity identifier → completion count, when the server reports prior
    /// progress. Absent or empty means the page must be scanned instead.
    pub activities: Option<BTreeMap<String, u32>>,
    pub is_logged_in: bool,
    pub username: Option<String>,
    pub is_instructor: bool,
    /// Application base URL, e.g. `https://example.org/platform`.
    pub app: Option<String>,
    /// Page names making up the reader's current reading assignment.
    pub readings: Option<Vec<String>>,
    pub use_services: bool,
    pub path: Option<String>,
}

impl PageConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft into a typed page configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPath` when no page path is present and
    /// `ConfigError::InvalidAppUrl` when the base URL does not parse.
    pub fn validate(self) -> Result<PageConfig, ConfigError> {
        let path = normalize_optional(self.path).ok_or(ConfigError::MissingPath)?;

        let app_url = match normalize_optional(self.app) {
            Some(raw) => Some(Url::parse(&raw).map_err(|_| ConfigError::InvalidAppUrl)?),
            None => None,
        };

        // An empty reported map carries no information; normalize it away so
        // downstream code has a single "must scan the page" signal.
        let activities = self
            .activities
            .filter(|map| !map.is_empty())
            .map(|map| {
                map.into_iter()
                    .map(|(id, count)| (ActivityId::new(id), count))
                    .collect()
            });

        Ok(PageConfig {
            activities,
            session: ReaderSession::from_login(self.is_logged_in, self.username, self.is_instructor),
            app_url,
            assignment: self.readings.map(ReadingAssignment::new),
            use_services: self.use_services,
            path: PagePath::new(path),
        })
    }
}

/// Validated per-page configuration the decoration layer runs from.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    activities: Option<BTreeMap<ActivityId, u32>>,
    session: ReaderSession,
    app_url: Option<Url>,
    assignment: Option<ReadingAssignment>,
    use_services: bool,
    path: PagePath,
}

impl PageConfig {
    /// Server-reported activity counts, guaranteed non-empty when present.
    #[must_use]
    pub fn activities(&self) -> Option<&BTreeMap<ActivityId, u32>> {
        self.activities.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> &ReaderSession {
        &self.session
    }

    #[must_use]
    pub fn app_url(&self) -> Option<&Url> {
        self.app_url.as_ref()
    }

    #[must_use]
    pub fn assignment(&self) -> Option<&ReadingAssignment> {
        self.assignment.as_ref()
    }

    #[must_use]
    pub fn use_services(&self) -> bool {
        self.use_services
    }

    #[must_use]
    pub fn path(&self) -> &PagePath {
        &self.path
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
