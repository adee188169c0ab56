use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub(crate) const PAGE_VIEW_ID: &str = "page";

/// Identifier of one trackable interactive unit embedded in a page.
///
/// Discovered identifiers come from the id of each activity container root;
/// reported identifiers come from the platform's page configuration.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// Creates a new `ActivityId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved identifier crediting the page view itself.
    #[must_use]
    pub fn page_view() -> Self {
        Self(PAGE_VIEW_ID.to_string())
    }

    /// Returns true for the reserved page-view identifier.
    #[must_use]
    pub fn is_page_view(&self) -> bool {
        self.0 == PAGE_VIEW_ID
    }

    /// Returns the underlying identifier string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActivityId({})", self.0)
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an `ActivityId` from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseActivityIdError;

impl fmt::Display for ParseActivityIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "activity identifier is empty")
    }
}

impl std::error::Error for ParseActivityIdError {}

impl FromStr for ActivityId {
    type Err = ParseActivityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseActivityIdError);
        }
        Ok(Self(trimmed.to_string()))
    }
}
