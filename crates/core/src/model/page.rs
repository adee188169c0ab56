use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Pages that navigate the book rather than present content. The progress
/// indicator is hidden on these.
static NAVIGATION_PAGES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(index\.html|toctree\.html|Exercises\.html|Glossary\.html|search\.html)$")
        .expect("navigation page pattern is valid")
});

const GRADING_PREFIX: &str = "/admin/grading";

/// Path of the page currently being decorated.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PagePath(String);

impl PagePath {
    /// Creates a new `PagePath`
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for index, table-of-contents, exercise-list, glossary and search
    /// pages. Matched case-insensitively against the end of the path.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        NAVIGATION_PAGES.is_match(&self.0)
    }

    /// True for instructor grading pages, where idle redirects are not armed.
    #[must_use]
    pub fn is_grading(&self) -> bool {
        self.0.contains(GRADING_PREFIX)
    }

    /// The page's name within the book: the last two path segments joined,
    /// `"chapter/file.html"`. This is the key a reading assignment lists
    /// pages under. Falls back to the last segment for shallow paths.
    #[must_use]
    pub fn page_name(&self) -> String {
        let segments = self.segments();
        match segments.len() {
            0 => String::new(),
            1 => segments[0].to_string(),
            n => format!("{}/{}", segments[n - 2], segments[n - 1]),
        }
    }

    /// Path of a sibling page: the last two segments replaced with `name`
    /// (itself a `"chapter/file.html"` pair). Used to build the href of the
    /// next page in a reading assignment.
    #[must_use]
    pub fn sibling(&self, name: &str) -> String {
        let segments = self.segments();
        let keep = segments.len().saturating_sub(2);
        let mut parts: Vec<&str> = segments[..keep].to_vec();
        parts.push(name);
        let joined = parts.join("/");
        if self.0.starts_with('/') {
            format!("/{joined}")
        } else {
            joined
        }
    }

    fn segments(&self) -> Vec<&str> {
        self.0.split('/').filter(|s| !s.is_empty()).collect()
    }
}

impl fmt::Debug for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PagePath({})", self.0)
    }
}

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
