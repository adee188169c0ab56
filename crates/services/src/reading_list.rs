use book_core::model::{PagePath, ReadingAssignment, ReadingPosition};

/// Continue-reading notice for the current page, appended to the main
/// content when the reader follows a reading assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingListNotice {
    /// The assignment is done; the current page was its last reading.
    Finished { total: usize },
    /// There is a next reading; `position` is the current page's 1-based
    /// place in the assignment.
    Continue {
        href: String,
        position: usize,
        total: usize,
    },
    /// The page does not belong to the assignment.
    OffAssignment,
}

impl ReadingListNotice {
    /// Reader-facing text of the notice.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Finished { total } => {
                format!("Finished reading assignment. Page {total} of {total}.")
            }
            Self::Continue {
                position, total, ..
            } => format!(
                "Continue to page {} of {total} in the reading assignment.",
                position + 1
            ),
            Self::OffAssignment => {
                "This page is not part of the last reading assignment you visited.".to_string()
            }
        }
    }

    /// Link target when the notice is a continue link.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Continue { href, .. } => Some(href),
            _ => None,
        }
    }
}

/// Work out the continue-reading notice for the current page.
#[must_use]
pub fn continue_reading(assignment: &ReadingAssignment, page: &PagePath) -> ReadingListNotice {
    match assignment.locate(&page.page_name()) {
        ReadingPosition::Finished { total } => ReadingListNotice::Finished { total },
        ReadingPosition::InProgress {
            next,
            position,
            total,
        } => ReadingListNotice::Continue {
            href: page.sibling(&next),
            position,
            total,
        },
        ReadingPosition::NotAssigned => ReadingListNotice::OffAssignment,
    }
}
