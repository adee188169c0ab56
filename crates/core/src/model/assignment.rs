/// Where the current page sits within a reading assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingPosition {
    /// The page is the assignment's last reading.
    Finished { total: usize },
    /// The page is reading `position` (1-based); `next` follows it.
    InProgress {
        next: String,
        position: usize,
        total: usize,
    },
    /// The page is not part of the assignment.
    NotAssigned,
}

/// Ordered list of page names (`"chapter/file.html"`) making up the
/// reader's current reading assignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadingAssignment {
    readings: Vec<String>,
}

impl ReadingAssignment {
    #[must_use]
    pub fn new(readings: Vec<String>) -> Self {
        Self { readings }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    #[must_use]
    pub fn readings(&self) -> &[String] {
        &self.readings
    }

    /// Locate a page within the assignment.
    #[must_use]
    pub fn locate(&self, page_name: &str) -> ReadingPosition {
        let total = self.readings.len();
        match self.readings.iter().position(|name| name == page_name) {
            Some(index) if index + 1 == total => ReadingPosition::Finished { total },
            Some(index) => ReadingPosition::InProgress {
                next: self.readings[index + 1].clone(),
                position: index + 1,
                total,
            },
            None => ReadingPosition::NotAssigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment() -> ReadingAssignment {
        ReadingAssignment::new(vec![
            "Intro/Start.html".to_string(),
            "Intro/Middle.html".to_string(),
            "Intro/End.html".to_string(),
        ])
    }

    #[test]
    fn last_reading_is_finished() {
        assert_eq!(
            assignment().locate("Intro/End.html"),
            ReadingPosition::Finished { total: 3 }
        );
    }

    #[test]
    fn middle_reading_points_at_the_next_one() {
        assert_eq!(
            assignment().locate("Intro/Middle.html"),
            ReadingPosition::InProgress {
                next: "Intro/End.html".to_string(),
                position: 2,
                total: 3,
            }
        );
    }

    #[test]
    fn foreign_page_is_not_assigned() {
        assert_eq!(
            assignment().locate("OtherChapter/Page.html"),
            ReadingPosition::NotAssigned
        );
    }

    #[test]
    fn single_reading_finishes_immediately() {
        let single = ReadingAssignment::new(vec!["Intro/Only.html".to_string()]);
        assert_eq!(
            single.locate("Intro/Only.html"),
            ReadingPosition::Finished { total: 1 }
        );
    }

    #[test]
    fn empty_assignment_never_matches() {
        assert_eq!(
            ReadingAssignment::default().locate("Intro/Start.html"),
            ReadingPosition::NotAssigned
        );
    }
}
