/// Aggregated view of page progress, useful for indicator rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageProgress {
    pub completed: usize,
    pub possible: usize,
}

impl PageProgress {
    /// Completion ratio as a percentage.
    ///
    /// Pages with no known activities render as 0 rather than dividing by
    /// zero. The value is not clamped: the page-view credit means it can
    /// exceed 100, and the indicator shows what it is given.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.possible > 0 {
            (100 * self.completed) as f64 / self.possible as f64
        } else {
            0.0
        }
    }

    /// True when the ratio is exactly 100, the point at which the page-level
    /// completion control may be triggered automatically.
    #[must_use]
    pub fn at_capacity(&self) -> bool {
        self.possible > 0 && self.completed == self.possible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_guarded_for_empty_pages() {
        let progress = PageProgress {
            completed: 1,
            possible: 0,
        };
        assert_eq!(progress.percent(), 0.0);
        assert!(!progress.at_capacity());
    }

    #[test]
    fn percent_is_unclamped() {
        let progress = PageProgress {
            completed: 4,
            possible: 3,
        };
        assert!(progress.percent() > 133.0);
        assert!(!progress.at_capacity());
    }

    #[test]
    fn at_capacity_means_exactly_one_hundred() {
        let progress = PageProgress {
            completed: 3,
            possible: 3,
        };
        assert!(progress.at_capacity());
        assert_eq!(progress.percent(), 100.0);
    }
}
