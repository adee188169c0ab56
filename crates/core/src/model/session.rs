/// Authentication state the page was served with.
///
/// Resolved server-side before the page loads; the decoration layer only
/// branches on it, it never transitions between the two states itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderSession {
    LoggedIn { username: String, instructor: bool },
    Anonymous,
}

impl ReaderSession {
    /// Build a session from the raw flags the platform reports.
    #[must_use]
    pub fn from_login(logged_in: bool, username: Option<String>, instructor: bool) -> Self {
        if logged_in {
            Self::LoggedIn {
                username: username.unwrap_or_default(),
                instructor,
            }
        } else {
            Self::Anonymous
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { username, .. } => Some(username),
            Self::Anonymous => None,
        }
    }

    #[must_use]
    pub fn is_instructor(&self) -> bool {
        matches!(
            self,
            Self::LoggedIn {
                instructor: true,
                ..
            }
        )
    }

    /// The status line shown in the page header.
    #[must_use]
    pub fn status_message(&self) -> String {
        match self {
            Self::LoggedIn { username, .. } => format!("username: {username}"),
            Self::Anonymous => "Not logged in".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_in_session_reports_username() {
        let session = ReaderSession::from_login(true, Some("bmiller".to_string()), false);
        assert!(session.is_logged_in());
        assert!(!session.is_instructor());
        assert_eq!(session.username(), Some("bmiller"));
        assert_eq!(session.status_message(), "username: bmiller");
    }

    #[test]
    fn anonymous_session_ignores_leftover_fields() {
        let session = ReaderSession::from_login(false, Some("stale".to_string()), true);
        assert_eq!(session, ReaderSession::Anonymous);
        assert_eq!(session.username(), None);
        assert!(!session.is_instructor());
        assert_eq!(session.status_message(), "Not logged in");
    }
}
