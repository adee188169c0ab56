use book_core::model::PageConfig;
use url::Url;

/// Single authentication link slot in the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthLink {
    pub label: String,
    pub href: String,
}

/// Computed navbar state for the current session.
///
/// Pure data; the embedding layer applies it through `NavbarSurface`. This
/// keeps the login/logout transition an explicit function of the session
/// instead of wiring spread across event handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarView {
    pub show_profile: bool,
    pub show_password: bool,
    pub show_register: bool,
    pub show_instructor_menu: bool,
    /// Absent when no application base URL is configured.
    pub auth_link: Option<AuthLink>,
    pub footer_note: Option<String>,
}

impl NavbarView {
    /// Compute the navbar view for the page's session.
    ///
    /// Returns `None` when the navbar should be left untouched: an
    /// anonymous reader on a build that runs without platform services.
    #[must_use]
    pub fn for_session(config: &PageConfig) -> Option<Self> {
        if config.session().is_logged_in() {
            Some(Self {
                show_profile: true,
                show_password: true,
                show_register: false,
                show_instructor_menu: config.session().is_instructor(),
                auth_link: config.app_url().map(|app| AuthLink {
                    label: "Log Out".to_string(),
                    href: user_action_href(app, "logout"),
                }),
                footer_note: None,
            })
        } else if config.use_services() {
            Some(Self {
                show_profile: false,
                show_password: false,
                show_register: true,
                show_instructor_menu: false,
                auth_link: config.app_url().map(|app| AuthLink {
                    label: "Login".to_string(),
                    href: user_action_href(app, "login"),
                }),
                footer_note: Some("user not logged in".to_string()),
            })
        } else {
            None
        }
    }
}

pub(crate) fn user_action_href(app: &Url, action: &str) -> String {
    format!(
        "{}/default/user/{action}",
        app.as_str().trim_end_matches('/')
    )
}
