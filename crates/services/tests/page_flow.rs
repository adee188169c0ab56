//! End-to-end decoration flow: parse an embedded page configuration, run
//! the setup pass, then drive the shared tracker the way page widgets do.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use book_core::model::{ActivityId, PageConfigDraft};
use services::{
    ActivityScanner, CompletionControl, ContentSurface, NavbarSurface, NavbarView, PageSetup,
    PageSurfaces, ProgressIndicator, ReadingListNotice, SessionBackend,
};

/// One in-memory page standing in for the embedding runtime.
#[derive(Default)]
struct FakePage {
    scanned_ids: Vec<&'static str>,
    counts: Mutex<Option<(usize, usize)>>,
    fill: Mutex<Option<f64>>,
    hidden: AtomicBool,
    completion_clicked: AtomicBool,
    status: Mutex<Option<String>>,
    notice: Mutex<Option<ReadingListNotice>>,
    navbar: Mutex<Option<NavbarView>>,
    components_ready: AtomicBool,
    tz_offset: Mutex<Option<i32>>,
}

impl ActivityScanner for FakePage {
    fn scan(&self) -> Vec<ActivityId> {
        self.scanned_ids
            .iter()
            .map(|id| ActivityId::new(*id))
            .collect()
    }
}

impl ProgressIndicator for FakePage {
    fn set_counts(&self, completed: usize, possible: usize) {
        *self.counts.lock().unwrap() = Some((completed, possible));
    }
    fn set_fill(&self, percent: f64) {
        *self.fill.lock().unwrap() = Some(percent);
    }
    fn hide(&self) {
        self.hidden.store(true, Ordering::SeqCst);
    }
    fn mark_logged_out(&self) {}
}

impl CompletionControl for FakePage {
    fn label(&self) -> String {
        if self.completion_clicked.load(Ordering::SeqCst) {
            "Completed. Click to mark as not completed".to_string()
        } else {
            "Mark as Completed".to_string()
        }
    }
    fn complete(&self) {
        self.completion_clicked.store(true, Ordering::SeqCst);
    }
}

impl NavbarSurface for FakePage {
    fn apply(&self, view: &NavbarView) {
        *self.navbar.lock().unwrap() = Some(view.clone());
    }
}

impl ContentSurface for FakePage {
    fn set_status_message(&self, message: &str) {
        *self.status.lock().unwrap() = Some(message.to_string());
    }
    fn append_notice(&self, notice: &ReadingListNotice) {
        *self.notice.lock().unwrap() = Some(notice.clone());
    }
    fn notify_components_ready(&self) {
        self.components_ready.store(true, Ordering::SeqCst);
    }
}

impl SessionBackend for FakePage {
    fn report_timezone_offset(&self, hours: i32) {
        *self.tz_offset.lock().unwrap() = Some(hours);
    }
}

fn bundle(page: &Arc<FakePage>) -> PageSurfaces {
    PageSurfaces {
        scanner: Arc::clone(page) as Arc<dyn ActivityScanner>,
        indicator: Arc::clone(page) as Arc<dyn ProgressIndicator>,
        completion: Arc::clone(page) as Arc<dyn CompletionControl>,
        navbar: Arc::clone(page) as Arc<dyn NavbarSurface>,
        content: Arc::clone(page) as Arc<dyn ContentSurface>,
        backend: Arc::clone(page) as Arc<dyn SessionBackend>,
    }
}

fn draft_from_json(json: &str) -> PageConfigDraft {
    serde_json::from_str(json).unwrap()
}

#[test]
fn full_page_load_with_reported_progress() {
    let page = Arc::new(FakePage {
        scanned_ids: vec!["should_not_be_scanned"],
        ..FakePage::default()
    });

    let draft = draft_from_json(
        r#"{
            "activities": {"page": 1, "question_1": 0, "codelens_2": 3},
            "isLoggedIn": true,
            "username": "bmiller",
            "app": "https://example.org/platform",
            "readings": ["Intro/Start.html", "Intro/Middle.html", "Intro/End.html"],
            "useServices": true,
            "path": "/books/fopp/Intro/Middle.html"
        }"#,
    );

    let decoration = PageSetup::new(draft, bundle(&page))
        .unwrap()
        .with_timezone_offset(6)
        .run();

    // The reported map was used verbatim: page + codelens_2 already done.
    assert_eq!(*page.counts.lock().unwrap(), Some((3, 3)));
    assert_eq!(*page.fill.lock().unwrap(), Some(100.0));
    assert!(!page.hidden.load(Ordering::SeqCst));

    assert_eq!(*page.tz_offset.lock().unwrap(), Some(6));
    assert_eq!(
        page.status.lock().unwrap().as_deref(),
        Some("username: bmiller")
    );
    assert_eq!(
        page.navbar
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|view| view.auth_link.as_ref().map(|link| link.label.clone())),
        Some("Log Out".to_string())
    );
    assert_eq!(
        page.notice
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|notice| notice.href().map(String::from)),
        Some("/books/fopp/Intro/End.html".to_string())
    );
    assert!(page.components_ready.load(Ordering::SeqCst));

    let idle = decoration.idle().expect("idle policy armed");
    assert_eq!(
        idle.redirect_for(&book_core::model::PagePath::new("/books/fopp/Intro/Middle.html"), ""),
        Some(
            "https://example.org/platform/default/user/login?_next=/books/fopp/Intro/Middle.html"
                .to_string()
        )
    );

    // Completion was not auto-triggered at load time even at 100%.
    assert!(!page.completion_clicked.load(Ordering::SeqCst));
}

#[test]
fn widgets_drive_a_scanned_page_to_completion() {
    let page = Arc::new(FakePage {
        scanned_ids: vec!["question_1", "poll_2"],
        ..FakePage::default()
    });

    let draft = draft_from_json(
        r#"{
            "isLoggedIn": true,
            "username": "reader",
            "useServices": true,
            "path": "/books/fopp/Intro/Start.html"
        }"#,
    );

    let decoration = PageSetup::new(draft, bundle(&page)).unwrap().run();
    let progress = decoration.progress();

    // page view + 2 scanned activities, only the page view credited.
    assert_eq!(*page.counts.lock().unwrap(), Some((1, 3)));

    // Two widgets share the handle; a stray id in between changes nothing.
    let quiz_widget = progress.clone();
    let poll_widget = progress.clone();
    quiz_widget.record_activity(&ActivityId::new("question_1"));
    assert_eq!(*page.counts.lock().unwrap(), Some((2, 3)));
    progress.record_activity(&ActivityId::new("not_on_this_page"));
    assert_eq!(*page.counts.lock().unwrap(), Some((2, 3)));
    poll_widget.record_activity(&ActivityId::new("poll_2"));

    assert_eq!(*page.counts.lock().unwrap(), Some((3, 3)));
    assert_eq!(*page.fill.lock().unwrap(), Some(100.0));
    assert!(page.completion_clicked.load(Ordering::SeqCst));
}

#[test]
fn navigation_page_hides_progress_but_still_sets_up() {
    let page = Arc::new(FakePage::default());

    let draft = draft_from_json(
        r#"{
            "isLoggedIn": false,
            "useServices": true,
            "path": "/books/fopp/index.html"
        }"#,
    );

    let decoration = PageSetup::new(draft, bundle(&page)).unwrap().run();

    assert!(page.hidden.load(Ordering::SeqCst));
    assert_eq!(page.status.lock().unwrap().as_deref(), Some("Not logged in"));
    assert!(page.components_ready.load(Ordering::SeqCst));
    assert!(decoration.idle().is_none());
}
