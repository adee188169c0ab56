use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Offset;
use tracing_subscriber::EnvFilter;

use book_core::model::{ActivityId, PageConfigDraft};
use services::{
    ActivityScanner, CompletionControl, ContentSurface, NavbarSurface, NavbarView, PageSetup,
    PageSurfaces, ProgressIndicator, ReadingListNotice, SessionBackend,
};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--config <page.json>] [--discover <id>]... [--record <id>]...");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <page.json>  Page configuration to load (default: built-in sample)");
    eprintln!("  --discover <id>       Activity id the simulated page scan finds (repeatable)");
    eprintln!("  --record <id>         Reader interaction to replay after setup (repeatable)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BOOK_PAGE_CONFIG      Same as --config");
}

struct Args {
    config_path: Option<String>,
    discover: Vec<ActivityId>,
    record: Vec<ActivityId>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut config_path = std::env::var("BOOK_PAGE_CONFIG").ok();
        let mut discover = Vec::new();
        let mut record = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    config_path = Some(require_value(args, "--config")?);
                }
                "--discover" => {
                    discover.push(ActivityId::new(require_value(args, "--discover")?));
                }
                "--record" => {
                    record.push(ActivityId::new(require_value(args, "--record")?));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            config_path,
            discover,
            record,
        })
    }
}

/// A page configuration standing in for one a platform server would embed.
const SAMPLE_CONFIG: &str = r#"{
    "isLoggedIn": true,
    "username": "demo",
    "app": "https://example.org/platform",
    "readings": ["Intro/Start.html", "Intro/Middle.html", "Intro/End.html"],
    "useServices": true,
    "path": "/books/demo/Intro/Middle.html"
}"#;

/// Console rendition of the page surfaces: every decoration call becomes a
/// printed line, so a run shows the whole pass end to end.
struct ConsolePage {
    discovered: Vec<ActivityId>,
    completed: AtomicBool,
}

impl ConsolePage {
    fn new(discovered: Vec<ActivityId>) -> Self {
        Self {
            discovered,
            completed: AtomicBool::new(false),
        }
    }
}

impl ActivityScanner for ConsolePage {
    fn scan(&self) -> Vec<ActivityId> {
        println!("[scan] {} activity container(s) found", self.discovered.len());
        self.discovered.clone()
    }
}

impl ProgressIndicator for ConsolePage {
    fn set_counts(&self, completed: usize, possible: usize) {
        println!("[progress] {completed} of {possible} activities");
    }
    fn set_fill(&self, percent: f64) {
        println!("[progress] fill {percent:.1}%");
    }
    fn hide(&self) {
        println!("[progress] indicator hidden (navigation page)");
    }
    fn mark_logged_out(&self) {
        println!("[progress] styled for logged-out reader");
    }
}

impl CompletionControl for ConsolePage {
    fn label(&self) -> String {
        if self.completed.load(Ordering::SeqCst) {
            "Completed. Click to mark as not completed".to_string()
        } else {
            "Mark as Completed".to_string()
        }
    }
    fn complete(&self) {
        self.completed.store(true, Ordering::SeqCst);
        println!("[completion] page marked complete");
    }
}

impl NavbarSurface for ConsolePage {
    fn apply(&self, view: &NavbarView) {
        if let Some(link) = &view.auth_link {
            println!("[navbar] auth link: {} -> {}", link.label, link.href);
        }
        if let Some(note) = &view.footer_note {
            println!("[navbar] footer: {note}");
        }
    }
}

impl ContentSurface for ConsolePage {
    fn set_status_message(&self, message: &str) {
        println!("[header] {message}");
    }
    fn append_notice(&self, notice: &ReadingListNotice) {
        match notice.href() {
            Some(href) => println!("[reading-list] {} ({href})", notice.message()),
            None => println!("[reading-list] {}", notice.message()),
        }
    }
    fn notify_components_ready(&self) {
        println!("[page] components may finish loading");
    }
}

impl SessionBackend for ConsolePage {
    fn report_timezone_offset(&self, hours: i32) {
        println!("[backend] timezone offset reported: {hours}h");
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let raw_config = match &args.config_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_CONFIG.to_string(),
    };
    let draft: PageConfigDraft = serde_json::from_str(&raw_config)?;
    let page_path = draft.path.clone().unwrap_or_default();

    let page = Arc::new(ConsolePage::new(args.discover.clone()));
    let surfaces = PageSurfaces {
        scanner: Arc::clone(&page) as Arc<dyn ActivityScanner>,
        indicator: Arc::clone(&page) as Arc<dyn ProgressIndicator>,
        completion: Arc::clone(&page) as Arc<dyn CompletionControl>,
        navbar: Arc::clone(&page) as Arc<dyn NavbarSurface>,
        content: Arc::clone(&page) as Arc<dyn ContentSurface>,
        backend: Arc::clone(&page) as Arc<dyn SessionBackend>,
    };

    // West-positive whole hours, the convention the platform expects.
    let tz_hours = chrono::Local::now().offset().fix().utc_minus_local() / 3600;

    let decoration = PageSetup::new(draft, surfaces)?
        .with_timezone_offset(tz_hours)
        .run();

    let progress = decoration.progress();
    for id in &args.record {
        println!("[reader] interacts with {id}");
        progress.record_activity(id);
    }

    let snapshot = progress.progress();
    println!(
        "[done] {} of {} activities ({:.1}%)",
        snapshot.completed,
        snapshot.possible,
        snapshot.percent()
    );

    if let Some(idle) = decoration.idle() {
        let clock = services::Clock::default_clock();
        println!(
            "[idle] window closes {}, then redirect to: {}",
            idle.deadline_after(&clock).format("%H:%M:%S UTC"),
            idle.redirect_for(&book_core::model::PagePath::new(page_path), "")
                .unwrap_or_else(|| "(stay)".to_string())
        );
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
