#![forbid(unsafe_code)]

pub mod error;
pub mod idle;
pub mod navbar;
pub mod page_setup;
pub mod progress_tracker;
pub mod reading_list;
pub mod surface;

pub use book_core::Clock;

pub use error::SetupError;
pub use idle::IdleRedirect;
pub use navbar::{AuthLink, NavbarView};
pub use page_setup::{PageDecoration, PageSetup, PageSurfaces};
pub use progress_tracker::{ProgressHandle, ProgressTracker};
pub use reading_list::{ReadingListNotice, continue_reading};
pub use surface::{
    ActivityScanner, CompletionControl, ContentSurface, NavbarSurface, ProgressIndicator,
    SessionBackend,
};
