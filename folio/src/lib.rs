// folio/src/lib.rs

pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod service;
pub mod session;
pub mod view;

pub use config::Config;
pub use dashboard::{
    DashboardState, Destination, FetchStep, Identity, Notice, NoticeKind, SessionExit,
    invalidate_session, logout, resolve_identity,
};
pub use error::{Error, Result};
pub use format::DateStyle;
pub use service::ResumeService;
pub use session::{MemorySessionStore, SessionKey, SessionPolicy, SessionStore};
pub use view::{Avatar, ProfileSummary, ResumeCard, ResumeView};
