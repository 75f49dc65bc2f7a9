//! Dashboard state and the transitions the view drives it through.
//!
//! The mount sequence is strictly ordered: identity is resolved from the
//! session store first, and only a present identity leads to a fetch.

use shared_http::api::{Resume, SavedResumesResponse, UserInfo};
use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::session::{SessionPolicy, SessionStore};
use crate::view::{ProfileSummary, ResumeView};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to load saved resumes";
pub const LOGGED_OUT_MESSAGE: &str = "Logged out successfully";
pub const SESSION_INVALID_MESSAGE: &str = "Your session is invalid, please sign in again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Outcome of reading the cached identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    Present(UserInfo),
    Absent,
    /// Persisted data was malformed and the strict policy is in force
    Invalid,
}

/// What the view must do after applying an [`Identity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStep {
    Fetch,
    Idle,
    Reauthenticate,
}

pub fn resolve_identity<S>(store: &S, policy: SessionPolicy) -> Identity
where
    S: SessionStore + ?Sized,
{
    match store.user() {
        Ok(Some(user)) => Identity::Present(user),
        Ok(None) => Identity::Absent,
        Err(err @ Error::MalformedSession { .. }) => {
            error!("Error parsing user data: {err}");
            match policy {
                SessionPolicy::Lenient => Identity::Absent,
                SessionPolicy::Strict => Identity::Invalid,
            }
        }
        Err(err) => {
            warn!("Could not read session: {err}");
            Identity::Absent
        }
    }
}

/// Where the view goes once a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Application root
    Home,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Home => "/",
        }
    }
}

/// Result of ending a session: where to go and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExit {
    pub notice: Option<Notice>,
    pub redirect: Destination,
}

/// Drop the persisted session. The view always returns to the root, even
/// when storage refuses the removal; the success notice is only shown when
/// both keys are gone.
pub fn logout<S>(store: &S) -> SessionExit
where
    S: SessionStore + ?Sized,
{
    let notice = match store.clear() {
        Ok(()) => {
            info!("User logged out");
            Some(Notice::success(LOGGED_OUT_MESSAGE))
        }
        Err(err) => {
            error!("Logout failed to clear session: {err}");
            None
        }
    };
    SessionExit {
        notice,
        redirect: Destination::Home,
    }
}

/// Drop a session whose identity could not be read and send the user to
/// sign in again.
pub fn invalidate_session<S>(store: &S) -> SessionExit
where
    S: SessionStore + ?Sized,
{
    if let Err(err) = store.clear() {
        warn!("Failed to clear invalid session: {err}");
    }
    SessionExit {
        notice: Some(Notice::error(SESSION_INVALID_MESSAGE)),
        redirect: Destination::Home,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub user: Option<UserInfo>,
    pub resumes: Vec<Resume>,
    pub loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            user: None,
            resumes: Vec::new(),
            loading: true,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the resolved identity and decide whether to fetch.
    pub fn apply_identity(&mut self, identity: Identity) -> FetchStep {
        match identity {
            Identity::Present(user) => {
                self.user = Some(user);
                self.begin_fetch();
                FetchStep::Fetch
            }
            Identity::Absent => {
                self.loading = false;
                FetchStep::Idle
            }
            Identity::Invalid => {
                self.loading = false;
                FetchStep::Reauthenticate
            }
        }
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result. A response without `resumes` leaves the list
    /// alone, as does a failure, which also yields an error notice.
    pub fn finish_fetch(&mut self, result: Result<SavedResumesResponse>) -> Option<Notice> {
        let notice = match result {
            Ok(SavedResumesResponse {
                resumes: Some(resumes),
            }) => {
                info!(count = resumes.len(), "Loaded saved resumes");
                self.resumes = resumes;
                None
            }
            Ok(SavedResumesResponse { resumes: None }) => {
                info!("Saved resumes response carried no list");
                None
            }
            Err(err) => {
                error!("Error fetching saved resumes: {err}");
                Some(Notice::error(FETCH_FAILED_MESSAGE))
            }
        };
        self.loading = false;
        notice
    }

    pub fn view(&self) -> ResumeView<'_> {
        if self.loading {
            ResumeView::Loading
        } else if !self.resumes.is_empty() {
            ResumeView::Grid(&self.resumes)
        } else {
            ResumeView::Empty
        }
    }

    pub fn profile(&self) -> ProfileSummary {
        ProfileSummary::from_user(self.user.as_ref())
    }
}
