use async_trait::async_trait;
use shared_http::api::SavedResumesResponse;

use crate::error::Result;

/// Remote source of the signed-in user's saved resumes.
///
/// Futures are not required to be `Send` so browser HTTP clients qualify.
#[async_trait(?Send)]
pub trait ResumeService {
    /// Fetch the saved resumes. Credentials are the implementor's concern.
    async fn saved_resumes(&self) -> Result<SavedResumesResponse>;
}
