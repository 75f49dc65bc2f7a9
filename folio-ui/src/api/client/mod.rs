use async_trait::async_trait;
use dioxus::prelude::{info, warn};
use folio::{Config, Error, ResumeService, SessionStore};
use reqwest::Client;
use shared_http::api::{ErrorResponse, SavedResumesResponse};

use crate::session::AppSessionStore;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
    session: AppSessionStore,
}

impl ApiClient {
    pub fn new(config: Config, session: AppSessionStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            session,
        }
    }

    fn saved_resumes_url(&self) -> String {
        format!("{}/resumes/saved", self.config.api_base_url)
    }
}

#[async_trait(?Send)]
impl ResumeService for ApiClient {
    async fn saved_resumes(&self) -> folio::Result<SavedResumesResponse> {
        let url = self.saved_resumes_url();
        info!("Fetching saved resumes from URL: {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = self.session.token()? {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Saved resumes request failed: {}", e);
            Error::Request(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_default();
            warn!("Saved resumes request returned {}: {}", status, reason);
            return Err(Error::Status(status.as_u16()));
        }

        response
            .json::<SavedResumesResponse>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_resumes_url() {
        let config = Config::from_lookup(|key| match key {
            "FOLIO_API_SERVER" => Some("https://resumes.example.com".to_string()),
            _ => None,
        });
        let client = ApiClient::new(config, AppSessionStore::default());

        assert_eq!(
            client.saved_resumes_url(),
            "https://resumes.example.com/api/resumes/saved"
        );
    }
}
