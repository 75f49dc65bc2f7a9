use thiserror::Error;

use crate::session::SessionKey;

#[derive(Debug, Error)]
pub enum Error {
    #[error("session storage unavailable: {0}")]
    Storage(String),

    #[error("malformed session data under `{key}`: {source}")]
    MalformedSession {
        key: SessionKey,
        source: serde_json::Error,
    },

    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
