use std::sync::Arc;

use dashmap::DashMap;
use shared_http::api::UserInfo;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::{Error, Result};

/// Keys the client persists between page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum SessionKey {
    /// Opaque credential handed out at sign-in
    #[strum(serialize = "token")]
    Token,
    /// Serialized [`UserInfo`]
    #[strum(serialize = "user")]
    User,
}

/// How the dashboard treats persisted identity data that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SessionPolicy {
    /// Ignore the bad record and render a degraded profile
    #[default]
    Lenient,
    /// Drop the session and send the user back to sign in
    Strict,
}

/// String-keyed storage that survives page reloads.
///
/// Implementors only provide the raw operations; the typed accessors are
/// shared so every backend encodes the user record the same way.
pub trait SessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>>;

    fn set(&self, key: SessionKey, value: &str) -> Result<()>;

    fn remove(&self, key: SessionKey) -> Result<()>;

    fn token(&self) -> Result<Option<String>> {
        self.get(SessionKey::Token)
    }

    fn set_token(&self, token: &str) -> Result<()> {
        self.set(SessionKey::Token, token)
    }

    /// Read the cached user. A missing, blank or `null` record is no user.
    fn user(&self) -> Result<Option<UserInfo>> {
        let Some(raw) = self.get(SessionKey::User)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<UserInfo>>(&raw).map_err(|source| Error::MalformedSession {
            key: SessionKey::User,
            source,
        })
    }

    fn set_user(&self, user: &UserInfo) -> Result<()> {
        let raw = serde_json::to_string(user).map_err(|source| Error::MalformedSession {
            key: SessionKey::User,
            source,
        })?;
        self.set(SessionKey::User, &raw)
    }

    /// Remove every persisted key. All removals are attempted; the first
    /// failure is reported.
    fn clear(&self) -> Result<()> {
        let mut first_err = None;
        for key in SessionKey::iter() {
            if let Err(err) = self.remove(key) {
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// In-process store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<DashMap<SessionKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>> {
        Ok(self.entries.get(&key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<()> {
        self.entries.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<()> {
        self.entries.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn jane() -> UserInfo {
        UserInfo {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            picture: Some("https://example.com/jane.png".to_string()),
        }
    }

    #[test]
    fn test_key_names() {
        assert_eq!(SessionKey::Token.as_ref(), "token");
        assert_eq!(SessionKey::User.to_string(), "user");
    }

    #[test]
    fn test_user_round_trip() {
        let store = MemorySessionStore::new();
        store.set_user(&jane()).unwrap();

        assert_eq!(store.user().unwrap(), Some(jane()));
    }

    #[test]
    fn test_missing_blank_and_null_user() {
        let store = MemorySessionStore::new();
        assert_eq!(store.user().unwrap(), None);

        store.set(SessionKey::User, "   ").unwrap();
        assert_eq!(store.user().unwrap(), None);

        store.set(SessionKey::User, "null").unwrap();
        assert_eq!(store.user().unwrap(), None);
    }

    #[test]
    fn test_malformed_user() {
        let store = MemorySessionStore::new();
        store.set(SessionKey::User, "{not json").unwrap();

        let result = store.user();
        assert!(matches!(
            result,
            Err(Error::MalformedSession {
                key: SessionKey::User,
                ..
            })
        ));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemorySessionStore::new();
        store.set_token("abc123").unwrap();
        store.set_user(&jane()).unwrap();
        assert_eq!(store.len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.token().unwrap(), None);

        // Clearing an empty store is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        other.set_token("shared").unwrap();

        assert_eq!(store.token().unwrap().as_deref(), Some("shared"));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(SessionPolicy::from_str("strict").unwrap(), SessionPolicy::Strict);
        assert_eq!(SessionPolicy::from_str("Lenient").unwrap(), SessionPolicy::Lenient);
        assert!(SessionPolicy::from_str("paranoid").is_err());
    }
}
