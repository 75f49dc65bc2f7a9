//! Session storage backing for the running app.

#[cfg(target_arch = "wasm32")]
pub use local::LocalSessionStore;

/// Browser builds persist to `localStorage`; native builds keep the session
/// in memory for the lifetime of the window.
#[cfg(target_arch = "wasm32")]
pub type AppSessionStore = LocalSessionStore;
#[cfg(not(target_arch = "wasm32"))]
pub type AppSessionStore = folio::MemorySessionStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use folio::{Error, Result, SessionKey, SessionStore};
    use gloo_storage::{LocalStorage, Storage};

    /// Raw string access to `window.localStorage`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalSessionStore;

    fn storage_error(err: impl std::fmt::Debug) -> Error {
        Error::Storage(format!("{err:?}"))
    }

    impl SessionStore for LocalSessionStore {
        fn get(&self, key: SessionKey) -> Result<Option<String>> {
            LocalStorage::raw()
                .get_item(key.as_ref())
                .map_err(storage_error)
        }

        fn set(&self, key: SessionKey, value: &str) -> Result<()> {
            LocalStorage::raw()
                .set_item(key.as_ref(), value)
                .map_err(storage_error)
        }

        fn remove(&self, key: SessionKey) -> Result<()> {
            LocalStorage::raw()
                .remove_item(key.as_ref())
                .map_err(storage_error)
        }
    }
}
