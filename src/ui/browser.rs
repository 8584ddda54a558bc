//! Browser adapters for the session store
//!
//! `localStorage` backs [`SessionStorage`] and `window.location` backs
//! [`Navigator`]. On the server both degrade to no-ops so the same components
//! render during SSR.

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::session::{Navigator, SessionStorage, StorageError};

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(not(feature = "ssr"))]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected {
                key: key.to_string(),
            })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|_| StorageError::RemoveRejected {
                key: key.to_string(),
            })
    }
}

/// SSR stub: there is no browser storage on the server
#[cfg(feature = "ssr")]
impl SessionStorage for BrowserStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

/// Full page navigation through `window.location`.
///
/// A hard load drops every signal, so nothing rendered for the old session
/// survives the redirect.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(not(feature = "ssr"))]
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            leptos::logging::warn!("Failed to navigate to {}: {:?}", path, e);
        }
    }

    #[cfg(feature = "ssr")]
    fn navigate(&self, _path: &str) {}
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::session::{AuthToken, Role, SessionStore, TOKEN_KEY, User};

    #[test]
    fn test_server_storage_holds_nothing() {
        let mut storage = BrowserStorage;
        assert_eq!(storage.set(TOKEN_KEY, "tok"), Err(StorageError::Unavailable));
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.remove(TOKEN_KEY), Ok(()));
    }

    #[test]
    fn test_server_render_session_is_in_memory_only() {
        let mut store = SessionStore::restore(BrowserStorage);
        assert!(!store.is_logged_in());

        let user = User {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Admin".to_string(),
            email: "ada@uni.edu".to_string(),
            role: Role::Admin,
        };
        store.login(AuthToken::new("tok").unwrap(), user);
        assert!(store.is_logged_in());
        assert!(!SessionStore::restore(BrowserStorage).is_logged_in());
    }
}
