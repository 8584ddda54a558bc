//! Session store
//!
//! Owns the current [`Session`] and keeps the two storage slots in step
//! with it:
//! - `token` holds the raw bearer token read by request decorators
//! - `auth-storage` holds the serialized session used to restore on reload
//!
//! Storage failures never block a transition; they are logged and the
//! in-memory session stays authoritative for the lifetime of the page.

use leptos::logging::{log, warn};

use super::model::{AuthToken, Role, Session, User, UserUpdate};
use super::navigation::LoginRedirect;
use super::storage::{SESSION_KEY, SessionStorage, TOKEN_KEY};

pub struct SessionStore<S> {
    storage: S,
    session: Session,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a logged-out store without reading storage
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: Session::logged_out(),
        }
    }

    /// Create a store from what a previous page load persisted.
    ///
    /// The token slot must agree with the persisted session. A missing or
    /// different token means the session was torn down elsewhere, so both
    /// slots are cleared and the store starts logged out.
    pub fn restore(storage: S) -> Self {
        let mut store = Self::new(storage);

        let Some(raw) = store.storage.get(SESSION_KEY) else {
            return store;
        };

        let session = match Session::from_persisted(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!("Discarding unreadable persisted session: {}", e);
                store.clear_storage();
                return store;
            }
        };

        if let Some(token) = session.token() {
            let slot = store.storage.get(TOKEN_KEY);
            if slot.as_deref() != Some(token.as_str()) {
                warn!("Persisted session does not match stored token, starting logged out");
                store.clear_storage();
                return store;
            }
        }

        store.session = session;
        store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.session.token()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    /// `Authorization` header value for outgoing requests
    pub fn authorization(&self) -> Option<String> {
        self.session.token().map(AuthToken::bearer)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Start a session for `user`
    pub fn login(&mut self, token: AuthToken, user: User) {
        if let Err(e) = self.storage.set(TOKEN_KEY, token.as_str()) {
            warn!("Failed to persist token: {}", e);
        }

        log!("Signed in as user {} ({})", user.id, user.role);
        self.session = Session::logged_in(token, user);
        self.persist();
    }

    /// End the session. Calling it while logged out only repeats the redirect.
    pub fn logout(&mut self) -> LoginRedirect {
        if self.session.is_logged_in() {
            log!("Signed out");
        }
        self.reset()
    }

    /// End the session because the backend rejected its token
    pub fn reject(&mut self) -> LoginRedirect {
        warn!("Session rejected by server, signing out");
        self.reset()
    }

    /// Merge `update` into the current user.
    ///
    /// Returns `false` and leaves the store untouched when nobody is signed in.
    pub fn update_user_info(&mut self, update: UserUpdate) -> bool {
        let Some(user) = self.session.user_mut() else {
            return false;
        };

        if user.apply(update) {
            self.persist();
        }
        true
    }

    fn reset(&mut self) -> LoginRedirect {
        self.session = Session::logged_out();
        self.clear_storage();
        LoginRedirect
    }

    fn persist(&mut self) {
        match self.session.to_persisted() {
            Ok(raw) => {
                if let Err(e) = self.storage.set(SESSION_KEY, &raw) {
                    warn!("Failed to persist session: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize session: {}", e),
        }
    }

    fn clear_storage(&mut self) {
        for key in [TOKEN_KEY, SESSION_KEY] {
            if let Err(e) = self.storage.remove(key) {
                warn!("Failed to clear `{}`: {}", key, e);
            }
        }
    }
}
