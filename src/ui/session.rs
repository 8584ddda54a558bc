//! Session context for the component tree
//!
//! Wraps the [`SessionStore`] in a `Copy` handle that pages and the HTTP
//! client share:
//! - `session` mirrors the store's state as a signal for rendering
//! - `restored` flips once the persisted session has been read back
//! - every transition goes through the store, then refreshes the signal

use leptos::prelude::*;

use crate::core::api::SessionHandle;
use crate::core::session::{
    AuthToken, LoginRedirect, Role, Session, SessionStore, User, UserUpdate,
};
use crate::ui::browser::{BrowserNavigator, BrowserStorage};

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    store: StoredValue<SessionStore<BrowserStorage>>,
    restored: RwSignal<bool>,
}

impl SessionContext {
    /// Current session, tracked
    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with(Session::is_logged_in)
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(Session::role)
    }

    /// Whether the persisted session has been read back yet
    pub fn is_restored(&self) -> bool {
        self.restored.get()
    }

    pub fn login(&self, token: AuthToken, user: User) {
        self.store.update_value(|store| store.login(token, user));
        self.sync();
    }

    /// Sign out and leave for the login page
    pub fn logout(&self) {
        let redirect = self.store.try_update_value(|store| store.logout());
        self.finish(redirect);
    }

    /// Sign out because the backend rejected the token
    pub fn reject(&self) {
        let redirect = self.store.try_update_value(|store| store.reject());
        self.finish(redirect);
    }

    pub fn update_user_info(&self, update: UserUpdate) -> bool {
        let updated = self
            .store
            .try_update_value(|store| store.update_user_info(update))
            .unwrap_or(false);
        if updated {
            self.sync();
        }
        updated
    }

    fn finish(&self, redirect: Option<LoginRedirect>) {
        self.sync();
        if let Some(redirect) = redirect {
            redirect.follow(&BrowserNavigator);
        }
    }

    fn sync(&self) {
        if let Some(session) = self.store.try_with_value(|store| store.session().clone()) {
            self.session.set(session);
        }
    }
}

impl SessionHandle for SessionContext {
    fn authorization(&self) -> Option<String> {
        self.store
            .try_with_value(|store| store.authorization())
            .flatten()
    }

    fn on_unauthorized(&self) {
        self.reject();
    }
}

/// Provide the session context to the component tree
pub fn provide_session_context() -> SessionContext {
    // Logged out on both server and client so hydration matches
    let ctx = SessionContext {
        session: RwSignal::new(Session::logged_out()),
        store: StoredValue::new(SessionStore::new(BrowserStorage)),
        restored: RwSignal::new(false),
    };

    // Read localStorage back once hydration is complete (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            ctx.store
                .set_value(SessionStore::restore(BrowserStorage));
            ctx.sync();
            ctx.restored.set(true);
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
