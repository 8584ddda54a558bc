#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use crate::core::api::{ApiClient, ApiError, ApiRequest, ApiResponse, SessionHandle, Transport};
    use crate::core::config::Config;
    use crate::core::session::{
        AuthToken, LOGIN_PATH, MemoryStorage, Navigator, Role, SESSION_KEY, Session,
        SessionStorage, SessionStore, TOKEN_KEY, User, UserUpdate,
    };

    // ========================================================================
    // Fixtures
    // ========================================================================

    fn admin() -> User {
        User {
            id: 1,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            role: Role::Admin,
        }
    }

    fn token(value: &str) -> AuthToken {
        AuthToken::new(value).unwrap()
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    /// Shared store wired to the client the way the UI context wires it
    #[derive(Clone)]
    struct SharedSession {
        store: Rc<RefCell<SessionStore<MemoryStorage>>>,
        navigator: Rc<RecordingNavigator>,
    }

    impl SharedSession {
        fn new() -> Self {
            Self {
                store: Rc::new(RefCell::new(SessionStore::new(MemoryStorage::new()))),
                navigator: Rc::new(RecordingNavigator::default()),
            }
        }
    }

    impl SessionHandle for SharedSession {
        fn authorization(&self) -> Option<String> {
            self.store.borrow().authorization()
        }

        fn on_unauthorized(&self) {
            let redirect = self.store.borrow_mut().reject();
            redirect.follow(self.navigator.as_ref());
        }
    }

    struct Replay(RefCell<VecDeque<ApiResponse>>);

    impl Replay {
        fn new(answers: &[(u16, &str)]) -> Self {
            Self(RefCell::new(
                answers
                    .iter()
                    .map(|(status, body)| ApiResponse {
                        status: *status,
                        body: body.to_string(),
                    })
                    .collect(),
            ))
        }
    }

    impl Transport for Replay {
        async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, ApiError> {
            self.0
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| ApiError::Network("connection refused".to_string()))
        }
    }

    fn config() -> Config {
        Config {
            api_base_url: "http://localhost:8080/api".to_string(),
        }
    }

    // ========================================================================
    // Session lifecycle
    // ========================================================================

    #[test]
    fn test_login_then_logout_scenario() {
        let mut store = SessionStore::new(MemoryStorage::new());

        store.login(token("tok123"), admin());
        assert!(store.is_logged_in());
        assert_eq!(store.token().map(AuthToken::as_str), Some("tok123"));
        assert_eq!(store.role(), Some(Role::Admin));
        assert_eq!(store.user(), Some(&admin()));

        let navigator = RecordingNavigator::default();
        store.logout().follow(&navigator);
        assert_eq!(store.session(), &Session::logged_out());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert_eq!(*navigator.visited.borrow(), vec![LOGIN_PATH.to_string()]);
    }

    #[test]
    fn test_update_changes_only_first_name() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(token("tok123"), admin());

        store.update_user_info(UserUpdate::first_name("X"));
        let user = store.user().unwrap();
        assert_eq!(user.first_name, "X");
        assert_eq!(user.last_name, "B");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.id, 1);
        assert_eq!(user.role, Role::Admin);
        assert_eq!(store.token().map(AuthToken::as_str), Some("tok123"));
    }

    #[test]
    fn test_update_after_logout_does_not_fabricate_user() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(token("tok123"), admin());
        let _ = store.logout();

        store.update_user_info(UserUpdate::names("Ghost", "User"));
        assert!(store.user().is_none());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_reload_restores_identical_session() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(token("tok123"), admin());
        store.update_user_info(UserUpdate::last_name("Byron"));
        let before = store.session().clone();

        let restored = SessionStore::restore(store.into_storage());
        assert_eq!(restored.session(), &before);
    }

    #[test]
    fn test_reload_after_logout_stays_logged_out() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(token("tok123"), admin());
        let _ = store.logout();

        let restored = SessionStore::restore(store.into_storage());
        assert!(!restored.is_logged_in());
    }

    #[test]
    fn test_persisted_blob_layout() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(token("tok123"), admin());

        let raw = store.storage().get(SESSION_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["token"], "tok123");
        assert_eq!(value["state"]["isLoggedIn"], true);
        assert_eq!(value["state"]["user"]["role"], "ADMIN");
        assert_eq!(store.storage().get(TOKEN_KEY).as_deref(), Some("tok123"));
    }

    // ========================================================================
    // HTTP layer and session
    // ========================================================================

    #[tokio::test]
    async fn test_login_through_client_commits_session() {
        let session = SharedSession::new();
        let transport = Replay::new(&[(
            200,
            r#"{"token":"tok123","id":1,"email":"a@b.com","firstName":"A","lastName":"B","role":"ADMIN"}"#,
        )]);
        let client = ApiClient::new(&config(), transport, session.clone());

        let (token, user) = client.login("a@b.com", "admin123").await.unwrap();
        session.store.borrow_mut().login(token, user);

        let store = session.store.borrow();
        assert!(store.is_logged_in());
        assert_eq!(store.authorization().as_deref(), Some("Bearer tok123"));
    }

    #[tokio::test]
    async fn test_invalid_login_response_leaves_store_untouched() {
        let session = SharedSession::new();
        let transport = Replay::new(&[(200, r#"{"token":"tok123"}"#)]);
        let client = ApiClient::new(&config(), transport, session.clone());

        assert!(client.login("a@b.com", "admin123").await.is_err());
        assert!(!session.store.borrow().is_logged_in());
        assert!(session.store.borrow().storage().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_response_logs_out_without_explicit_logout() {
        let session = SharedSession::new();
        session.store.borrow_mut().login(token("tok123"), admin());
        let transport = Replay::new(&[(401, r#"{"error":"Token expired"}"#)]);
        let client = ApiClient::new(&config(), transport, session.clone());

        let result = client.courses().await;
        assert_eq!(result, Err(ApiError::Unauthorized));

        let store = session.store.borrow();
        assert!(!store.is_logged_in());
        assert!(store.token().is_none());
        assert!(store.storage().is_empty());
        assert_eq!(
            *session.navigator.visited.borrow(),
            vec![LOGIN_PATH.to_string()]
        );
    }

    #[tokio::test]
    async fn test_forbidden_response_keeps_session() {
        let session = SharedSession::new();
        session.store.borrow_mut().login(token("tok123"), admin());
        let transport = Replay::new(&[(403, "")]);
        let client = ApiClient::new(&config(), transport, session.clone());

        assert!(matches!(client.users(None).await, Err(ApiError::Forbidden(_))));
        assert!(session.store.borrow().is_logged_in());
        assert!(session.navigator.visited.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_session() {
        let session = SharedSession::new();
        session.store.borrow_mut().login(token("tok123"), admin());
        let client = ApiClient::new(&config(), Replay::new(&[]), session.clone());

        assert!(matches!(
            client.dashboard(Role::Admin).await,
            Err(ApiError::Network(_))
        ));
        assert!(session.store.borrow().is_logged_in());
    }
}
