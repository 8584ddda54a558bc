//! Session data model
//!
//! `Session` keeps the token and the user together so a logged-in flag can
//! never disagree with the credentials it describes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of an account, as sent by the backend
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[display("ADMIN")]
    Admin,
    #[display("INSTRUCTOR")]
    Instructor,
    #[display("STUDENT")]
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Instructor, Role::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Instructor => "INSTRUCTOR",
            Role::Student => "STUDENT",
        }
    }

    /// Lowercase form used in URLs (`/dashboard/admin`) and captions
    pub fn slug(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Instructor => "instructor",
            Role::Student => "student",
        }
    }

    /// Parse a role name, ignoring ASCII case
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Bearer token issued by the login endpoint.
///
/// Can only hold a non-empty string. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthToken(String);

/// Returned when an empty string is offered as a token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("token must not be empty")]
pub struct EmptyTokenError;

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyTokenError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EmptyTokenError);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl TryFrom<String> for AuthToken {
    type Error = EmptyTokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AuthToken> for String {
    fn from(token: AuthToken) -> Self {
        token.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Profile of the signed-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Merge the fields present in `update`; returns whether anything changed
    pub fn apply(&mut self, update: UserUpdate) -> bool {
        let mut changed = false;
        if let Some(first_name) = update.first_name {
            changed |= self.first_name != first_name;
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            changed |= self.last_name != last_name;
            self.last_name = last_name;
        }
        changed
    }
}

/// Partial profile edit. Only the name fields are editable client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserUpdate {
    pub fn first_name(value: impl Into<String>) -> Self {
        Self {
            first_name: Some(value.into()),
            last_name: None,
        }
    }

    pub fn last_name(value: impl Into<String>) -> Self {
        Self {
            first_name: None,
            last_name: Some(value.into()),
        }
    }

    pub fn names(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Credentials {
    token: AuthToken,
    user: User,
}

/// Client-held record of who is signed in
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self { credentials: None }
    }

    pub fn logged_in(token: AuthToken, user: User) -> Self {
        Self {
            credentials: Some(Credentials { token, user }),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.credentials.as_ref().map(|c| &c.token)
    }

    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub(crate) fn user_mut(&mut self) -> Option<&mut User> {
        self.credentials.as_mut().map(|c| &mut c.user)
    }

    /// Serialize into the persisted-store envelope
    pub fn to_persisted(&self) -> Result<String, serde_json::Error> {
        let envelope = PersistedEnvelope {
            state: PersistedState {
                token: self.token().map(|t| t.as_str().to_string()),
                user: self.user().cloned(),
                is_logged_in: self.is_logged_in(),
            },
            version: PERSISTED_VERSION,
        };
        serde_json::to_string(&envelope)
    }

    /// Parse a persisted envelope.
    ///
    /// Anything short of a flag, a non-empty token and a user reads back as
    /// logged out.
    pub fn from_persisted(raw: &str) -> Result<Self, serde_json::Error> {
        let envelope: PersistedEnvelope = serde_json::from_str(raw)?;
        let state = envelope.state;
        let session = match (state.is_logged_in, state.token, state.user) {
            (true, Some(token), Some(user)) => match AuthToken::new(token) {
                Ok(token) => Session::logged_in(token, user),
                Err(_) => Session::logged_out(),
            },
            _ => Session::logged_out(),
        };
        Ok(session)
    }
}

const PERSISTED_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedEnvelope {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    is_logged_in: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: 1,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_role_parse_ignores_case() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("instructor"), Some(Role::Instructor));
        assert_eq!(Role::parse(" Student "), Some(Role::Student));
        assert_eq!(Role::parse("DEAN"), None);
    }

    #[test]
    fn test_role_display_matches_wire_name() {
        assert_eq!(Role::Instructor.to_string(), "INSTRUCTOR");
        assert_eq!(Role::Student.slug(), "student");
    }

    #[test]
    fn test_role_serde_uses_uppercase() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"STUDENT\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_token_rejects_empty() {
        assert!(AuthToken::new("").is_err());
        assert!(AuthToken::new("   ").is_err());
        assert_eq!(AuthToken::new("tok").unwrap().as_str(), "tok");
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("secret-value").unwrap();
        assert!(!format!("{:?}", token).contains("secret-value"));
        assert_eq!(token.bearer(), "Bearer secret-value");
    }

    #[test]
    fn test_user_apply_changes_only_given_fields() {
        let mut user = admin();
        assert!(user.apply(UserUpdate::first_name("X")));
        assert_eq!(user.first_name, "X");
        assert_eq!(user.last_name, "B");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_user_apply_reports_no_change() {
        let mut user = admin();
        assert!(!user.apply(UserUpdate::names("A", "B")));
        assert!(!user.apply(UserUpdate::default()));
    }

    #[test]
    fn test_session_logged_out_has_nothing() {
        let session = Session::logged_out();
        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_persisted_round_trip() {
        let session = Session::logged_in(AuthToken::new("abc").unwrap(), admin());
        let raw = session.to_persisted().unwrap();
        assert!(raw.contains("\"isLoggedIn\":true"));
        assert!(raw.contains("\"firstName\":\"A\""));
        assert_eq!(Session::from_persisted(&raw).unwrap(), session);
    }

    #[test]
    fn test_persisted_partial_state_reads_logged_out() {
        let flag_without_user = r#"{"state":{"token":"abc","user":null,"isLoggedIn":true},"version":0}"#;
        assert!(!Session::from_persisted(flag_without_user).unwrap().is_logged_in());

        let user_without_flag = r#"{"state":{"token":"abc","user":{"id":1,"firstName":"A","lastName":"B","email":"a@b.com","role":"ADMIN"},"isLoggedIn":false},"version":0}"#;
        assert!(!Session::from_persisted(user_without_flag).unwrap().is_logged_in());

        let empty_token = r#"{"state":{"token":"","user":{"id":1,"firstName":"A","lastName":"B","email":"a@b.com","role":"ADMIN"},"isLoggedIn":true},"version":0}"#;
        assert!(!Session::from_persisted(empty_token).unwrap().is_logged_in());
    }

    #[test]
    fn test_persisted_garbage_is_an_error() {
        assert!(Session::from_persisted("not json").is_err());
    }
}
