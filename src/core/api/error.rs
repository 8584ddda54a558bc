//! API error types

use serde::Deserialize;

/// Login response validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("No token received from server")]
    MissingToken,

    #[error("Incomplete user data received from server (missing {0})")]
    IncompleteUser(&'static str),

    #[error("Unknown role `{0}` received from server")]
    UnknownRole(String),
}

/// HTTP layer error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// 401 from the backend
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Encode(String),

    #[error(transparent)]
    Login(#[from] LoginError),
}

impl ApiError {
    /// Build the error for a non-success response
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = ErrorBody::message_from(body);
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(message.unwrap_or_else(|| "Access denied".to_string())),
            _ => ApiError::Status {
                status,
                message: message.unwrap_or_else(|| default_status_message(status).to_string()),
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The record does not exist or is hidden from this user
    pub fn is_missing(&self) -> bool {
        matches!(self.status(), Some(403 | 404))
    }

    /// Text shown on the login form
    pub fn login_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Invalid email or password.".to_string(),
            ApiError::Forbidden(_) => "Access denied. Please contact administrator.".to_string(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(_) => "Login failed. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}

fn default_status_message(status: u16) -> &'static str {
    match status {
        400 => "Bad request",
        404 => "Not found",
        409 => "Conflict",
        500..=599 => "Server error",
        _ => "Request failed",
    }
}

/// Error payload: the backend sends either `error` or `message`
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn message_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed
            .error
            .or(parsed.message)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_records() {
        assert!(ApiError::from_status(404, "").is_missing());
        assert!(ApiError::from_status(403, "").is_missing());
        assert!(!ApiError::from_status(500, "").is_missing());
        assert!(!ApiError::Unauthorized.is_missing());
        assert!(!ApiError::Network("offline".to_string()).is_missing());
    }

    #[test]
    fn test_from_status_prefers_error_field() {
        let err = ApiError::from_status(400, r#"{"error":"Course is full","message":"ignored"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "Course is full".to_string()
            }
        );
    }

    #[test]
    fn test_from_status_falls_back_to_message_field() {
        let err = ApiError::from_status(404, r#"{"message":"User not found"}"#);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.login_message(), "User not found");
    }

    #[test]
    fn test_from_status_without_body() {
        let err = ApiError::from_status(500, "");
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                message: "Server error".to_string()
            }
        );
    }

    #[test]
    fn test_unauthorized_and_forbidden() {
        assert_eq!(ApiError::from_status(401, "{}"), ApiError::Unauthorized);
        assert!(matches!(
            ApiError::from_status(403, ""),
            ApiError::Forbidden(_)
        ));
    }

    #[test]
    fn test_login_messages() {
        assert_eq!(
            ApiError::Unauthorized.login_message(),
            "Invalid email or password."
        );
        assert_eq!(
            ApiError::Forbidden(String::new()).login_message(),
            "Access denied. Please contact administrator."
        );
        assert_eq!(
            ApiError::from(LoginError::MissingToken).login_message(),
            "No token received from server"
        );
    }
}
