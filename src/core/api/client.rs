//! HTTP client for the course-management backend
//!
//! [`ApiClient`] builds requests, decorates them with the session's bearer
//! token and turns responses into typed payloads. The wire itself sits
//! behind [`Transport`] so the same client runs against `gloo-net` in the
//! browser and a scripted transport in tests.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{
    CourseDto, DashboardStats, LoginRequest, LoginResponse, ResultDto, ResultRequest, StudentDto,
    UpdateUserRequest, UserDto,
};
use crate::core::config::Config;
use crate::core::session::{AuthToken, Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Json(String),
    Text(String),
}

impl RequestBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => "application/json",
            RequestBody::Text(_) => "text/plain",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RequestBody::Json(body) | RequestBody::Text(body) => body,
        }
    }
}

/// Fully built request, ready for a [`Transport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// `Authorization` header value, if the session holds a token
    pub authorization: Option<String>,
    pub body: Option<RequestBody>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and hands back whatever the server answered.
///
/// Only failures to get an answer at all are errors here; HTTP error
/// statuses come back as ordinary responses.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// The client's view of the session store
pub trait SessionHandle {
    /// `Authorization` header value for the current session
    fn authorization(&self) -> Option<String>;

    /// Called once for every 401 answered to a request that carried a token
    fn on_unauthorized(&self);
}

#[derive(Debug, Clone)]
pub struct ApiClient<T, H> {
    config: Config,
    transport: T,
    session: H,
}

impl<T: Transport, H: SessionHandle> ApiClient<T, H> {
    pub fn new(config: &Config, transport: T, session: H) -> Self {
        Self {
            config: Config {
                api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            },
            transport,
            session,
        }
    }

    // -- auth --

    /// Exchange credentials for a token and the signed-in user.
    ///
    /// Sent without a token whatever the session holds. The session store is
    /// not touched; the caller commits the result.
    pub async fn login(&self, email: &str, password: &str) -> Result<(AuthToken, User), ApiError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest {
            method: Method::Post,
            url: self.url("/auth/login"),
            authorization: None,
            body: Some(encode(&request)?),
        };
        let response: LoginResponse = decode(&self.dispatch(request).await?)?;
        Ok(response.into_credentials()?)
    }

    // -- users --

    pub async fn users(&self, role: Option<Role>) -> Result<Vec<UserDto>, ApiError> {
        match role {
            Some(role) => self.get_json(&format!("/users?role={}", role)).await,
            None => self.get_json("/users").await,
        }
    }

    pub async fn user(&self, id: i64) -> Result<UserDto, ApiError> {
        self.get_json(&format!("/users/{}", id)).await
    }

    /// Profile of the signed-in user, falling back to `/users/{id}`
    pub async fn profile(&self, user_id: i64) -> Result<UserDto, ApiError> {
        match self.get_json("/users/profile").await {
            Ok(profile) => Ok(profile),
            Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
            Err(_) => self.user(user_id).await,
        }
    }

    pub async fn update_user(
        &self,
        id: i64,
        request: &UpdateUserRequest,
    ) -> Result<UserDto, ApiError> {
        self.put_json(&format!("/users/{}", id), request).await
    }

    /// The backend takes the new password as a bare string body
    pub async fn change_password(&self, id: i64, new_password: &str) -> Result<(), ApiError> {
        let body = RequestBody::Text(new_password.to_string());
        self.execute(Method::Put, &format!("/users/{}/password", id), Some(body))
            .await
            .map(drop)
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", id)).await
    }

    // -- courses --

    pub async fn courses(&self) -> Result<Vec<CourseDto>, ApiError> {
        self.get_json("/courses").await
    }

    pub async fn available_courses(&self) -> Result<Vec<CourseDto>, ApiError> {
        self.get_json("/courses/available").await
    }

    pub async fn course(&self, id: i64) -> Result<CourseDto, ApiError> {
        self.get_json(&format!("/courses/{}", id)).await
    }

    pub async fn course_students(&self, id: i64) -> Result<Vec<StudentDto>, ApiError> {
        self.get_json(&format!("/courses/{}/students", id)).await
    }

    pub async fn delete_course(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/courses/{}", id)).await
    }

    // -- students --

    pub async fn students(&self) -> Result<Vec<StudentDto>, ApiError> {
        self.get_json("/students").await
    }

    pub async fn student(&self, id: i64) -> Result<StudentDto, ApiError> {
        self.get_json(&format!("/students/{}", id)).await
    }

    pub async fn student_courses(&self, id: i64) -> Result<Vec<CourseDto>, ApiError> {
        self.get_json(&format!("/students/{}/courses", id)).await
    }

    /// Enroll the signed-in student
    pub async fn enroll(&self, course_id: i64) -> Result<(), ApiError> {
        self.execute(Method::Post, &format!("/students/enroll/{}", course_id), None)
            .await
            .map(drop)
    }

    /// Drop a course for the signed-in student
    pub async fn drop_course(&self, course_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/students/drop/{}", course_id)).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/students/{}", id)).await
    }

    // -- results --

    pub async fn results(&self) -> Result<Vec<ResultDto>, ApiError> {
        self.get_json("/results").await
    }

    pub async fn instructor_results(&self) -> Result<Vec<ResultDto>, ApiError> {
        self.get_json("/results/instructor").await
    }

    pub async fn student_results(&self, student_id: i64) -> Result<Vec<ResultDto>, ApiError> {
        self.get_json(&format!("/results/student/{}", student_id))
            .await
    }

    pub async fn result(&self, id: i64) -> Result<ResultDto, ApiError> {
        self.get_json(&format!("/results/{}", id)).await
    }

    /// Record a new result; the backend computes total and grade
    pub async fn create_result(&self, request: &ResultRequest) -> Result<ResultDto, ApiError> {
        self.post_json("/results", request).await
    }

    pub async fn update_result(
        &self,
        id: i64,
        request: &ResultRequest,
    ) -> Result<ResultDto, ApiError> {
        self.put_json(&format!("/results/{}", id), request).await
    }

    pub async fn delete_result(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/results/{}", id)).await
    }

    // -- dashboard --

    pub async fn dashboard(&self, role: Role) -> Result<DashboardStats, ApiError> {
        self.get_json(&format!("/dashboard/{}", role.slug())).await
    }

    // -- plumbing --

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let response = self.execute(Method::Get, path, None).await?;
        decode(&response)
    }

    async fn post_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self.execute(Method::Post, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    async fn put_json<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let response = self.execute(Method::Put, path, Some(encode(body)?)).await?;
        decode(&response)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, None).await.map(drop)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            authorization: self.session.authorization(),
            body,
        };
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let authenticated = request.authorization.is_some();

        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let error = ApiError::from_status(response.status, &response.body);
        if error == ApiError::Unauthorized && authenticated {
            self.session.on_unauthorized();
        }
        Err(error)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_string(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
