//! Contract with the course-management REST backend

mod client;
mod error;
mod models;

pub use client::{
    ApiClient, ApiRequest, ApiResponse, Method, RequestBody, SessionHandle, Transport,
};
pub use error::{ApiError, LoginError};
pub use models::{
    CourseDto, DashboardStats, LoginRequest, LoginResponse, ResultDto, ResultRequest, SEMESTERS,
    StudentDto, UpdateUserRequest, UserDto,
};
