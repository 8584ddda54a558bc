//! Request and response payloads of the course-management API
//!
//! Field names follow the backend's camelCase JSON. The backend serializes
//! unset fields as explicit `null`: optional values are `Option`, the rest
//! go through [`null_as_default`].

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::LoginError;
use crate::core::session::{AuthToken, Role, User};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful `POST /auth/login`.
///
/// Every field is optional on the wire; [`LoginResponse::into_credentials`]
/// decides whether the payload is complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl LoginResponse {
    /// Split into a token and a fully populated user
    pub fn into_credentials(self) -> Result<(AuthToken, User), LoginError> {
        let token = self
            .token
            .ok_or(LoginError::MissingToken)
            .and_then(|t| AuthToken::new(t).map_err(|_| LoginError::MissingToken))?;

        let id = self
            .id
            .filter(|id| *id > 0)
            .ok_or(LoginError::IncompleteUser("id"))?;
        let email = required(self.email, "email")?;
        let first_name = required(self.first_name, "firstName")?;
        let last_name = required(self.last_name, "lastName")?;
        let role = required(self.role, "role")?;
        let role = Role::parse(&role).ok_or(LoginError::UnknownRole(role))?;

        Ok((
            token,
            User {
                id,
                first_name,
                last_name,
                email,
                role,
            },
        ))
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, LoginError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(LoginError::IncompleteUser(field))
}

/// Decode `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Account as returned by `/users` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub has_student_profile: bool,
}

impl UserDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body of `PUT /users/{id}`.
///
/// The backend treats this as a full resource update, so role and enabled
/// flag are always sent along with the names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub enabled: bool,
}

impl UpdateUserRequest {
    /// Rename `profile`, keeping its role and enabled flag
    pub fn rename(
        profile: &UserDto,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
            role: profile.role,
            enabled: profile.enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credits: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capacity: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enrolled_students: i32,
    #[serde(default)]
    pub instructor_name: Option<String>,
    #[serde(default)]
    pub instructor_id: Option<i64>,
}

impl CourseDto {
    pub fn is_full(&self) -> bool {
        self.enrolled_students >= self.capacity
    }

    pub fn available_seats(&self) -> i32 {
        (self.capacity - self.enrolled_students).max(0)
    }

    /// "enrolled/capacity"
    pub fn seats_label(&self) -> String {
        format!("{}/{}", self.enrolled_students, self.capacity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i64,
    /// University-issued student number, e.g. "STU001"
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<CourseDto>,
    #[serde(default)]
    pub enrolled_courses: Option<i32>,
}

impl StudentDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Number of courses taken, from the count or the embedded list
    pub fn enrolled_count(&self) -> usize {
        self.enrolled_courses
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(self.courses.len())
    }

    /// Whether this is the signed-in student's own record
    pub fn belongs_to(&self, user: &User) -> bool {
        user.role == Role::Student && self.user_id == Some(user.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDto {
    pub id: i64,
    pub student_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub student_name: String,
    pub course_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_title: String,
    #[serde(default)]
    pub midterm_score: Option<f64>,
    #[serde(default)]
    pub final_score: Option<f64>,
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grade: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub semester: String,
}

/// Semesters offered by the result form, most recent last
pub const SEMESTERS: [&str; 4] = ["Fall 2023", "Spring 2024", "Summer 2024", "Fall 2024"];

/// Body of `POST /results` and `PUT /results/{id}`.
///
/// Every field is required by the backend; scores are 0-100 and `year` is
/// the student's year of study, 1-4.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub midterm_score: f64,
    pub final_score: f64,
    pub year: i32,
    pub semester: String,
}

/// Numbers shown on the role dashboards; each role fills a different subset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_students: Option<u64>,
    #[serde(default)]
    pub total_courses: Option<u64>,
    #[serde(default)]
    pub total_instructors: Option<u64>,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub enrolled_courses: Option<u32>,
    #[serde(default)]
    pub completed_courses: Option<u32>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_stats: HashMap<String, serde_json::Value>,
}

impl DashboardStats {
    /// Integer entry of `additionalStats`, 0 when absent
    pub fn extra_count(&self, key: &str) -> u64 {
        self.additional_stats
            .get(key)
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0)
    }

    /// Numeric entry of `additionalStats`, 0.0 when absent
    pub fn extra_number(&self, key: &str) -> f64 {
        self.additional_stats
            .get(key)
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0)
    }

    pub fn gpa_label(&self) -> String {
        self.gpa
            .map(|gpa| format!("{:.2}", gpa))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> LoginResponse {
        serde_json::from_str(
            r#"{"token":"tok123","id":1,"email":"a@b.com","firstName":"A","lastName":"B","role":"ADMIN"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_login_response_into_credentials() {
        let (token, user) = full_response().into_credentials().unwrap();
        assert_eq!(token.as_str(), "tok123");
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn test_login_response_missing_token() {
        let mut response = full_response();
        response.token = None;
        assert_eq!(response.into_credentials(), Err(LoginError::MissingToken));

        let mut response = full_response();
        response.token = Some(String::new());
        assert_eq!(response.into_credentials(), Err(LoginError::MissingToken));
    }

    #[test]
    fn test_login_response_missing_user_fields() {
        let mut response = full_response();
        response.last_name = None;
        assert_eq!(
            response.into_credentials(),
            Err(LoginError::IncompleteUser("lastName"))
        );

        let mut response = full_response();
        response.id = Some(0);
        assert_eq!(
            response.into_credentials(),
            Err(LoginError::IncompleteUser("id"))
        );

        let mut response = full_response();
        response.email = Some("  ".to_string());
        assert_eq!(
            response.into_credentials(),
            Err(LoginError::IncompleteUser("email"))
        );
    }

    #[test]
    fn test_login_response_unknown_role() {
        let mut response = full_response();
        response.role = Some("DEAN".to_string());
        assert_eq!(
            response.into_credentials(),
            Err(LoginError::UnknownRole("DEAN".to_string()))
        );
    }

    #[test]
    fn test_update_request_keeps_role_and_enabled() {
        let profile = UserDto {
            id: 3,
            email: "i@uni.edu".to_string(),
            first_name: "Old".to_string(),
            last_name: "Name".to_string(),
            role: Role::Instructor,
            enabled: true,
            has_student_profile: false,
        };
        let request = UpdateUserRequest::rename(&profile, " New ", "Name");
        assert_eq!(request.first_name, "New");
        assert_eq!(request.role, Role::Instructor);
        assert!(request.enabled);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "New");
        assert_eq!(json["role"], "INSTRUCTOR");
        assert_eq!(json["enabled"], true);
    }

    #[test]
    fn test_course_seats() {
        let course: CourseDto = serde_json::from_str(
            r#"{"id":1,"code":"CS101","title":"Intro","capacity":30,"enrolledStudents":30,"instructorName":null}"#,
        )
        .unwrap();
        assert!(course.is_full());
        assert_eq!(course.available_seats(), 0);
        assert_eq!(course.seats_label(), "30/30");
        assert!(course.description.is_none());
    }

    #[test]
    fn test_result_accepts_null_scores() {
        let result: ResultDto = serde_json::from_str(
            r#"{"id":4,"studentId":2,"studentName":"Jane Doe","courseId":1,"courseCode":"CS101","courseTitle":"Intro","midtermScore":null,"finalScore":80.0,"totalScore":null,"grade":"B+","year":2,"semester":"FALL"}"#,
        )
        .unwrap();
        assert_eq!(result.midterm_score, None);
        assert_eq!(result.final_score, Some(80.0));
        assert_eq!(result.grade, "B+");
    }

    #[test]
    fn test_course_list_with_null_counts() {
        let courses: Vec<CourseDto> = serde_json::from_str(
            r#"[{"id":1,"code":"CS101","title":"Intro","description":null,"credits":null,"capacity":null,"enrolledStudents":null,"instructorName":null,"instructorId":null}]"#,
        )
        .unwrap();
        assert_eq!(courses[0].capacity, 0);
        assert_eq!(courses[0].enrolled_students, 0);
        assert_eq!(courses[0].seats_label(), "0/0");
    }

    #[test]
    fn test_student_list_with_null_department_and_courses() {
        let students: Vec<StudentDto> = serde_json::from_str(
            r#"[{"id":7,"studentId":"STU007","firstName":"Ada","lastName":"Lovelace","email":"ada@uni.edu","department":null,"year":null,"userId":12,"courses":null,"enrolledCourses":0}]"#,
        )
        .unwrap();
        assert_eq!(students[0].department, "");
        assert!(students[0].courses.is_empty());
        assert_eq!(students[0].user_id, Some(12));
        assert_eq!(students[0].full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_student_ownership() {
        let student: StudentDto = serde_json::from_str(
            r#"{"id":3,"studentId":"STU003","firstName":"Sam","lastName":"Lee","email":"sam@uni.edu","userId":9,"courses":[{"id":1,"code":"CS101","title":"Intro"}]}"#,
        )
        .unwrap();
        let mut user = User {
            id: 9,
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: "sam@uni.edu".to_string(),
            role: Role::Student,
        };
        assert!(student.belongs_to(&user));
        assert_eq!(student.enrolled_count(), 1);

        user.role = Role::Admin;
        assert!(!student.belongs_to(&user));
        user.role = Role::Student;
        user.id = 3;
        assert!(!student.belongs_to(&user));
    }

    #[test]
    fn test_result_with_null_grade_and_semester() {
        let result: ResultDto = serde_json::from_str(
            r#"{"id":4,"studentId":2,"studentName":null,"courseId":1,"courseCode":"CS101","courseTitle":null,"midtermScore":70.0,"finalScore":null,"totalScore":null,"grade":null,"year":null,"semester":null}"#,
        )
        .unwrap();
        assert_eq!(result.grade, "");
        assert_eq!(result.semester, "");
        assert_eq!(result.student_name, "");
        assert_eq!(result.midterm_score, Some(70.0));
    }

    #[test]
    fn test_student_dashboard_with_null_extras() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"totalStudents":null,"totalCourses":null,"totalInstructors":null,"totalResults":null,"enrolledCourses":3,"completedCourses":1,"gpa":3.2,"additionalStats":null}"#,
        )
        .unwrap();
        assert!(stats.additional_stats.is_empty());
        assert_eq!(stats.extra_count("activeCourses"), 0);
        assert_eq!(stats.enrolled_courses, Some(3));
        assert_eq!(stats.gpa_label(), "3.20");
    }

    #[test]
    fn test_result_request_wire_names() {
        let request = ResultRequest {
            student_id: 2,
            course_id: 5,
            midterm_score: 81.5,
            final_score: 90.0,
            year: 2,
            semester: SEMESTERS[3].to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["studentId"], 2);
        assert_eq!(json["courseId"], 5);
        assert_eq!(json["midtermScore"], 81.5);
        assert_eq!(json["finalScore"], 90.0);
        assert_eq!(json["semester"], "Fall 2024");
    }

    #[test]
    fn test_dashboard_stats_extras() {
        let stats: DashboardStats = serde_json::from_str(
            r#"{"totalCourses":12,"gpa":3.456,"additionalStats":{"activeCourses":9}}"#,
        )
        .unwrap();
        assert_eq!(stats.total_courses, Some(12));
        assert_eq!(stats.extra_count("activeCourses"), 9);
        assert_eq!(stats.extra_count("missing"), 0);
        assert_eq!(stats.extra_number("activeCourses"), 9.0);
        assert_eq!(stats.gpa_label(), "3.46");
        assert_eq!(DashboardStats::default().gpa_label(), "N/A");
    }
}
