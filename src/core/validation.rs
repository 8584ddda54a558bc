//! Validation module for login, profile and result forms
//!
//! Mirrors the rules the backend enforces so obviously bad input never
//! leaves the browser.

use crate::core::api::{ResultDto, ResultRequest, SEMESTERS};

/// Minimum password length accepted by the login and password forms
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum length of a first or last name
pub const MIN_NAME_LENGTH: usize = 2;

/// Inclusive bounds of a midterm or final score
pub const SCORE_RANGE: (f64, f64) = (0.0, 100.0);

/// Inclusive bounds of a student's year of study
pub const YEAR_RANGE: (i32, i32) = (1, 4);

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field left blank
    Required { field: &'static str },
    /// Email without `@` or domain dot
    InvalidEmail,
    /// Password shorter than the minimum
    PasswordTooShort { min: usize },
    /// Name shorter than the minimum
    NameTooShort { field: &'static str, min: usize },
    /// New password and confirmation differ
    PasswordMismatch,
    /// Not a number at all
    NotANumber { field: &'static str },
    /// Number outside the accepted bounds
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required { field } => write!(f, "{} is required", field),
            ValidationError::InvalidEmail => write!(f, "Invalid email address"),
            ValidationError::PasswordTooShort { min } => {
                write!(f, "Password must be at least {} characters", min)
            }
            ValidationError::NameTooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
            ValidationError::PasswordMismatch => write!(f, "Passwords don't match"),
            ValidationError::NotANumber { field } => write!(f, "{} must be a number", field),
            ValidationError::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::Required { field: "Email" });
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    if local.is_empty() || !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.')
    {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required { field: "Password" });
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if value.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort {
            field,
            min: MIN_NAME_LENGTH,
        });
    }
    Ok(())
}

/// Validate the three fields of the change-password form
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if current.is_empty() {
        return Err(ValidationError::Required {
            field: "Current password",
        });
    }
    validate_password(new)?;
    if new != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn validate_score(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    let score: f64 = value
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;
    let (min, max) = SCORE_RANGE;
    if !score.is_finite() || score < min || score > max {
        return Err(ValidationError::OutOfRange {
            field,
            min: min as i32,
            max: max as i32,
        });
    }
    Ok(score)
}

pub fn validate_year(value: &str) -> Result<i32, ValidationError> {
    let field = "Year";
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    let year: i32 = value
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;
    let (min, max) = YEAR_RANGE;
    if !(min..=max).contains(&year) {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(year)
}

/// Raw input of the result form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultDraft {
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
    pub midterm_score: String,
    pub final_score: String,
    pub year: String,
    pub semester: String,
}

impl ResultDraft {
    /// Empty form for a new result, on the latest semester
    pub fn new() -> Self {
        Self {
            semester: SEMESTERS[SEMESTERS.len() - 1].to_string(),
            ..Self::default()
        }
    }

    /// Form prefilled from a recorded result
    pub fn for_result(result: &ResultDto) -> Self {
        let score = |s: Option<f64>| s.map(|s| s.to_string()).unwrap_or_default();
        Self {
            student_id: Some(result.student_id),
            course_id: Some(result.course_id),
            midterm_score: score(result.midterm_score),
            final_score: score(result.final_score),
            year: result.year.map(|y| y.to_string()).unwrap_or_default(),
            semester: if result.semester.is_empty() {
                Self::new().semester
            } else {
                result.semester.clone()
            },
        }
    }
}

/// Check every field of the result form, reporting the first problem
pub fn validate_result(draft: &ResultDraft) -> Result<ResultRequest, ValidationError> {
    let student_id = draft
        .student_id
        .ok_or(ValidationError::Required { field: "Student" })?;
    let course_id = draft
        .course_id
        .ok_or(ValidationError::Required { field: "Course" })?;
    let midterm_score = validate_score("Midterm score", &draft.midterm_score)?;
    let final_score = validate_score("Final score", &draft.final_score)?;
    let year = validate_year(&draft.year)?;
    let semester = draft.semester.trim();
    if semester.is_empty() {
        return Err(ValidationError::Required { field: "Semester" });
    }

    Ok(ResultRequest {
        student_id,
        course_id,
        midterm_score,
        final_score,
        year,
        semester: semester.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("admin@university.edu").is_ok());
        assert!(validate_email("  a.b@c.io ").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(
            validate_email(""),
            Err(ValidationError::Required { field: "Email" })
        );
        assert_eq!(validate_email("admin"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@uni.edu"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("admin@localhost"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("admin@uni."), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("admin123").is_ok());
        assert_eq!(
            validate_password("12345"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
        assert_eq!(
            validate_password(""),
            Err(ValidationError::Required { field: "Password" })
        );
    }

    #[test]
    fn test_name_length() {
        assert!(validate_name("First name", "Al").is_ok());
        assert_eq!(
            validate_name("First name", "A"),
            Err(ValidationError::NameTooShort {
                field: "First name",
                min: 2
            })
        );
        assert_eq!(
            validate_name("Last name", "   "),
            Err(ValidationError::Required { field: "Last name" })
        );
    }

    #[test]
    fn test_password_change() {
        assert!(validate_password_change("old", "newpass", "newpass").is_ok());
        assert_eq!(
            validate_password_change("", "newpass", "newpass"),
            Err(ValidationError::Required {
                field: "Current password"
            })
        );
        assert_eq!(
            validate_password_change("old", "newpass", "newpas"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_password_change("old", "short", "short"),
            Err(ValidationError::PasswordTooShort { min: 6 })
        );
    }

    fn draft() -> ResultDraft {
        ResultDraft {
            student_id: Some(3),
            course_id: Some(4),
            midterm_score: "72.5".to_string(),
            final_score: " 88 ".to_string(),
            year: "2".to_string(),
            semester: "Fall 2024".to_string(),
        }
    }

    #[test]
    fn test_score_bounds() {
        assert_eq!(validate_score("Midterm score", "0"), Ok(0.0));
        assert_eq!(validate_score("Midterm score", "100"), Ok(100.0));
        assert_eq!(
            validate_score("Final score", "100.5"),
            Err(ValidationError::OutOfRange {
                field: "Final score",
                min: 0,
                max: 100
            })
        );
        assert_eq!(
            validate_score("Final score", "-1"),
            Err(ValidationError::OutOfRange {
                field: "Final score",
                min: 0,
                max: 100
            })
        );
        assert_eq!(
            validate_score("Final score", "abc"),
            Err(ValidationError::NotANumber {
                field: "Final score"
            })
        );
        assert!(validate_score("Final score", "NaN").is_err());
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(validate_year("1"), Ok(1));
        assert_eq!(validate_year("4"), Ok(4));
        assert_eq!(
            validate_year("5"),
            Err(ValidationError::OutOfRange {
                field: "Year",
                min: 1,
                max: 4
            })
        );
        assert_eq!(
            validate_year(""),
            Err(ValidationError::Required { field: "Year" })
        );
    }

    #[test]
    fn test_result_draft_into_request() {
        let request = validate_result(&draft()).unwrap();
        assert_eq!(request.student_id, 3);
        assert_eq!(request.midterm_score, 72.5);
        assert_eq!(request.final_score, 88.0);
        assert_eq!(request.year, 2);
        assert_eq!(request.semester, "Fall 2024");
    }

    #[test]
    fn test_result_draft_for_existing_result() {
        let result: ResultDto = serde_json::from_str(
            r#"{"id":8,"studentId":3,"courseId":4,"midtermScore":72.5,"finalScore":null,"totalScore":null,"grade":null,"year":2,"semester":null}"#,
        )
        .unwrap();
        let draft = ResultDraft::for_result(&result);
        assert_eq!(draft.student_id, Some(3));
        assert_eq!(draft.midterm_score, "72.5");
        assert_eq!(draft.final_score, "");
        assert_eq!(draft.year, "2");
        assert_eq!(draft.semester, "Fall 2024");
        assert_eq!(ResultDraft::new().semester, "Fall 2024");
    }

    #[test]
    fn test_result_draft_missing_selection() {
        let mut missing_course = draft();
        missing_course.course_id = None;
        assert_eq!(
            validate_result(&missing_course),
            Err(ValidationError::Required { field: "Course" })
        );

        let mut blank_semester = draft();
        blank_semester.semester = " ".to_string();
        assert_eq!(
            validate_result(&blank_semester),
            Err(ValidationError::Required { field: "Semester" })
        );
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::PasswordTooShort { min: 6 }.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords don't match"
        );
        assert_eq!(
            ValidationError::OutOfRange {
                field: "Year",
                min: 1,
                max: 4
            }
            .to_string(),
            "Year must be between 1 and 4"
        );
    }
}
