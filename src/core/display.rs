//! Display rules shared by the pages: badge colours for grades, roles and
//! account status, plus avatar initials and select labels.

use crate::core::api::{CourseDto, StudentDto};
use crate::core::session::{Role, User};

/// Colour family of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    Purple,
    Gray,
}

impl BadgeTone {
    /// Tailwind classes for the badge background and text
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeTone::Green => "bg-green-100 text-green-800",
            BadgeTone::Blue => "bg-blue-100 text-blue-800",
            BadgeTone::Yellow => "bg-yellow-100 text-yellow-800",
            BadgeTone::Orange => "bg-orange-100 text-orange-800",
            BadgeTone::Red => "bg-red-100 text-red-800",
            BadgeTone::Purple => "bg-purple-100 text-purple-800",
            BadgeTone::Gray => "bg-gray-100 text-gray-500",
        }
    }
}

/// Badge colour of a letter grade; only the leading letter counts
pub fn grade_tone(grade: &str) -> BadgeTone {
    match grade.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('A') => BadgeTone::Green,
        Some('B') => BadgeTone::Blue,
        Some('C') => BadgeTone::Yellow,
        Some('D') => BadgeTone::Orange,
        _ => BadgeTone::Red,
    }
}

pub fn role_tone(role: Role) -> BadgeTone {
    match role {
        Role::Admin => BadgeTone::Purple,
        Role::Instructor => BadgeTone::Blue,
        Role::Student => BadgeTone::Green,
    }
}

/// Badge colour and label of an account's enabled flag
pub fn status_badge(enabled: bool) -> (BadgeTone, &'static str) {
    if enabled {
        (BadgeTone::Green, "Active")
    } else {
        (BadgeTone::Gray, "Inactive")
    }
}

/// Up to two uppercase letters for the avatar, "?" when both names are blank
pub fn initials(first_name: &str, last_name: &str) -> String {
    let letters: String = [first_name, last_name]
        .iter()
        .filter_map(|name| name.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

pub fn user_initials(user: &User) -> String {
    initials(&user.first_name, &user.last_name)
}

/// Score with one decimal, "-" when not graded yet
pub fn score_label(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:.1}", score),
        None => "-".to_string(),
    }
}

/// "Jane Doe (STU001)"
pub fn student_option_label(student: &StudentDto) -> String {
    format!("{} ({})", student.full_name(), student.student_id)
}

/// "CS101 - Intro to Programming"
pub fn course_option_label(course: &CourseDto) -> String {
    format!("{} - {}", course.code, course.title)
}

/// "Year 2", empty when the backend has no year on record
pub fn year_label(year: Option<i32>) -> String {
    year.map(|y| format!("Year {}", y)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_tones() {
        assert_eq!(grade_tone("A"), BadgeTone::Green);
        assert_eq!(grade_tone("A-"), BadgeTone::Green);
        assert_eq!(grade_tone("B+"), BadgeTone::Blue);
        assert_eq!(grade_tone("C"), BadgeTone::Yellow);
        assert_eq!(grade_tone("D+"), BadgeTone::Orange);
        assert_eq!(grade_tone("F"), BadgeTone::Red);
        assert_eq!(grade_tone(""), BadgeTone::Red);
    }

    #[test]
    fn test_grade_tone_classes() {
        assert_eq!(grade_tone("A").classes(), "bg-green-100 text-green-800");
        assert_eq!(grade_tone("F").classes(), "bg-red-100 text-red-800");
    }

    #[test]
    fn test_role_tones() {
        assert_eq!(role_tone(Role::Admin), BadgeTone::Purple);
        assert_eq!(role_tone(Role::Instructor), BadgeTone::Blue);
        assert_eq!(role_tone(Role::Student), BadgeTone::Green);
    }

    #[test]
    fn test_status_badge() {
        assert_eq!(status_badge(true), (BadgeTone::Green, "Active"));
        assert_eq!(status_badge(false).1, "Inactive");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ada", "lovelace"), "AL");
        assert_eq!(initials("Ada", ""), "A");
        assert_eq!(initials(" ", ""), "?");
        assert_eq!(initials("élodie", "ørsted"), "ÉØ");
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(Some(87.26)), "87.3");
        assert_eq!(score_label(Some(90.0)), "90.0");
        assert_eq!(score_label(None), "-");
    }

    #[test]
    fn test_option_labels() {
        let student: StudentDto = serde_json::from_str(
            r#"{"id":1,"studentId":"STU001","firstName":"Jane","lastName":"Doe","email":"j@uni.edu"}"#,
        )
        .unwrap();
        assert_eq!(student_option_label(&student), "Jane Doe (STU001)");

        let course: CourseDto =
            serde_json::from_str(r#"{"id":2,"code":"CS101","title":"Intro"}"#).unwrap();
        assert_eq!(course_option_label(&course), "CS101 - Intro");
    }

    #[test]
    fn test_year_label() {
        assert_eq!(year_label(Some(3)), "Year 3");
        assert_eq!(year_label(None), "");
    }
}
