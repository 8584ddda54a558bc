//! Stat cards shown on the role dashboards

use crate::core::api::DashboardStats;
use crate::core::session::Role;

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub caption: String,
    /// Icon file name under `/icons`
    pub icon: &'static str,
}

impl StatCard {
    fn new(title: &'static str, value: impl ToString, caption: impl Into<String>, icon: &'static str) -> Self {
        Self {
            title,
            value: value.to_string(),
            caption: caption.into(),
            icon,
        }
    }
}

/// Cards for `role`, in display order
pub fn stat_cards(role: Role, stats: &DashboardStats) -> Vec<StatCard> {
    match role {
        Role::Admin => vec![
            StatCard::new(
                "Total Students",
                stats.total_students.unwrap_or(0),
                "Registered students",
                "users",
            ),
            StatCard::new(
                "Total Courses",
                stats.total_courses.unwrap_or(0),
                format!("{} active", stats.extra_count("activeCourses")),
                "book-open",
            ),
            StatCard::new(
                "Instructors",
                stats.total_instructors.unwrap_or(0),
                "All departments",
                "graduation-cap",
            ),
            StatCard::new(
                "Avg Enrollment",
                format!("{:.1}", stats.extra_number("averageEnrollmentPerCourse")),
                "Per course",
                "clipboard-list",
            ),
        ],
        Role::Instructor => vec![
            StatCard::new(
                "My Courses",
                stats.total_courses.unwrap_or(0),
                "Active courses",
                "book-open",
            ),
            StatCard::new(
                "Total Students",
                stats.total_students.unwrap_or(0),
                "Across all courses",
                "users",
            ),
            StatCard::new(
                "Avg Class Size",
                average_class_size(stats),
                "Students per course",
                "graduation-cap",
            ),
        ],
        Role::Student => vec![
            StatCard::new(
                "Enrolled Courses",
                stats.enrolled_courses.unwrap_or(0),
                "This semester",
                "book-open",
            ),
            StatCard::new(
                "Completed Courses",
                stats.completed_courses.unwrap_or(0),
                "Total completed",
                "clipboard-list",
            ),
            StatCard::new("Current GPA", stats.gpa_label(), "Out of 4.0", "graduation-cap"),
        ],
    }
}

/// Students per course, rounded; 0 without courses
fn average_class_size(stats: &DashboardStats) -> u64 {
    match (stats.total_students, stats.total_courses) {
        (Some(students), Some(courses)) if courses > 0 => {
            (students as f64 / courses as f64).round() as u64
        }
        _ => 0,
    }
}
