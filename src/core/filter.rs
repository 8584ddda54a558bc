//! List searching and sorting used by the table pages

use std::cmp::Ordering;

use crate::core::api::{CourseDto, ResultDto, StudentDto, UserDto};

/// Rows that can be matched against a free-text search box
pub trait Searchable {
    /// Whether any searchable field contains `needle`, which is already lowercase
    fn matches(&self, needle: &str) -> bool;
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Searchable for CourseDto {
    fn matches(&self, needle: &str) -> bool {
        contains(&self.title, needle)
            || contains(&self.code, needle)
            || self
                .instructor_name
                .as_deref()
                .is_some_and(|name| contains(name, needle))
    }
}

impl Searchable for StudentDto {
    fn matches(&self, needle: &str) -> bool {
        contains(&self.first_name, needle)
            || contains(&self.last_name, needle)
            || contains(&self.student_id, needle)
            || contains(&self.department, needle)
    }
}

impl Searchable for UserDto {
    fn matches(&self, needle: &str) -> bool {
        contains(&self.first_name, needle)
            || contains(&self.last_name, needle)
            || contains(&self.email, needle)
            || contains(self.role.as_str(), needle)
    }
}

/// Rows matching `term`, case-insensitively. A blank term keeps everything.
pub fn filter_by_term<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(&needle)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sortable columns of the results table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultColumn {
    #[default]
    Id,
    StudentName,
    CourseCode,
    MidtermScore,
    FinalScore,
    TotalScore,
    Grade,
    Semester,
}

impl ResultColumn {
    fn compare(self, a: &ResultDto, b: &ResultDto) -> Ordering {
        match self {
            ResultColumn::Id => a.id.cmp(&b.id),
            ResultColumn::StudentName => a.student_name.cmp(&b.student_name),
            ResultColumn::CourseCode => a.course_code.cmp(&b.course_code),
            ResultColumn::MidtermScore => compare_scores(a.midterm_score, b.midterm_score),
            ResultColumn::FinalScore => compare_scores(a.final_score, b.final_score),
            ResultColumn::TotalScore => compare_scores(a.total_score, b.total_score),
            ResultColumn::Grade => a.grade.cmp(&b.grade),
            ResultColumn::Semester => (a.year, &a.semester).cmp(&(b.year, &b.semester)),
        }
    }
}

/// Ungraded scores sort before any number
fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Column and direction of a sortable table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultSort {
    pub column: ResultColumn,
    pub direction: SortDirection,
}

impl ResultSort {
    /// Clicking the active column flips direction; another column starts ascending
    pub fn toggle(self, column: ResultColumn) -> Self {
        if self.column == column {
            Self {
                column,
                direction: self.direction.flip(),
            }
        } else {
            Self {
                column,
                direction: SortDirection::Ascending,
            }
        }
    }

    /// Arrow shown next to `column` in the header
    pub fn indicator(&self, column: ResultColumn) -> &'static str {
        match (self.column == column, self.direction) {
            (false, _) => "",
            (true, SortDirection::Ascending) => "▲",
            (true, SortDirection::Descending) => "▼",
        }
    }

    pub fn sort(&self, results: &mut [ResultDto]) {
        results.sort_by(|a, b| self.direction.apply(self.column.compare(a, b)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Role;

    fn course(code: &str, title: &str, instructor: Option<&str>) -> CourseDto {
        CourseDto {
            id: 1,
            code: code.to_string(),
            title: title.to_string(),
            description: None,
            credits: Some(3),
            capacity: 30,
            enrolled_students: 0,
            instructor_name: instructor.map(str::to_string),
            instructor_id: None,
        }
    }

    fn result(id: i64, student: &str, total: Option<f64>) -> ResultDto {
        ResultDto {
            id,
            student_id: id,
            student_name: student.to_string(),
            course_id: 1,
            course_code: "CS101".to_string(),
            course_title: "Intro".to_string(),
            midterm_score: None,
            final_score: None,
            total_score: total,
            grade: "B".to_string(),
            year: Some(1),
            semester: "FALL".to_string(),
        }
    }

    #[test]
    fn test_course_search_fields() {
        let courses = vec![
            course("CS101", "Intro to Programming", Some("Grace Hopper")),
            course("MA201", "Linear Algebra", None),
        ];
        assert_eq!(filter_by_term(&courses, "cs1").len(), 1);
        assert_eq!(filter_by_term(&courses, "ALGEBRA").len(), 1);
        assert_eq!(filter_by_term(&courses, "hopper")[0].code, "CS101");
        assert!(filter_by_term(&courses, "physics").is_empty());
    }

    #[test]
    fn test_blank_term_keeps_all() {
        let courses = vec![course("CS101", "Intro", None)];
        assert_eq!(filter_by_term(&courses, "   ").len(), 1);
    }

    #[test]
    fn test_user_search_matches_role() {
        let users = vec![UserDto {
            id: 1,
            email: "grace@uni.edu".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            role: Role::Instructor,
            enabled: true,
            has_student_profile: false,
        }];
        assert_eq!(filter_by_term(&users, "instr").len(), 1);
        assert_eq!(filter_by_term(&users, "UNI.EDU").len(), 1);
    }

    #[test]
    fn test_sort_toggle() {
        let sort = ResultSort::default();
        let sort = sort.toggle(ResultColumn::StudentName);
        assert_eq!(sort.direction, SortDirection::Ascending);
        let sort = sort.toggle(ResultColumn::StudentName);
        assert_eq!(sort.direction, SortDirection::Descending);
        assert_eq!(sort.indicator(ResultColumn::StudentName), "▼");
        assert_eq!(sort.indicator(ResultColumn::Id), "");
        let sort = sort.toggle(ResultColumn::Grade);
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_scores_with_missing_values() {
        let mut results = vec![
            result(1, "Bob", Some(70.0)),
            result(2, "Amy", None),
            result(3, "Cal", Some(95.5)),
        ];
        let sort = ResultSort::default().toggle(ResultColumn::TotalScore);
        sort.sort(&mut results);
        let ids: Vec<i64> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        sort.toggle(ResultColumn::TotalScore).sort(&mut results);
        let ids: Vec<i64> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut results = vec![result(1, "Bob", None), result(2, "Amy", None)];
        ResultSort::default()
            .toggle(ResultColumn::StudentName)
            .sort(&mut results);
        assert_eq!(results[0].student_name, "Amy");
    }
}
