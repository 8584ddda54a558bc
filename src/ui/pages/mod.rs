//! Application pages module
//!
//! - Login page
//! - Dashboard (per-role statistics)
//! - Courses, Students, Results and Users lists
//! - Course, student and result detail pages
//! - Result entry form
//! - Profile page

mod course_detail;
mod courses;
mod dashboard;
mod login;
mod not_found;
mod profile;
mod result_detail;
mod result_form;
mod results;
mod student_detail;
mod students;
mod users;

pub use course_detail::CourseDetailPage;
pub use courses::CoursesPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use result_detail::ResultDetailPage;
pub use results::ResultsPage;
pub use student_detail::StudentDetailPage;
pub use students::StudentsPage;
pub use users::UsersPage;
