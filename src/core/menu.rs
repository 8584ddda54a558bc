//! Sidebar navigation entries and the roles allowed to see them

use crate::core::session::Role;

const EVERYONE: &[Role] = &[Role::Admin, Role::Instructor, Role::Student];
const STAFF: &[Role] = &[Role::Admin, Role::Instructor];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub href: &'static str,
    /// Icon file name under `/icons`
    pub icon: &'static str,
    pub roles: &'static [Role],
    /// Roles allowed on the detail pages below `href`
    pub detail_roles: &'static [Role],
}

impl MenuItem {
    pub fn visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether `role` may open `path`, one of this entry's pages
    pub fn admits(&self, role: Role, path: &str) -> bool {
        if path == self.href {
            self.visible_to(role)
        } else {
            self.detail_roles.contains(&role)
        }
    }

    /// Whether `path` is this entry's page or one of its sub-pages
    pub fn is_active(&self, path: &str) -> bool {
        path == self.href
            || path
                .strip_prefix(self.href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const MENU: [MenuItem; 6] = [
    MenuItem {
        title: "Dashboard",
        href: "/dashboard",
        icon: "layout-dashboard",
        roles: EVERYONE,
        detail_roles: EVERYONE,
    },
    MenuItem {
        title: "Courses",
        href: "/courses",
        icon: "book-open",
        roles: EVERYONE,
        detail_roles: EVERYONE,
    },
    MenuItem {
        title: "Students",
        href: "/students",
        icon: "graduation-cap",
        roles: STAFF,
        detail_roles: EVERYONE,
    },
    MenuItem {
        title: "Results",
        href: "/results",
        icon: "clipboard-list",
        roles: EVERYONE,
        detail_roles: EVERYONE,
    },
    MenuItem {
        title: "Users",
        href: "/users",
        icon: "users",
        roles: ADMIN_ONLY,
        detail_roles: ADMIN_ONLY,
    },
    MenuItem {
        title: "Profile",
        href: "/profile",
        icon: "user",
        roles: EVERYONE,
        detail_roles: EVERYONE,
    },
];

/// Entries shown to `role`, in menu order
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    MENU.into_iter().filter(|item| item.visible_to(role)).collect()
}

/// Whether `role` may open the page at `path`.
///
/// Paths outside the menu are not restricted here. Students reach their own
/// record under `/students/{id}` though the list itself is staff only.
pub fn can_access(role: Role, path: &str) -> bool {
    MENU.iter()
        .find(|item| item.is_active(path))
        .is_none_or(|item| item.admits(role, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(role: Role) -> Vec<&'static str> {
        menu_for(role).into_iter().map(|item| item.title).collect()
    }

    #[test]
    fn test_admin_menu() {
        assert_eq!(
            titles(Role::Admin),
            vec!["Dashboard", "Courses", "Students", "Results", "Users", "Profile"]
        );
    }

    #[test]
    fn test_instructor_menu() {
        assert_eq!(
            titles(Role::Instructor),
            vec!["Dashboard", "Courses", "Students", "Results", "Profile"]
        );
    }

    #[test]
    fn test_student_menu() {
        assert_eq!(
            titles(Role::Student),
            vec!["Dashboard", "Courses", "Results", "Profile"]
        );
    }

    #[test]
    fn test_active_matches_sub_pages() {
        let courses = MENU[1];
        assert!(courses.is_active("/courses"));
        assert!(courses.is_active("/courses/12"));
        assert!(!courses.is_active("/courses-archive"));
        assert!(!courses.is_active("/dashboard"));
    }

    #[test]
    fn test_can_access() {
        assert!(can_access(Role::Admin, "/users"));
        assert!(!can_access(Role::Student, "/users"));
        assert!(!can_access(Role::Student, "/students"));
        assert!(can_access(Role::Student, "/profile"));
        assert!(can_access(Role::Student, "/somewhere-else"));
    }

    #[test]
    fn test_detail_pages() {
        assert!(can_access(Role::Student, "/students/4"));
        assert!(can_access(Role::Instructor, "/students/4"));
        assert!(can_access(Role::Student, "/courses/2"));
        assert!(can_access(Role::Student, "/results/8"));
        assert!(!can_access(Role::Instructor, "/users/3"));
    }
}
