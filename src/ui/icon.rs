use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file name under /icons without .svg)
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const BOOK_OPEN: &str = "book-open";
    pub const CHECK: &str = "check";
    pub const CLIPBOARD_LIST: &str = "clipboard-list";
    pub const GRADUATION_CAP: &str = "graduation-cap";
    pub const LAYOUT_DASHBOARD: &str = "layout-dashboard";
    pub const LOG_OUT: &str = "log-out";
    pub const PENCIL: &str = "pencil";
    pub const PLUS: &str = "plus";
    pub const SEARCH: &str = "search";
    pub const TRASH: &str = "trash";
    pub const USER: &str = "user";
    pub const USERS: &str = "users";
    pub const X: &str = "x";
}
