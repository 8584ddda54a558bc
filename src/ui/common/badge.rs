use leptos::prelude::*;

use crate::core::display::{BadgeTone, grade_tone, role_tone, status_badge};
use crate::core::session::Role;

/// Badge size options
#[derive(Clone, Copy, PartialEq)]
pub enum BadgeSize {
    Small,
    Medium,
    Large,
}

impl BadgeSize {
    fn class(&self) -> &'static str {
        match self {
            BadgeSize::Small => "px-2 py-0.5 text-xs",
            BadgeSize::Medium => "px-2.5 py-0.5 text-sm",
            BadgeSize::Large => "px-4 py-2 text-lg",
        }
    }
}

/// Pill-shaped label coloured by tone
#[component]
pub fn Badge(
    /// Badge content
    children: Children,
    /// Colour family
    #[prop(default = BadgeTone::Gray)]
    tone: BadgeTone,
    /// Size of the badge
    #[prop(default = BadgeSize::Medium)]
    size: BadgeSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center rounded-full font-medium {} {} {}",
        tone.classes(),
        size.class(),
        class
    );

    view! { <span class=classes.trim_end().to_string()>{children()}</span> }
}

/// Letter grade coloured by band
#[component]
pub fn GradeBadge(
    grade: String,
    #[prop(default = BadgeSize::Medium)]
    size: BadgeSize,
) -> impl IntoView {
    let tone = grade_tone(&grade);
    let label = if grade.trim().is_empty() {
        "-".to_string()
    } else {
        grade
    };

    view! { <Badge tone=tone size=size>{label}</Badge> }
}

#[component]
pub fn RoleBadge(role: Role) -> impl IntoView {
    view! { <Badge tone=role_tone(role)>{role.as_str()}</Badge> }
}

/// Active / inactive account marker
#[component]
pub fn StatusBadge(enabled: bool) -> impl IntoView {
    let (tone, label) = status_badge(enabled);
    view! { <Badge tone=tone>{label}</Badge> }
}
