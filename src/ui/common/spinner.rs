use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "h-4 w-4 border-2",
            SpinnerSize::Medium => "h-8 w-8 border-2",
            SpinnerSize::Large => "h-12 w-12 border-4",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
    /// Whether to center the spinner in its container
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let container_class = if centered {
        "flex flex-col items-center justify-center gap-3 py-12"
    } else {
        "inline-flex items-center gap-2"
    };

    view! {
        <div class=container_class>
            <div
                class=format!(
                    "animate-spin rounded-full border-blue-600 border-t-transparent {}",
                    size.class()
                )
                role="status"
                aria-live="polite"
            >
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <div class="text-sm text-gray-500">{label.clone()}</div>
            })}
        </div>
    }
}

/// Simple loading spinner with default settings
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! { <Spinner size=SpinnerSize::Medium label=message centered=true/> }
}

/// Full-screen spinner shown while the session is being restored
#[component]
pub fn FullPageSpinner() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <Spinner size=SpinnerSize::Large/>
        </div>
    }
}
