//! Dashboard page component
//!
//! Welcome banner plus the role-specific statistics cards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::dashboard::{StatCard, stat_cards};
use crate::core::session::Role;
use crate::ui::api::portal_client;
use crate::ui::common::{ErrorMessage, LoadingSpinner};
use crate::ui::icon::Icon;
use crate::ui::session::use_session_context;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session_context();

    let cards = RwSignal::new(Vec::<StatCard>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let first_name = move || session.user().map(|u| u.first_name).unwrap_or_default();

    // Load stats for the current role
    Effect::new(move |_| {
        let Some(role) = session.role() else {
            return;
        };
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match portal_client(session).dashboard(role).await {
                Ok(stats) => cards.set(stat_cards(role, &stats)),
                Err(e) => {
                    leptos::logging::warn!("Failed to load dashboard stats: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">
                    {move || format!("Welcome back, {}!", first_name())}
                </h1>
                <p class="text-gray-600 mt-1">"Here's what's happening in your academic journey"</p>
            </div>

            <ErrorMessage error=error/>

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner message="Loading statistics...".to_string()/> }.into_any()
                } else {
                    view! {
                        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                            <For
                                each=move || cards.get()
                                key=|card| card.title
                                children=move |card| view! { <StatCardView card=card/> }
                            />
                        </div>
                    }.into_any()
                }
            }}

            <Show when=move || session.role() == Some(Role::Instructor)>
                <QuickActions/>
            </Show>
        </div>
    }
}

/// One statistics card
#[component]
fn StatCardView(card: StatCard) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-gray-200 p-5">
            <div class="flex items-center justify-between pb-2">
                <span class="text-sm font-medium text-gray-600">{card.title}</span>
                <Icon name=card.icon class="h-4 w-4 text-gray-400"/>
            </div>
            <div class="text-2xl font-bold text-gray-900">{card.value}</div>
            <p class="text-xs text-gray-500">{card.caption}</p>
        </div>
    }
}

/// Shortcuts for instructors
#[component]
fn QuickActions() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-gray-200 p-5">
            <h2 class="text-lg font-semibold text-gray-900 mb-4">"Quick Actions"</h2>
            <div class="flex flex-wrap gap-2">
                <A
                    href="/courses"
                    attr:class="px-4 py-2 rounded-lg border border-gray-300 text-sm text-gray-700 hover:bg-gray-50"
                >
                    "View My Courses"
                </A>
                <A
                    href="/results"
                    attr:class="px-4 py-2 rounded-lg border border-gray-300 text-sm text-gray-700 hover:bg-gray-50"
                >
                    "Manage Results"
                </A>
            </div>
        </div>
    }
}
