//! Shell of every signed-in page
//!
//! Waits for the persisted session to be read back before deciding
//! anything, so a reload never flashes the login page for a signed-in user.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::core::menu::can_access;
use crate::core::session::LOGIN_PATH;
use crate::ui::common::FullPageSpinner;
use crate::ui::header::Header;
use crate::ui::session::use_session_context;
use crate::ui::sidebar::Sidebar;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = use_session_context();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    // Redirect once restoration says nobody is signed in
    Effect::new(move |_| {
        if session.is_restored() && !session.is_logged_in() {
            navigate(LOGIN_PATH, Default::default());
        }
    });

    let allowed = move || {
        session
            .role()
            .is_some_and(|role| can_access(role, &pathname.get()))
    };

    view! {
        <Show
            when=move || session.is_restored() && session.is_logged_in()
            fallback=|| view! { <FullPageSpinner/> }
        >
            <div class="min-h-screen bg-gray-50">
                <Header/>
                <Sidebar/>
                <main class="ml-64 pt-16">
                    <div class="p-8">
                        <Show when=allowed fallback=|| view! { <AccessDenied/> }>
                            <Outlet/>
                        </Show>
                    </div>
                </main>
            </div>
        </Show>
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="py-24 text-center">
            <h1 class="text-2xl font-semibold text-gray-900">"Access denied"</h1>
            <p class="mt-2 text-gray-600">"Your role cannot open this page."</p>
        </div>
    }
}
