//! Top bar with the signed-in user's menu

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::display::user_initials;
use crate::core::session::User;
use crate::ui::common::RoleBadge;
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session_context();
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        session.logout();
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-30 h-16 bg-white border-b border-gray-200">
            <div class="h-full px-6 flex items-center justify-between">
                <A href="/dashboard" attr:class="flex items-center gap-2">
                    <Icon name=icons::GRADUATION_CAP class="w-7 h-7"/>
                    <span class="text-xl font-bold text-gray-900">"Course Management System"</span>
                </A>

                {move || session.user().map(|user| {
                    let role = user.role;
                    let full_name = user.full_name();
                    let menu_name = full_name.clone();
                    let email = user.email.clone();
                    view! {
                        <div class="relative">
                            <button
                                class="flex items-center gap-3 p-1 rounded-lg hover:bg-gray-100 transition-colors"
                                on:click=move |_| menu_open.update(|v| *v = !*v)
                            >
                                <UserAvatar user=user.clone() size=36/>
                                <div class="hidden sm:block text-left">
                                    <p class="text-sm font-medium text-gray-900">{full_name}</p>
                                    <p class="text-xs text-gray-500">{role.as_str()}</p>
                                </div>
                            </button>

                            <Show when=move || menu_open.get()>
                                <div class="absolute right-0 mt-2 w-56 bg-white rounded-lg shadow-lg border border-gray-200 py-1 z-50">
                                    <div class="px-4 py-3 border-b border-gray-200">
                                        <p class="text-sm font-medium text-gray-900 truncate">{menu_name.clone()}</p>
                                        <p class="text-xs text-gray-500 truncate">{email.clone()}</p>
                                        <div class="mt-2"><RoleBadge role=role/></div>
                                    </div>
                                    <A
                                        href="/profile"
                                        attr:class="w-full px-4 py-2 text-sm text-gray-700 hover:bg-gray-50 flex items-center gap-2"
                                    >
                                        <Icon name=icons::USER class="h-4 w-4"/>
                                        "Profile"
                                    </A>
                                    <div class="border-t border-gray-200 my-1"></div>
                                    <button
                                        class="w-full px-4 py-2 text-sm text-left text-red-600 hover:bg-red-50 flex items-center gap-2"
                                        on:click=handle_logout
                                    >
                                        <Icon name=icons::LOG_OUT class="h-4 w-4"/>
                                        "Log out"
                                    </button>
                                </div>
                            </Show>
                        </div>
                    }
                })}
            </div>
        </header>
    }
}

/// Round avatar with the user's initials
#[component]
pub fn UserAvatar(
    /// User data
    user: User,
    /// Avatar size in pixels
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let size_style = format!(
        "width: {}px; height: {}px; min-width: {}px; min-height: {}px;",
        size, size, size, size
    );
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    view! {
        <div
            class=format!("bg-blue-600 rounded-full flex items-center justify-center text-white font-medium {}", font_size)
            style=size_style
        >
            {user_initials(&user)}
        </div>
    }
}
