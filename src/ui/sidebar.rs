use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::menu::menu_for;
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

/// Role-filtered navigation on the left edge
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session_context();
    let pathname = use_location().pathname;

    // Menu entries only change with the role
    let items = Memo::new(move |_| session.role().map(menu_for).unwrap_or_default());

    view! {
        <aside class="fixed left-0 top-16 h-[calc(100vh-4rem)] w-64 bg-white border-r border-gray-200 overflow-y-auto">
            <div class="flex flex-col h-full">
                <nav class="flex-1 p-4">
                    <ul class="space-y-2">
                        <For
                            each=move || items.get()
                            key=|item| item.href
                            children=move |item| {
                                let is_active = move || item.is_active(&pathname.get());
                                view! {
                                    <li>
                                        <A
                                            href=item.href
                                            attr:class=move || {
                                                if is_active() {
                                                    "flex items-center space-x-3 px-4 py-2.5 rounded-lg transition-colors bg-blue-50 text-blue-600"
                                                } else {
                                                    "flex items-center space-x-3 px-4 py-2.5 rounded-lg transition-colors text-gray-700 hover:bg-gray-100"
                                                }
                                            }
                                        >
                                            <Icon name=item.icon class="h-5 w-5"/>
                                            <span class="font-medium">{item.title}</span>
                                        </A>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </nav>

                <div class="p-4 border-t border-gray-200">
                    <button
                        class="flex items-center space-x-3 px-4 py-2.5 w-full rounded-lg text-red-600 hover:bg-red-50 transition-colors"
                        on:click=move |_| session.logout()
                    >
                        <Icon name=icons::LOG_OUT class="h-5 w-5"/>
                        <span class="font-medium">"Logout"</span>
                    </button>
                </div>
            </div>
        </aside>
    }
}
