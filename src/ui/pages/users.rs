//! User management page (admins only)

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::{ApiError, UserDto};
use crate::core::filter::filter_by_term;
use crate::core::session::Role;
use crate::ui::api::portal_client;
use crate::ui::common::{
    ConfirmDialog, EmptyState, ErrorMessage, LoadingSpinner, RoleBadge, SearchInput, StatusBadge,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

fn tab_label(role: Option<Role>) -> &'static str {
    match role {
        None => "All Users",
        Some(Role::Admin) => "Admins",
        Some(Role::Instructor) => "Instructors",
        Some(Role::Student) => "Students",
    }
}

/// User management page component
#[component]
pub fn UsersPage() -> impl IntoView {
    let session = use_session_context();

    let users = RwSignal::new(Vec::<UserDto>::new());
    let search = RwSignal::new(String::new());
    let role_filter = RwSignal::new(None::<Role>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let delete_target = RwSignal::new(None::<(i64, String)>); // (id, full name)
    let deleting = RwSignal::new(false);

    // Refetch whenever the role tab changes
    Effect::new(move |_| {
        let role = role_filter.get();
        if !session.is_logged_in() {
            return;
        }
        spawn_local(async move {
            loading.set(true);
            error.set(None);
            match portal_client(session).users(role).await {
                Ok(list) => users.set(list),
                Err(ApiError::Forbidden(_)) => {
                    users.set(Vec::new());
                    error.set(Some("You don't have permission to view users.".to_string()));
                }
                Err(e) => {
                    leptos::logging::warn!("Failed to load users: {}", e);
                    users.set(Vec::new());
                    error.set(Some(format!("Error fetching users: {}", e)));
                }
            }
            loading.set(false);
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let Some((id, _)) = delete_target.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match portal_client(session).delete_user(id).await {
                Ok(()) => users.update(|list| list.retain(|u| u.id != id)),
                Err(e) => {
                    leptos::logging::warn!("Failed to delete user {}: {}", id, e);
                    error.set(Some(e.to_string()));
                }
            }
            delete_target.set(None);
            deleting.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        users.with(|list| {
            search.with(|term| filter_by_term(list, term).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    let tabs = std::iter::once(None)
        .chain(Role::ALL.into_iter().map(Some))
        .map(|role| {
            view! {
                <button
                    class="px-3 py-1.5 rounded-md text-sm font-medium transition-colors"
                    class=("bg-white", move || role_filter.get() == role)
                    class=("shadow-sm", move || role_filter.get() == role)
                    class=("text-gray-900", move || role_filter.get() == role)
                    class=("text-gray-500", move || role_filter.get() != role)
                    on:click=move |_| role_filter.set(role)
                >
                    {tab_label(role)}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"User Management"</h1>
                <p class="text-gray-600 mt-1">"Manage system users and their roles"</p>
            </div>

            <SearchInput value=search placeholder="Search users..."/>

            <div class="inline-flex gap-1 p-1 rounded-lg bg-gray-100">{tabs}</div>

            <ErrorMessage error=error/>

            <div class="bg-white rounded-xl border border-gray-200">
                <div class="px-6 py-4 border-b border-gray-200">
                    <h2 class="text-lg font-semibold text-gray-900">
                        {move || tab_label(role_filter.get())}
                    </h2>
                </div>
                {move || {
                    if loading.get() {
                        view! { <LoadingSpinner/> }.into_any()
                    } else if visible.with(Vec::is_empty) {
                        view! { <EmptyState message="No users found"/> }.into_any()
                    } else {
                        view! {
                            <table class="w-full text-sm">
                                <thead class="text-left text-gray-600">
                                    <tr>
                                        <th class="px-6 py-3 font-medium">"Name"</th>
                                        <th class="px-6 py-3 font-medium">"Email"</th>
                                        <th class="px-6 py-3 font-medium">"Role"</th>
                                        <th class="px-6 py-3 font-medium">"Status"</th>
                                        <th class="px-6 py-3 font-medium w-20">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-100">
                                    <For
                                        each=move || visible.get()
                                        key=|user| user.id
                                        children=move |user| {
                                            let id = user.id;
                                            let name = user.full_name();
                                            let target_name = name.clone();
                                            view! {
                                                <tr class="hover:bg-gray-50">
                                                    <td class="px-6 py-3 font-medium text-gray-900">{name}</td>
                                                    <td class="px-6 py-3 text-gray-600">{user.email}</td>
                                                    <td class="px-6 py-3"><RoleBadge role=user.role/></td>
                                                    <td class="px-6 py-3"><StatusBadge enabled=user.enabled/></td>
                                                    <td class="px-6 py-3">
                                                        <button
                                                            class="p-2 rounded text-red-500 hover:text-red-700 hover:bg-red-50"
                                                            title="Delete user"
                                                            on:click=move |_| delete_target.set(Some((id, target_name.clone())))
                                                        >
                                                            <Icon name=icons::TRASH class="h-4 w-4"/>
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        }.into_any()
                    }
                }}
            </div>

            <ConfirmDialog
                title="Delete User".to_string()
                message=Signal::derive(move || {
                    delete_target
                        .get()
                        .map(|(_, name)| format!("Are you sure you want to delete {}?", name))
                        .unwrap_or_default()
                })
                is_open=Signal::derive(move || delete_target.get().is_some())
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| delete_target.set(None))
                busy=deleting
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        assert_eq!(tab_label(None), "All Users");
        assert_eq!(tab_label(Some(Role::Instructor)), "Instructors");
    }
}
