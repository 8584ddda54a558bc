//! Students page component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::StudentDto;
use crate::core::filter::filter_by_term;
use crate::core::session::Role;
use crate::ui::api::portal_client;
use crate::ui::common::{ConfirmDialog, EmptyState, ErrorMessage, LoadingSpinner, SearchInput};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

/// Students page component
#[component]
pub fn StudentsPage() -> impl IntoView {
    let session = use_session_context();

    let students = RwSignal::new(Vec::<StudentDto>::new());
    let search = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let delete_target = RwSignal::new(None::<(i64, String)>); // (id, full name)
    let deleting = RwSignal::new(false);

    let is_admin = move || session.role() == Some(Role::Admin);

    Effect::new(move |_| {
        if !session.is_logged_in() {
            return;
        }
        spawn_local(async move {
            loading.set(true);
            match portal_client(session).students().await {
                Ok(list) => students.set(list),
                Err(e) => {
                    leptos::logging::warn!("Failed to load students: {}", e);
                    error.set(Some(e.to_string()));
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
            if let Err(e) = portal_client(session).delete_student(id).await {
                leptos::logging::warn!("Failed to delete student {}: {}", id, e);
                error.set(Some(e.to_string()));
            } else {
                students.update(|list| list.retain(|s| s.id != id));
            }
            delete_target.set(None);
            deleting.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        students.with(|list| {
            search.with(|term| filter_by_term(list, term).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-gray-900">"Students"</h1>
                <p class="text-gray-600 mt-1">"Manage student records and enrollment"</p>
            </div>

            <SearchInput value=search placeholder="Search students..."/>
            <ErrorMessage error=error/>

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_any()
                } else if visible.with(Vec::is_empty) {
                    view! { <EmptyState message="No students found"/> }.into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <For
                                each=move || visible.get()
                                key=|student| student.id
                                children=move |student| {
                                    let id = student.id;
                                    let name = student.full_name();
                                    let enrolled = student.enrolled_count();
                                    let year = student
                                        .year
                                        .map(|y| format!(", Year {}", y))
                                        .unwrap_or_default();
                                    view! {
                                        <div class="bg-white rounded-xl border border-gray-200 p-5 hover:shadow-lg transition-shadow">
                                            <div class="flex justify-between items-center">
                                                <span class="text-lg font-semibold text-gray-900">{name.clone()}</span>
                                                <span class="text-sm bg-gray-100 rounded-full px-3 py-1">
                                                    {student.student_id.clone()}
                                                </span>
                                            </div>
                                            <div class="space-y-2 mt-4 text-sm text-gray-500">
                                                <div class="flex items-center gap-2">
                                                    <Icon name=icons::GRADUATION_CAP class="h-4 w-4"/>
                                                    {format!("{}{}", student.department, year)}
                                                </div>
                                                <div class="flex items-center gap-2">
                                                    <Icon name=icons::BOOK_OPEN class="h-4 w-4"/>
                                                    {format!("{} enrolled courses", enrolled)}
                                                </div>
                                            </div>
                                            <div class="flex justify-between items-center mt-4">
                                                <a
                                                    href=format!("/students/{}", id)
                                                    class="text-sm font-medium text-blue-600 hover:underline"
                                                >
                                                    "View Details"
                                                </a>
                                                <Show when=is_admin>
                                                    {
                                                        let name = name.clone();
                                                        view! {
                                                            <button
                                                                class="p-2 rounded text-red-500 hover:text-red-700 hover:bg-red-50"
                                                                title="Delete student"
                                                                on:click=move |_| delete_target.set(Some((id, name.clone())))
                                                            >
                                                                <Icon name=icons::TRASH class="h-4 w-4"/>
                                                            </button>
                                                        }
                                                    }
                                                </Show>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }.into_any()
                }
            }}

            <ConfirmDialog
                title="Delete Student".to_string()
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
