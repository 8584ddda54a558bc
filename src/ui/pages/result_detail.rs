//! Single result with its score breakdown

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use super::result_form::ResultForm;
use crate::core::api::ResultDto;
use crate::core::display::score_label;
use crate::core::session::Role;
use crate::ui::api::portal_client;
use crate::ui::common::{BaseModal, ConfirmDialog, ErrorMessage, GradeBadge, LoadingSpinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

/// Width of the score bar, clamped to the 0-100 scale
fn score_bar_width(total: Option<f64>) -> String {
    format!("width: {:.1}%", total.unwrap_or(0.0).clamp(0.0, 100.0))
}

/// Result detail page component
#[component]
pub fn ResultDetailPage() -> impl IntoView {
    let session = use_session_context();
    let params = use_params_map();
    let result_id = Memo::new(move |_| params.get().get("id").and_then(|id| id.parse::<i64>().ok()));

    let result = RwSignal::new(None::<ResultDto>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(false);
    let confirm_open = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let deleted = RwSignal::new(false);

    let can_edit = move || matches!(session.role(), Some(Role::Admin | Role::Instructor));

    Effect::new(move |_| {
        let Some(id) = result_id.get() else {
            loading.set(false);
            return;
        };
        if !session.is_logged_in() {
            return;
        }
        spawn_local(async move {
            loading.set(true);
            match portal_client(session).result(id).await {
                Ok(dto) => result.set(Some(dto)),
                Err(e) if e.is_missing() => result.set(None),
                Err(e) => {
                    leptos::logging::warn!("Failed to load result {}: {}", id, e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(id) = result_id.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match portal_client(session).delete_result(id).await {
                Ok(()) => deleted.set(true),
                Err(e) => {
                    leptos::logging::warn!("Failed to delete result {}: {}", id, e);
                    error.set(Some(e.to_string()));
                }
            }
            confirm_open.set(false);
            deleting.set(false);
        });
    });

    let on_saved = Callback::new(move |saved: ResultDto| {
        result.set(Some(saved));
        editing.set(false);
    });

    view! {
        <div class="space-y-6">
            <Show when=move || deleted.get()>
                <Redirect path="/results"/>
            </Show>
            <ErrorMessage error=error/>
            {move || {
                if loading.get() {
                    return view! { <LoadingSpinner/> }.into_any();
                }
                let Some(dto) = result.get() else {
                    return view! {
                        <div class="text-center py-12">
                            <h2 class="text-2xl font-bold text-gray-900">"Result not found"</h2>
                            <p class="mt-2 text-gray-600">
                                "The result you're looking for doesn't exist or you don't have permission to view it."
                            </p>
                            <a
                                href="/results"
                                class="inline-block mt-4 px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700"
                            >
                                "Back to Results"
                            </a>
                        </div>
                    }
                    .into_any();
                };
                view! {
                    <div class="flex items-center gap-4">
                        <a href="/results" class="flex items-center gap-2 px-3 py-2 rounded-lg text-gray-600 hover:bg-gray-100">
                            <Icon name=icons::ARROW_LEFT class="h-4 w-4"/>
                            "Back"
                        </a>
                        <div class="flex-1">
                            <h1 class="text-3xl font-bold text-gray-900">"Result Details"</h1>
                            <p class="text-gray-600">{format!("{} - {}", dto.course_code, dto.semester)}</p>
                        </div>
                        <Show when=can_edit>
                            <div class="flex gap-2">
                                <button
                                    class="px-4 py-2 rounded-lg border border-gray-300 text-gray-700 text-sm hover:bg-gray-50 flex items-center gap-2"
                                    on:click=move |_| editing.set(true)
                                >
                                    <Icon name=icons::PENCIL class="h-4 w-4"/>
                                    "Edit"
                                </button>
                                <button
                                    class="px-4 py-2 rounded-lg bg-red-600 text-white text-sm hover:bg-red-700 flex items-center gap-2"
                                    on:click=move |_| confirm_open.set(true)
                                >
                                    <Icon name=icons::TRASH class="h-4 w-4"/>
                                    "Delete"
                                </button>
                            </div>
                        </Show>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <div class="bg-white rounded-xl border border-gray-200 p-6 space-y-4">
                            <div>
                                <h2 class="text-lg font-semibold text-gray-900">"Student Information"</h2>
                                <p class="text-sm text-gray-500">"Student details for this result"</p>
                            </div>
                            <InfoRow icon=icons::GRADUATION_CAP value=dto.student_name.clone() caption="Student".to_string()/>
                            <InfoRow icon=icons::BOOK_OPEN value=dto.course_title.clone() caption=dto.course_code.clone()/>
                            <InfoRow icon=icons::CLIPBOARD_LIST value=dto.semester.clone() caption="Academic Period".to_string()/>
                        </div>

                        <div class="bg-white rounded-xl border border-gray-200 p-6 md:col-span-2 space-y-6">
                            <h2 class="text-lg font-semibold text-gray-900">"Performance Summary"</h2>
                            <div class="grid grid-cols-4 gap-4">
                                <ScoreCell label="Midterm (40%)" score=dto.midterm_score/>
                                <ScoreCell label="Final (60%)" score=dto.final_score/>
                                <ScoreCell label="Total" score=dto.total_score/>
                                <div class="text-center">
                                    <div class="text-sm text-gray-500 mb-2">"Final Grade"</div>
                                    <GradeBadge grade=dto.grade.clone()/>
                                </div>
                            </div>
                            <div>
                                <div class="text-sm font-medium mb-4">"Score Distribution"</div>
                                <div class="h-3 w-full rounded-full bg-gray-200">
                                    <div class="h-3 rounded-full bg-blue-600" style=score_bar_width(dto.total_score)></div>
                                </div>
                                <div class="flex justify-between text-xs text-gray-500 mt-1">
                                    <span>"0"</span>
                                    <span>"50"</span>
                                    <span>"100"</span>
                                </div>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }}

            {move || {
                editing.get().then(|| result.get()).flatten().map(|dto| view! {
                    <BaseModal
                        title="Edit Result".to_string()
                        is_open=true
                        on_close=Callback::new(move |_| editing.set(false))
                        max_width="max-w-lg"
                    >
                        <ResultForm
                            existing=Some(dto.clone())
                            on_saved=on_saved
                            on_cancel=Callback::new(move |_| editing.set(false))
                        />
                    </BaseModal>
                })
            }}

            <ConfirmDialog
                title="Delete Result".to_string()
                message="Are you sure you want to delete this result?".to_string()
                is_open=confirm_open
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| confirm_open.set(false))
                busy=deleting
            />
        </div>
    }
}

#[component]
fn InfoRow(icon: &'static str, value: String, caption: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <Icon name=icon class="h-5 w-5 opacity-60"/>
            <div>
                <div class="font-medium text-gray-900">{value}</div>
                <div class="text-sm text-gray-500">{caption}</div>
            </div>
        </div>
    }
}

#[component]
fn ScoreCell(label: &'static str, score: Option<f64>) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-sm text-gray-500 mb-1">{label}</div>
            <div class="text-2xl font-bold">{score_label(score)}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bar_width() {
        assert_eq!(score_bar_width(Some(81.26)), "width: 81.3%");
        assert_eq!(score_bar_width(Some(120.0)), "width: 100.0%");
        assert_eq!(score_bar_width(None), "width: 0.0%");
    }
}
