//! Results page component
//!
//! Sortable results table. Which results are listed depends on the role:
//! admins see all, instructors those of their courses, students their own.
//! Admins and instructors record and correct results from here.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::result_form::ResultForm;
use crate::core::api::{ApiError, ResultDto};
use crate::core::display::score_label;
use crate::core::filter::{ResultColumn, ResultSort};
use crate::core::session::Role;
use crate::ui::api::{PortalClient, portal_client};
use crate::ui::common::{
    BaseModal, ConfirmDialog, EmptyState, ErrorMessage, GradeBadge, LoadingSpinner,
    SuccessMessage,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

/// What the result dialog is doing
#[derive(Debug, Clone, PartialEq)]
enum FormMode {
    Create,
    Edit(ResultDto),
}

impl FormMode {
    fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Record New Result",
            FormMode::Edit(_) => "Edit Result",
        }
    }
}

/// Changes whenever an edit changes what the row shows
fn row_key(result: &ResultDto) -> (i64, Option<u64>, Option<u64>, String) {
    (
        result.id,
        result.midterm_score.map(f64::to_bits),
        result.final_score.map(f64::to_bits),
        result.semester.clone(),
    )
}

/// Insert `saved` or replace the row with the same id
fn upsert(list: &mut Vec<ResultDto>, saved: ResultDto) {
    match list.iter_mut().find(|r| r.id == saved.id) {
        Some(row) => *row = saved,
        None => list.push(saved),
    }
}

const COLUMNS: [(ResultColumn, &str); 7] = [
    (ResultColumn::StudentName, "Student"),
    (ResultColumn::CourseCode, "Course"),
    (ResultColumn::MidtermScore, "Midterm"),
    (ResultColumn::FinalScore, "Final"),
    (ResultColumn::TotalScore, "Total"),
    (ResultColumn::Grade, "Grade"),
    (ResultColumn::Semester, "Semester"),
];

async fn fetch_results(
    client: &PortalClient,
    role: Role,
    user_id: i64,
) -> Result<Vec<ResultDto>, ApiError> {
    match role {
        Role::Admin => client.results().await,
        Role::Instructor => client.instructor_results().await,
        Role::Student => client.student_results(user_id).await,
    }
}

/// Results page component
#[component]
pub fn ResultsPage() -> impl IntoView {
    let session = use_session_context();

    let results = RwSignal::new(Vec::<ResultDto>::new());
    let sort = RwSignal::new(ResultSort::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let delete_target = RwSignal::new(None::<i64>);
    let deleting = RwSignal::new(false);

    let form_mode = RwSignal::new(None::<FormMode>);
    let notice = RwSignal::new(None::<String>);

    let can_edit = move || matches!(session.role(), Some(Role::Admin | Role::Instructor));

    Effect::new(move |_| {
        let Some(user) = session.user() else {
            return;
        };
        spawn_local(async move {
            loading.set(true);
            let client = portal_client(session);
            match fetch_results(&client, user.role, user.id).await {
                Ok(list) => results.set(list),
                Err(e) => {
                    leptos::logging::warn!("Failed to load results: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(id) = delete_target.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match portal_client(session).delete_result(id).await {
                Ok(()) => results.update(|list| list.retain(|r| r.id != id)),
                Err(e) => {
                    leptos::logging::warn!("Failed to delete result {}: {}", id, e);
                    error.set(Some(e.to_string()));
                }
            }
            delete_target.set(None);
            deleting.set(false);
        });
    });

    let on_saved = Callback::new(move |saved: ResultDto| {
        let created = form_mode.get_untracked() == Some(FormMode::Create);
        results.update(|list| upsert(list, saved));
        form_mode.set(None);
        notice.set(Some(
            if created {
                "Result recorded successfully"
            } else {
                "Result updated successfully"
            }
            .to_string(),
        ));
    });

    let sorted = Memo::new(move |_| {
        let mut list = results.get();
        sort.get().sort(&mut list);
        list
    });

    let subtitle = move || {
        if session.role() == Some(Role::Student) {
            "View your academic performance"
        } else {
            "Manage and view student results"
        }
    };

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">"Academic Results"</h1>
                    <p class="text-gray-600 mt-1">{subtitle}</p>
                </div>
                <Show when=can_edit>
                    <button
                        class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 flex items-center gap-2"
                        on:click=move |_| form_mode.set(Some(FormMode::Create))
                    >
                        <Icon name=icons::PLUS class="h-4 w-4"/>
                        "Add Result"
                    </button>
                </Show>
            </div>

            <ErrorMessage error=error/>
            <SuccessMessage message=notice/>

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner/> }.into_any()
                } else if sorted.with(Vec::is_empty) {
                    view! { <EmptyState message="No results found"/> }.into_any()
                } else {
                    view! {
                        <div class="bg-white rounded-xl border border-gray-200 overflow-x-auto">
                            <table class="w-full text-sm">
                                <thead class="bg-gray-50 text-left text-gray-600">
                                    <tr>
                                        {COLUMNS
                                            .into_iter()
                                            .map(|(column, label)| view! {
                                                <th
                                                    class="px-4 py-3 font-medium cursor-pointer select-none hover:text-gray-900"
                                                    on:click=move |_| sort.update(|s| *s = s.toggle(column))
                                                >
                                                    {label}
                                                    <span class="ml-1 text-xs">
                                                        {move || sort.get().indicator(column)}
                                                    </span>
                                                </th>
                                            })
                                            .collect_view()}
                                        <Show when=can_edit>
                                            <th class="px-4 py-3"></th>
                                        </Show>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-100">
                                    <For
                                        each=move || sorted.get()
                                        key=row_key
                                        children=move |result| {
                                            let id = result.id;
                                            let row = StoredValue::new(result.clone());
                                            view! {
                                                <tr class="hover:bg-gray-50">
                                                    <td class="px-4 py-3 text-gray-900">{result.student_name}</td>
                                                    <td class="px-4 py-3">
                                                        <a
                                                            href=format!("/results/{}", id)
                                                            class="font-medium text-blue-600 hover:underline"
                                                        >
                                                            {result.course_code}
                                                        </a>
                                                        <div class="text-xs text-gray-500">{result.course_title}</div>
                                                    </td>
                                                    <td class="px-4 py-3">{score_label(result.midterm_score)}</td>
                                                    <td class="px-4 py-3">{score_label(result.final_score)}</td>
                                                    <td class="px-4 py-3 font-medium">{score_label(result.total_score)}</td>
                                                    <td class="px-4 py-3"><GradeBadge grade=result.grade/></td>
                                                    <td class="px-4 py-3">{result.semester}</td>
                                                    <Show when=can_edit>
                                                        <td class="px-4 py-3 text-right whitespace-nowrap">
                                                            <button
                                                                class="p-2 rounded text-gray-500 hover:text-gray-900 hover:bg-gray-100"
                                                                title="Edit result"
                                                                on:click=move |_| form_mode.set(Some(FormMode::Edit(row.get_value())))
                                                            >
                                                                <Icon name=icons::PENCIL class="h-4 w-4"/>
                                                            </button>
                                                            <button
                                                                class="p-2 rounded text-red-500 hover:text-red-700 hover:bg-red-50"
                                                                title="Delete result"
                                                                on:click=move |_| delete_target.set(Some(id))
                                                            >
                                                                <Icon name=icons::TRASH class="h-4 w-4"/>
                                                            </button>
                                                        </td>
                                                    </Show>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}

            {move || {
                form_mode.get().map(|mode| {
                    let existing = match &mode {
                        FormMode::Create => None,
                        FormMode::Edit(result) => Some(result.clone()),
                    };
                    view! {
                        <BaseModal
                            title=mode.title().to_string()
                            is_open=true
                            on_close=Callback::new(move |_| form_mode.set(None))
                            max_width="max-w-lg"
                        >
                            <p class="text-sm text-gray-500 mb-4">
                                "Enter student performance details for a course"
                            </p>
                            <ResultForm
                                existing=existing.clone()
                                on_saved=on_saved
                                on_cancel=Callback::new(move |_| form_mode.set(None))
                            />
                        </BaseModal>
                    }
                })
            }}

            <ConfirmDialog
                title="Delete Result".to_string()
                message="Are you sure you want to delete this result?".to_string()
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

    fn result(id: i64, grade: &str) -> ResultDto {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "studentId": 1,
            "courseId": 2,
            "grade": grade,
        }))
        .unwrap()
    }

    #[test]
    fn test_upsert_replaces_edited_row() {
        let mut list = vec![result(1, "B"), result(2, "C")];
        upsert(&mut list, result(2, "A"));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].grade, "A");
    }

    #[test]
    fn test_upsert_appends_new_row() {
        let mut list = vec![result(1, "B")];
        upsert(&mut list, result(5, "A-"));
        assert_eq!(list.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 5]);
    }

    #[test]
    fn test_row_key_follows_edits() {
        let before = result(1, "B");
        let mut after = before.clone();
        after.final_score = Some(95.0);
        assert_ne!(row_key(&before), row_key(&after));
        assert_eq!(row_key(&before), row_key(&before.clone()));
    }

    #[test]
    fn test_form_titles() {
        assert_eq!(FormMode::Create.title(), "Record New Result");
        assert_eq!(FormMode::Edit(result(1, "B")).title(), "Edit Result");
    }
}
