//! Create / edit form for an academic result
//!
//! Courses come from `/courses`, students from the chosen course's roster,
//! so instructors never need the admin-only student list. When editing, the
//! student and course are fixed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::{CourseDto, ResultDto, SEMESTERS, StudentDto};
use crate::core::display::{course_option_label, student_option_label};
use crate::core::validation::{ResultDraft, validate_result};
use crate::ui::api::portal_client;
use crate::ui::common::{ErrorMessage, FormField, Spinner, SpinnerSize};
use crate::ui::session::use_session_context;

const SELECT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100";

/// Result form; `Some(existing)` switches it to edit mode
#[component]
pub fn ResultForm(
    existing: Option<ResultDto>,
    on_saved: Callback<ResultDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = use_session_context();

    let editing_id = existing.as_ref().map(|r| r.id);
    let is_edit = editing_id.is_some();
    let initial = existing
        .as_ref()
        .map(ResultDraft::for_result)
        .unwrap_or_else(ResultDraft::new);

    let student_id = RwSignal::new(initial.student_id);
    let course_id = RwSignal::new(initial.course_id);
    let midterm = RwSignal::new(initial.midterm_score);
    let final_score = RwSignal::new(initial.final_score);
    let year = RwSignal::new(initial.year);
    let semester = RwSignal::new(initial.semester);

    let courses = RwSignal::new(Vec::<CourseDto>::new());
    let roster = RwSignal::new(Vec::<StudentDto>::new());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Fixed selections only need their labels
    let fixed_labels = existing.map(|r| {
        (
            r.student_name.clone(),
            format!("{} - {}", r.course_code, r.course_title),
        )
    });

    if !is_edit {
        Effect::new(move |_| {
            spawn_local(async move {
                match portal_client(session).courses().await {
                    Ok(list) => courses.set(list),
                    Err(e) => {
                        leptos::logging::warn!("Failed to load courses: {}", e);
                        error.set(Some("Failed to load courses".to_string()));
                    }
                }
            });
        });

        Effect::new(move |_| {
            let Some(course) = course_id.get() else {
                roster.set(Vec::new());
                return;
            };
            spawn_local(async move {
                match portal_client(session).course_students(course).await {
                    Ok(list) => roster.set(list),
                    Err(e) => {
                        leptos::logging::warn!("Failed to load roster of course {}: {}", course, e);
                        roster.set(Vec::new());
                        error.set(Some("Failed to load enrolled students".to_string()));
                    }
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ResultDraft {
            student_id: student_id.get_untracked(),
            course_id: course_id.get_untracked(),
            midterm_score: midterm.get_untracked(),
            final_score: final_score.get_untracked(),
            year: year.get_untracked(),
            semester: semester.get_untracked(),
        };
        let request = match validate_result(&draft) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let client = portal_client(session);
            let saved = match editing_id {
                Some(id) => client.update_result(id, &request).await,
                None => client.create_result(&request).await,
            };
            match saved {
                Ok(result) => on_saved.run(result),
                Err(e) => {
                    leptos::logging::warn!("Failed to save result: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let selects = match fixed_labels {
        Some((student, course)) => view! {
            <FormField
                label="Student".to_string()
                value=Signal::stored(student)
                on_input=Callback::new(|_| {})
                disabled=true
            />
            <FormField
                label="Course".to_string()
                value=Signal::stored(course)
                on_input=Callback::new(|_| {})
                disabled=true
            />
        }
        .into_any(),
        None => view! {
            <div class="space-y-1.5">
                <label class="block text-sm font-medium text-gray-700">"Course"</label>
                <select
                    class=SELECT_CLASS
                    on:change=move |ev| {
                        course_id.set(event_target_value(&ev).parse().ok());
                        student_id.set(None);
                    }
                >
                    <option value="" selected=move || course_id.get().is_none()>"Select a course"</option>
                    {move || {
                        courses
                            .get()
                            .into_iter()
                            .map(|course| {
                                let id = course.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || course_id.get() == Some(id)
                                    >
                                        {course_option_label(&course)}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="space-y-1.5">
                <label class="block text-sm font-medium text-gray-700">"Student"</label>
                <select
                    class=SELECT_CLASS
                    disabled=move || course_id.get().is_none()
                    on:change=move |ev| student_id.set(event_target_value(&ev).parse().ok())
                >
                    <option value="" selected=move || student_id.get().is_none()>"Select a student"</option>
                    {move || {
                        roster
                            .get()
                            .into_iter()
                            .map(|student| {
                                let id = student.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || student_id.get() == Some(id)
                                    >
                                        {student_option_label(&student)}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
        }
        .into_any(),
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <ErrorMessage error=error/>
            {selects}
            <div class="grid grid-cols-2 gap-4">
                <FormField
                    label="Midterm Score".to_string()
                    input_type="number"
                    placeholder="0-100".to_string()
                    value=midterm
                    on_input=Callback::new(move |v| midterm.set(v))
                    disabled=saving
                    required=true
                />
                <FormField
                    label="Final Score".to_string()
                    input_type="number"
                    placeholder="0-100".to_string()
                    value=final_score
                    on_input=Callback::new(move |v| final_score.set(v))
                    disabled=saving
                    required=true
                />
            </div>
            <div class="grid grid-cols-2 gap-4">
                <FormField
                    label="Year of Study".to_string()
                    input_type="number"
                    placeholder="1-4".to_string()
                    value=year
                    on_input=Callback::new(move |v| year.set(v))
                    disabled=saving
                    required=true
                />
                <div class="space-y-1.5">
                    <label class="block text-sm font-medium text-gray-700">"Semester"</label>
                    <select
                        class=SELECT_CLASS
                        disabled=move || saving.get()
                        on:change=move |ev| semester.set(event_target_value(&ev))
                    >
                        {SEMESTERS
                            .into_iter()
                            .map(|name| view! {
                                <option value=name selected=move || semester.get() == name>{name}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
            <div class="flex items-center justify-end gap-2 pt-4 border-t border-gray-200">
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg border border-gray-300 text-gray-700 hover:bg-gray-50"
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-lg bg-blue-600 text-white hover:bg-blue-700 disabled:opacity-50 flex items-center gap-2"
                    disabled=move || saving.get()
                >
                    <Show when=move || saving.get()>
                        <Spinner size=SpinnerSize::Small/>
                    </Show>
                    {move || match (saving.get(), is_edit) {
                        (true, _) => "Saving...",
                        (false, true) => "Update Result",
                        (false, false) => "Create Result",
                    }}
                </button>
            </div>
        </form>
    }
}
