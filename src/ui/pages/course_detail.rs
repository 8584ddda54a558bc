//! Course detail page with its roster

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::core::api::{CourseDto, StudentDto};
use crate::core::display::year_label;
use crate::core::session::Role;
use crate::ui::api::portal_client;
use crate::ui::common::{EmptyState, ErrorMessage, LoadingSpinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

/// Only staff may read a course roster
fn sees_roster(role: Option<Role>) -> bool {
    matches!(role, Some(Role::Admin | Role::Instructor))
}

/// Course detail page component
#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let session = use_session_context();
    let params = use_params_map();
    let course_id = Memo::new(move |_| params.get().get("id").and_then(|id| id.parse::<i64>().ok()));

    let course = RwSignal::new(None::<CourseDto>);
    let roster = RwSignal::new(Vec::<StudentDto>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let Some(id) = course_id.get() else {
            loading.set(false);
            return;
        };
        let Some(role) = session.role() else {
            return;
        };
        spawn_local(async move {
            loading.set(true);
            let client = portal_client(session);
            match client.course(id).await {
                Ok(dto) => course.set(Some(dto)),
                Err(e) => {
                    if !e.is_missing() {
                        leptos::logging::warn!("Failed to load course {}: {}", id, e);
                        error.set(Some(e.to_string()));
                    }
                    course.set(None);
                    loading.set(false);
                    return;
                }
            }
            if sees_roster(Some(role)) {
                match client.course_students(id).await {
                    Ok(list) => roster.set(list),
                    Err(e) => {
                        leptos::logging::warn!("Failed to load roster of course {}: {}", id, e);
                        error.set(Some(e.to_string()));
                    }
                }
            }
            loading.set(false);
        });
    });

    let links_students = move || session.role() == Some(Role::Admin);

    view! {
        <div class="space-y-6">
            <ErrorMessage error=error/>
            {move || {
                if loading.get() {
                    return view! { <LoadingSpinner/> }.into_any();
                }
                let Some(dto) = course.get() else {
                    return view! {
                        <div class="text-center py-12">
                            <h2 class="text-2xl font-bold text-gray-900">"Course not found"</h2>
                            <a
                                href="/courses"
                                class="inline-block mt-4 px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700"
                            >
                                "Back to Courses"
                            </a>
                        </div>
                    }
                    .into_any();
                };
                let credits = dto
                    .credits
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string());
                view! {
                    <div class="flex items-center gap-4">
                        <a href="/courses" class="flex items-center gap-2 px-3 py-2 rounded-lg text-gray-600 hover:bg-gray-100">
                            <Icon name=icons::ARROW_LEFT class="h-4 w-4"/>
                            "Back"
                        </a>
                        <div>
                            <h1 class="text-3xl font-bold text-gray-900">{dto.title.clone()}</h1>
                            <p class="text-gray-600">{dto.code.clone()}</p>
                        </div>
                    </div>

                    {dto.description.clone().map(|text| view! { <p class="text-gray-600">{text}</p> })}

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <SummaryCard label="Enrolled Students" value=dto.seats_label()/>
                        <SummaryCard label="Credits" value=credits/>
                        <SummaryCard
                            label="Instructor"
                            value=dto.instructor_name.clone().unwrap_or_else(|| "TBA".to_string())
                        />
                    </div>

                    <Show when=move || sees_roster(session.role())>
                        <div class="bg-white rounded-xl border border-gray-200">
                            <div class="px-6 py-4 border-b border-gray-200">
                                <h2 class="text-lg font-semibold text-gray-900">"Enrolled Students"</h2>
                                <p class="text-sm text-gray-500">"Students currently enrolled in this course"</p>
                            </div>
                            {move || {
                                if roster.with(Vec::is_empty) {
                                    return view! { <EmptyState message="No students enrolled yet"/> }.into_any();
                                }
                                view! {
                                    <table class="w-full text-sm">
                                        <thead class="text-left text-gray-600">
                                            <tr>
                                                <th class="px-6 py-3 font-medium">"Student ID"</th>
                                                <th class="px-6 py-3 font-medium">"Name"</th>
                                                <th class="px-6 py-3 font-medium">"Department"</th>
                                                <th class="px-6 py-3 font-medium">"Year"</th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-gray-100">
                                            <For
                                                each=move || roster.get()
                                                key=|student| student.id
                                                children=move |student| {
                                                    let name = student.full_name();
                                                    let href = format!("/students/{}", student.id);
                                                    view! {
                                                        <tr class="hover:bg-gray-50">
                                                            <td class="px-6 py-3 font-medium text-gray-900">{student.student_id}</td>
                                                            <td class="px-6 py-3">
                                                                {move || {
                                                                    if links_students() {
                                                                        view! {
                                                                            <a href=href.clone() class="text-blue-600 hover:underline">{name.clone()}</a>
                                                                        }
                                                                        .into_any()
                                                                    } else {
                                                                        name.clone().into_any()
                                                                    }
                                                                }}
                                                            </td>
                                                            <td class="px-6 py-3 text-gray-600">{student.department}</td>
                                                            <td class="px-6 py-3 text-gray-600">{year_label(student.year)}</td>
                                                        </tr>
                                                    }
                                                }
                                            />
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }}
                        </div>
                    </Show>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn SummaryCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-gray-200 p-6">
            <div class="text-sm font-medium text-gray-500">{label}</div>
            <div class="text-2xl font-bold text-gray-900 mt-2">{value}</div>
        </div>
    }
}
