//! One student's record and course enrollments
//!
//! Staff see the record and the courses taken. A student looking at their
//! own record can also drop courses and enroll in the ones still open.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::core::api::{CourseDto, StudentDto};
use crate::core::display::year_label;
use crate::core::filter::filter_by_term;
use crate::core::session::Role;
use crate::ui::api::portal_client;
use crate::ui::common::{
    Badge, BadgeSize, ConfirmDialog, EmptyState, ErrorMessage, LoadingSpinner, SearchInput,
    SuccessMessage,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Enrolled,
    Available,
}

/// Students cannot open the list, so their way back is the course catalogue
fn back_href(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Student) => "/courses",
        _ => "/students",
    }
}

/// Student detail page component
#[component]
pub fn StudentDetailPage() -> impl IntoView {
    let session = use_session_context();
    let params = use_params_map();
    let student_id = Memo::new(move |_| params.get().get("id").and_then(|id| id.parse::<i64>().ok()));

    let student = RwSignal::new(None::<StudentDto>);
    let courses = RwSignal::new(Vec::<CourseDto>::new());
    let available = RwSignal::new(Vec::<CourseDto>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    // Bumped after an enrollment change
    let reload = RwSignal::new(0u32);

    let tab = RwSignal::new(Tab::Enrolled);
    let search = RwSignal::new(String::new());
    let enrolling = RwSignal::new(None::<i64>);
    let drop_target = RwSignal::new(None::<i64>);
    let dropping = RwSignal::new(false);

    let own = Memo::new(move |_| {
        let user = session.user();
        student.with(|s| s.as_ref().zip(user).is_some_and(|(s, u)| s.belongs_to(&u)))
    });

    Effect::new(move |_| {
        reload.track();
        let Some(id) = student_id.get() else {
            loading.set(false);
            return;
        };
        if !session.is_logged_in() {
            return;
        }
        spawn_local(async move {
            let client = portal_client(session);
            match client.student(id).await {
                Ok(dto) => student.set(Some(dto)),
                Err(e) => {
                    if !e.is_missing() {
                        leptos::logging::warn!("Failed to load student {}: {}", id, e);
                        error.set(Some(e.to_string()));
                    }
                    student.set(None);
                    loading.set(false);
                    return;
                }
            }
            match client.student_courses(id).await {
                Ok(list) => courses.set(list),
                Err(e) => {
                    leptos::logging::warn!("Failed to load courses of student {}: {}", id, e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    Effect::new(move |_| {
        reload.track();
        if !own.get() || tab.get() != Tab::Available {
            return;
        }
        spawn_local(async move {
            match portal_client(session).available_courses().await {
                Ok(list) => available.set(list),
                Err(e) => {
                    leptos::logging::warn!("Failed to load available courses: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        });
    });

    let enroll = move |course_id: i64| {
        enrolling.set(Some(course_id));
        notice.set(None);
        error.set(None);
        spawn_local(async move {
            match portal_client(session).enroll(course_id).await {
                Ok(()) => {
                    notice.set(Some("Successfully enrolled in course".to_string()));
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    leptos::logging::warn!("Failed to enroll in course {}: {}", course_id, e);
                    error.set(Some(e.to_string()));
                }
            }
            enrolling.set(None);
        });
    };

    let confirm_drop = Callback::new(move |_| {
        let Some(course_id) = drop_target.get_untracked() else {
            return;
        };
        dropping.set(true);
        notice.set(None);
        error.set(None);
        spawn_local(async move {
            match portal_client(session).drop_course(course_id).await {
                Ok(()) => {
                    courses.update(|list| list.retain(|c| c.id != course_id));
                    notice.set(Some("Course dropped successfully".to_string()));
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    leptos::logging::warn!("Failed to drop course {}: {}", course_id, e);
                    error.set(Some(e.to_string()));
                }
            }
            drop_target.set(None);
            dropping.set(false);
        });
    });

    let visible_available = Memo::new(move |_| {
        available.with(|list| {
            search.with(|term| filter_by_term(list, term).into_iter().cloned().collect::<Vec<_>>())
        })
    });

    let back = move || back_href(session.role());

    let tab_button = move |which: Tab, label: &'static str| {
        view! {
            <button
                class="px-3 py-1.5 rounded-md text-sm font-medium transition-colors"
                class=("bg-white", move || tab.get() == which)
                class=("shadow-sm", move || tab.get() == which)
                class=("text-gray-500", move || tab.get() != which)
                on:click=move |_| tab.set(which)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="space-y-6">
            <ErrorMessage error=error/>
            <SuccessMessage message=notice/>

            {move || {
                if loading.get() && student.with(Option::is_none) {
                    return view! { <LoadingSpinner/> }.into_any();
                }
                let Some(dto) = student.get() else {
                    return view! {
                        <div class="text-center py-12">
                            <h2 class="text-2xl font-bold text-gray-900">"Student not found"</h2>
                            <a
                                href=back
                                class="inline-block mt-4 px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700"
                            >
                                "Back to Students"
                            </a>
                        </div>
                    }
                    .into_any();
                };
                let enrolled = format!("{} Enrolled Courses", dto.enrolled_count());
                view! {
                    <div class="flex items-center gap-4">
                        <a href=back class="flex items-center gap-2 px-3 py-2 rounded-lg text-gray-600 hover:bg-gray-100">
                            <Icon name=icons::ARROW_LEFT class="h-4 w-4"/>
                            "Back"
                        </a>
                        <div>
                            <h1 class="text-3xl font-bold text-gray-900">{dto.full_name()}</h1>
                            <p class="text-gray-600">{dto.student_id.clone()}</p>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                        <div class="bg-white rounded-xl border border-gray-200 p-6 space-y-3 text-sm">
                            <h2 class="text-lg font-semibold text-gray-900">"Student Information"</h2>
                            <div class="font-medium text-gray-900">{dto.full_name()}</div>
                            <div class="text-gray-600">{dto.email.clone()}</div>
                            <div class="flex items-center gap-2 text-gray-600">
                                <Icon name=icons::GRADUATION_CAP class="h-4 w-4"/>
                                {dto.department.clone()}
                            </div>
                            <div class="text-gray-600">{year_label(dto.year)}</div>
                            <div class="flex items-center gap-2 text-gray-600">
                                <Icon name=icons::BOOK_OPEN class="h-4 w-4"/>
                                {enrolled}
                            </div>
                        </div>

                        <div class="bg-white rounded-xl border border-gray-200 lg:col-span-2">
                            <div class="px-6 py-4 border-b border-gray-200 flex justify-between items-center">
                                <div>
                                    <h2 class="text-lg font-semibold text-gray-900">"Course Management"</h2>
                                    <p class="text-sm text-gray-500">"View and manage course enrollments"</p>
                                </div>
                                <Show when=move || own.get()>
                                    <div class="inline-flex gap-1 p-1 rounded-lg bg-gray-100">
                                        {tab_button(Tab::Enrolled, "Enrolled Courses")}
                                        {tab_button(Tab::Available, "Available Courses")}
                                    </div>
                                </Show>
                            </div>
                            {move || {
                                if own.get() && tab.get() == Tab::Available {
                                    view! {
                                        <div class="p-6 space-y-4">
                                            <SearchInput value=search placeholder="Search courses..."/>
                                            <AvailableCourses courses=visible_available enrolling=enrolling on_enroll=Callback::new(enroll)/>
                                        </div>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <EnrollmentTable
                                            courses=courses
                                            can_drop=own
                                            on_drop=Callback::new(move |id| drop_target.set(Some(id)))
                                        />
                                    }
                                    .into_any()
                                }
                            }}
                        </div>
                    </div>
                }
                .into_any()
            }}

            <ConfirmDialog
                title="Drop Course".to_string()
                message="Are you sure you want to drop this course?".to_string()
                is_open=Signal::derive(move || drop_target.get().is_some())
                on_confirm=confirm_drop
                on_cancel=Callback::new(move |_| drop_target.set(None))
                confirm_text="Drop"
                busy_text="Dropping..."
                busy=dropping
            />
        </div>
    }
}

/// Courses the student is enrolled in
#[component]
fn EnrollmentTable(
    #[prop(into)] courses: Signal<Vec<CourseDto>>,
    #[prop(into)] can_drop: Signal<bool>,
    on_drop: Callback<i64>,
) -> impl IntoView {
    move || {
        if courses.with(Vec::is_empty) {
            return view! { <EmptyState message="No courses enrolled"/> }.into_any();
        }
        view! {
            <table class="w-full text-sm">
                <thead class="text-left text-gray-600">
                    <tr>
                        <th class="px-6 py-3 font-medium">"Code"</th>
                        <th class="px-6 py-3 font-medium">"Title"</th>
                        <th class="px-6 py-3 font-medium">"Instructor"</th>
                        <th class="px-6 py-3 font-medium">"Credits"</th>
                        <Show when=move || can_drop.get()>
                            <th class="px-6 py-3"></th>
                        </Show>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-100">
                    <For
                        each=move || courses.get()
                        key=|course| course.id
                        children=move |course| {
                            let id = course.id;
                            view! {
                                <tr class="hover:bg-gray-50">
                                    <td class="px-6 py-3 font-medium text-gray-900">{course.code}</td>
                                    <td class="px-6 py-3">{course.title}</td>
                                    <td class="px-6 py-3 text-gray-600">
                                        {course.instructor_name.unwrap_or_else(|| "TBA".to_string())}
                                    </td>
                                    <td class="px-6 py-3">
                                        {course.credits.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <Show when=move || can_drop.get()>
                                        <td class="px-6 py-3 text-right">
                                            <button
                                                class="p-2 rounded text-red-500 hover:text-red-700 hover:bg-red-50"
                                                title="Drop course"
                                                on:click=move |_| on_drop.run(id)
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
        }
        .into_any()
    }
}

/// Open courses the student can still join
#[component]
fn AvailableCourses(
    #[prop(into)] courses: Signal<Vec<CourseDto>>,
    enrolling: RwSignal<Option<i64>>,
    on_enroll: Callback<i64>,
) -> impl IntoView {
    move || {
        if courses.with(Vec::is_empty) {
            return view! { <EmptyState message="No available courses found"/> }.into_any();
        }
        view! {
            <div class="divide-y divide-gray-100">
                <For
                    each=move || courses.get()
                    key=|course| (course.id, course.enrolled_students)
                    children=move |course| {
                        let id = course.id;
                        let full = course.is_full();
                        view! {
                            <div class="flex items-center justify-between py-3">
                                <div>
                                    <div class="font-medium text-gray-900">{course.code.clone()}" - "{course.title.clone()}</div>
                                    <div class="text-xs text-gray-500">
                                        {course.instructor_name.clone().unwrap_or_else(|| "TBA".to_string())}
                                    </div>
                                </div>
                                <div class="flex items-center gap-3">
                                    <span class="text-sm" class:text-red-600=full class:text-gray-600=!full>
                                        {course.seats_label()}
                                    </span>
                                    {course.credits.map(|c| view! {
                                        <Badge size=BadgeSize::Small>{format!("{} Credits", c)}</Badge>
                                    })}
                                    <button
                                        class="px-3 py-1.5 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                                        disabled=move || full || enrolling.get().is_some()
                                        on:click=move |_| on_enroll.run(id)
                                    >
                                        {move || {
                                            if full {
                                                "Full"
                                            } else if enrolling.get() == Some(id) {
                                                "Enrolling..."
                                            } else {
                                                "Enroll"
                                            }
                                        }}
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_link_by_role() {
        assert_eq!(back_href(Some(Role::Student)), "/courses");
        assert_eq!(back_href(Some(Role::Admin)), "/students");
        assert_eq!(back_href(None), "/students");
    }
}
