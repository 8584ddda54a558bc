//! Courses page component
//!
//! Card grid of courses with search. Students enroll from here; admins can
//! delete a course after confirming.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::CourseDto;
use crate::core::filter::filter_by_term;
use crate::core::session::{Role, User};
use crate::ui::api::portal_client;
use crate::ui::common::{
    Badge, BadgeSize, ConfirmDialog, EmptyState, ErrorMessage, LoadingSpinner, SearchInput,
    SuccessMessage,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

/// Students share their account id with their student record, the same
/// key `/results/student/{id}` is queried with
fn my_enrollments_href(user: Option<User>) -> Option<String> {
    user.filter(|u| u.role == Role::Student)
        .map(|u| format!("/students/{}", u.id))
}

/// Courses page component
#[component]
pub fn CoursesPage() -> impl IntoView {
    let session = use_session_context();

    let courses = RwSignal::new(Vec::<CourseDto>::new());
    let search = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    // Bumped to refetch after a change
    let reload = RwSignal::new(0u32);

    let enrolling = RwSignal::new(None::<i64>);
    let delete_target = RwSignal::new(None::<(i64, String)>); // (id, title)
    let deleting = RwSignal::new(false);

    let role = move || session.role();

    Effect::new(move |_| {
        reload.track();
        if !session.is_logged_in() {
            return;
        }
        spawn_local(async move {
            loading.set(true);
            match portal_client(session).courses().await {
                Ok(list) => {
                    courses.set(list);
                    error.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("Failed to load courses: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let enroll = move |course_id: i64| {
        enrolling.set(Some(course_id));
        notice.set(None);
        spawn_local(async move {
            match portal_client(session).enroll(course_id).await {
                Ok(()) => {
                    notice.set(Some("Enrolled successfully".to_string()));
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

    let confirm_delete = Callback::new(move |_| {
        let Some((id, _)) = delete_target.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match portal_client(session).delete_course(id).await {
                Ok(()) => {
                    courses.update(|list| list.retain(|c| c.id != id));
                    delete_target.set(None);
                }
                Err(e) => {
                    leptos::logging::warn!("Failed to delete course {}: {}", id, e);
                    error.set(Some(e.to_string()));
                    delete_target.set(None);
                }
            }
            deleting.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        courses.with(|list| {
            search.with(|term| {
                filter_by_term(list, term)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-gray-900">"Courses"</h1>
                    <p class="text-gray-600 mt-1">"Browse and manage available courses"</p>
                </div>
                {move || my_enrollments_href(session.user()).map(|href| view! {
                    <a
                        href=href
                        class="px-4 py-2 rounded-lg border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-50"
                    >
                        "My Enrollments"
                    </a>
                })}
            </div>

            <SearchInput value=search placeholder="Search courses..."/>
            <ErrorMessage error=error/>
            <SuccessMessage message=notice/>

            {move || {
                if loading.get() && courses.with(Vec::is_empty) {
                    return view! { <LoadingSpinner/> }.into_any();
                }
                if visible.with(Vec::is_empty) {
                    return view! { <EmptyState message="No courses found"/> }.into_any();
                }
                view! {
                    <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                        <For
                            each=move || visible.get()
                            key=|course| (course.id, course.enrolled_students)
                            children=move |course| {
                                let id = course.id;
                                let title = course.title.clone();
                                let full = course.is_full();
                                view! {
                                    <div class="bg-white rounded-xl border border-gray-200 p-5 flex flex-col hover:shadow-lg transition-shadow">
                                        <CourseCardBody course=course/>
                                        <div class="mt-4">
                                            <Show when=move || role() == Some(Role::Student)>
                                                <button
                                                    class="w-full py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                                                    disabled=move || full || enrolling.get().is_some()
                                                    on:click=move |_| enroll(id)
                                                >
                                                    {move || {
                                                        if full {
                                                            "Course Full"
                                                        } else if enrolling.get() == Some(id) {
                                                            "Enrolling..."
                                                        } else {
                                                            "Enroll Now"
                                                        }
                                                    }}
                                                </button>
                                            </Show>
                                            <Show when=move || role() == Some(Role::Admin)>
                                                {
                                                    let title = title.clone();
                                                    view! {
                                                        <button
                                                            class="w-full py-2 rounded-lg bg-red-600 text-white text-sm font-medium hover:bg-red-700 flex items-center justify-center gap-2"
                                                            on:click=move |_| delete_target.set(Some((id, title.clone())))
                                                        >
                                                            <Icon name=icons::TRASH class="w-4 h-4"/>
                                                            "Delete"
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
            }}

            <ConfirmDialog
                title="Delete Course".to_string()
                message=Signal::derive(move || {
                    delete_target
                        .get()
                        .map(|(_, title)| format!("Are you sure you want to delete \"{}\"? This cannot be undone.", title))
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

#[component]
fn CourseCardBody(course: CourseDto) -> impl IntoView {
    let credits = course.credits.map(|c| format!("{} Credits", c));
    let instructor = course
        .instructor_name
        .clone()
        .unwrap_or_else(|| "TBA".to_string());
    let seats = format!("{} Students", course.seats_label());

    view! {
        <div class="flex justify-between items-start">
            <div>
                <a href=format!("/courses/{}", course.id) class="text-xl font-semibold text-gray-900 hover:text-blue-600">
                    {course.title}
                </a>
                <p class="text-sm text-gray-500 mt-1">{course.code}</p>
            </div>
            {credits.map(|label| view! { <Badge size=BadgeSize::Small>{label}</Badge> })}
        </div>
        <p class="text-gray-600 my-4 line-clamp-2">{course.description.unwrap_or_default()}</p>
        <div class="space-y-2 text-sm text-gray-500">
            <div class="flex items-center gap-2">
                <Icon name=icons::BOOK_OPEN class="h-4 w-4"/>
                {format!("Instructor: {}", instructor)}
            </div>
            <div class="flex items-center gap-2">
                <Icon name=icons::USERS class="h-4 w-4"/>
                {seats}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: 9,
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: "sam@uni.edu".to_string(),
            role,
        }
    }

    #[test]
    fn test_my_enrollments_link_for_students_only() {
        assert_eq!(
            my_enrollments_href(Some(user(Role::Student))).as_deref(),
            Some("/students/9")
        );
        assert_eq!(my_enrollments_href(Some(user(Role::Admin))), None);
        assert_eq!(my_enrollments_href(None), None);
    }
}
