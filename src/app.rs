use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::core::session::HOME_PATH;
use crate::ui::pages::{
    CourseDetailPage, CoursesPage, DashboardPage, LoginPage, NotFoundPage, ProfilePage,
    ResultDetailPage, ResultsPage, StudentDetailPage, StudentsPage, UsersPage,
};
use crate::ui::{DashboardLayout, provide_session_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session shared by the pages, the layout and the API client
    provide_session_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/course-portal.css"/>

        <Title text="Course Management System"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH/> }/>
                <Route path=path!("/login") view=LoginPage/>
                // Everything below requires a signed-in user
                <ParentRoute path=path!("") view=DashboardLayout>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/courses") view=CoursesPage/>
                    <Route path=path!("/courses/:id") view=CourseDetailPage/>
                    <Route path=path!("/students") view=StudentsPage/>
                    <Route path=path!("/students/:id") view=StudentDetailPage/>
                    <Route path=path!("/results") view=ResultsPage/>
                    <Route path=path!("/results/:id") view=ResultDetailPage/>
                    <Route path=path!("/users") view=UsersPage/>
                    <Route path=path!("/profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
