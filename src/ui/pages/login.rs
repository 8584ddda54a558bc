//! Login page component
//!
//! Standalone page for signing in; redirects to the dashboard on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::session::HOME_PATH;
use crate::core::validation::{validate_email, validate_password};
use crate::ui::api::portal_client;
use crate::ui::common::{ErrorMessage, FormField, Spinner, SpinnerSize};
use crate::ui::session::use_session_context;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    // Form validation
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    // Redirect if already signed in
    let redirect = navigate.clone();
    Effect::new(move |_| {
        if session.is_restored() && session.is_logged_in() {
            redirect(HOME_PATH, Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        email_error.set(validate_email(&email_val).err().map(|e| e.to_string()));
        password_error.set(validate_password(&password_val).err().map(|e| e.to_string()));
        if email_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }

        loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match portal_client(session).login(&email_val, &password_val).await {
                Ok((token, user)) => {
                    session.login(token, user);
                    navigate(HOME_PATH, Default::default());
                }
                Err(e) => {
                    leptos::logging::warn!("Login failed: {}", e);
                    error.set(Some(e.login_message()));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100 p-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-lg p-6">
                <form on:submit=on_submit class="space-y-4">
                    <div class="text-center space-y-1">
                        <h2 class="text-2xl font-bold text-gray-900">"Welcome Back"</h2>
                        <p class="text-sm text-gray-600">
                            "Enter your credentials to access your account"
                        </p>
                    </div>

                    <ErrorMessage error=error/>

                    <FormField
                        label="Email".to_string()
                        input_type="email"
                        placeholder="admin@university.edu".to_string()
                        autocomplete="email"
                        value=email
                        on_input=Callback::new(move |v| {
                            email.set(v);
                            email_error.set(None);
                        })
                        disabled=loading
                        error=email_error
                    />

                    <FormField
                        label="Password".to_string()
                        input_type="password"
                        placeholder="••••••••".to_string()
                        autocomplete="current-password"
                        value=password
                        on_input=Callback::new(move |v| {
                            password.set(v);
                            password_error.set(None);
                        })
                        disabled=loading
                        error=password_error
                    />

                    <button
                        type="submit"
                        class="w-full py-2.5 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg disabled:opacity-50 disabled:cursor-not-allowed transition-colors"
                        disabled=move || loading.get()
                    >
                        {move || {
                            if loading.get() {
                                view! {
                                    <span class="flex items-center justify-center gap-2">
                                        <Spinner size=SpinnerSize::Small/>
                                        "Signing in..."
                                    </span>
                                }.into_any()
                            } else {
                                view! { <span class="block">"Sign In"</span> }.into_any()
                            }
                        }}
                    </button>
                </form>

                <div class="mt-4 p-3 bg-gray-50 rounded text-xs text-gray-700">
                    <p class="font-medium mb-1">"Admin Login:"</p>
                    <p>"Email: admin@university.edu"</p>
                    <p>"Password: admin123"</p>
                </div>
            </div>
        </div>
    }
}
