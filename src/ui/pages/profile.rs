//! User profile page component
//!
//! Shows the signed-in user's account, lets them change their name and
//! password. A successful rename is pushed into the session so the header
//! picks it up immediately.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api::{UpdateUserRequest, UserDto};
use crate::core::session::UserUpdate;
use crate::core::validation::{validate_name, validate_password_change};
use crate::ui::api::portal_client;
use crate::ui::common::{
    ErrorMessage, FormField, LoadingSpinner, RoleBadge, Spinner, SpinnerSize, StatusBadge,
    SuccessMessage,
};
use crate::ui::header::UserAvatar;
use crate::ui::session::use_session_context;

/// Profile page component
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session_context();

    let profile = RwSignal::new(None::<UserDto>);
    let loading = RwSignal::new(true);
    let success = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    // Personal information form
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let first_name_error = RwSignal::new(None::<String>);
    let last_name_error = RwSignal::new(None::<String>);
    let updating = RwSignal::new(false);

    // Password form
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_error = RwSignal::new(None::<String>);
    let changing_password = RwSignal::new(false);

    // Load once per signed-in user
    Effect::new(move |loaded_for: Option<Option<i64>>| {
        let user_id = session.user().map(|u| u.id);
        if user_id == loaded_for.flatten() {
            return user_id;
        }
        if let Some(id) = user_id {
            spawn_local(async move {
                loading.set(true);
                match portal_client(session).profile(id).await {
                    Ok(dto) => {
                        first_name.set(dto.first_name.clone());
                        last_name.set(dto.last_name.clone());
                        profile.set(Some(dto));
                    }
                    Err(e) => {
                        leptos::logging::warn!("Failed to load profile: {}", e);
                        error.set(Some("Failed to load profile data".to_string()));
                    }
                }
                loading.set(false);
            });
        }
        user_id
    });

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = profile.get_untracked() else {
            return;
        };
        let first = first_name.get_untracked();
        let last = last_name.get_untracked();

        first_name_error.set(validate_name("First name", &first).err().map(|e| e.to_string()));
        last_name_error.set(validate_name("Last name", &last).err().map(|e| e.to_string()));
        if first_name_error.get_untracked().is_some() || last_name_error.get_untracked().is_some() {
            return;
        }

        updating.set(true);
        success.set(None);
        error.set(None);
        spawn_local(async move {
            let request = UpdateUserRequest::rename(&current, first, last);
            match portal_client(session).update_user(current.id, &request).await {
                Ok(updated) => {
                    session.update_user_info(UserUpdate::names(
                        updated.first_name.clone(),
                        updated.last_name.clone(),
                    ));
                    profile.set(Some(updated));
                    success.set(Some("Profile updated successfully".to_string()));
                }
                Err(e) => {
                    leptos::logging::warn!("Failed to update profile: {}", e);
                    error.set(Some("Failed to update profile".to_string()));
                }
            }
            updating.set(false);
        });
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = profile.with_untracked(|p| p.as_ref().map(|p| p.id)) else {
            return;
        };
        let new = new_password.get_untracked();
        if let Err(e) = validate_password_change(
            &current_password.get_untracked(),
            &new,
            &confirm_password.get_untracked(),
        ) {
            password_error.set(Some(e.to_string()));
            return;
        }

        password_error.set(None);
        changing_password.set(true);
        success.set(None);
        error.set(None);
        spawn_local(async move {
            match portal_client(session).change_password(id, &new).await {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    success.set(Some("Password changed successfully".to_string()));
                }
                Err(e) => {
                    leptos::logging::warn!("Failed to change password: {}", e);
                    error.set(Some("Failed to change password".to_string()));
                }
            }
            changing_password.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">"My Profile"</h1>

            <SuccessMessage message=success/>
            <ErrorMessage error=error/>

            {move || {
                if loading.get() {
                    return view! { <LoadingSpinner/> }.into_any();
                }
                let Some(dto) = profile.get() else {
                    return ().into_any();
                };
                let user = session.user();
                view! {
                    <div class="bg-white rounded-xl border border-gray-200 p-6">
                        <div class="flex items-center gap-4">
                            {user.map(|u| view! { <UserAvatar user=u size=64/> })}
                            <div>
                                <h2 class="text-2xl font-semibold text-gray-900">{dto.full_name()}</h2>
                                <p class="text-sm text-gray-500 mt-1">{dto.email.clone()}</p>
                            </div>
                        </div>
                        <div class="grid grid-cols-2 gap-4 mt-6">
                            <div>
                                <div class="text-sm font-medium text-gray-500 mb-1">"Role"</div>
                                <RoleBadge role=dto.role/>
                            </div>
                            <div>
                                <div class="text-sm font-medium text-gray-500 mb-1">"Status"</div>
                                <StatusBadge enabled=dto.enabled/>
                            </div>
                        </div>
                    </div>
                }.into_any()
            }}

            <Show when=move || profile.with(Option::is_some)>
                <form
                    on:submit=on_profile_submit
                    class="bg-white rounded-xl border border-gray-200 p-6 space-y-4"
                >
                    <div>
                        <h2 class="text-lg font-semibold text-gray-900">"Personal Information"</h2>
                        <p class="text-sm text-gray-500">"Update your personal details"</p>
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <FormField
                            label="First Name".to_string()
                            autocomplete="given-name"
                            value=first_name
                            on_input=Callback::new(move |v| {
                                first_name.set(v);
                                first_name_error.set(None);
                            })
                            disabled=updating
                            error=first_name_error
                        />
                        <FormField
                            label="Last Name".to_string()
                            autocomplete="family-name"
                            value=last_name
                            on_input=Callback::new(move |v| {
                                last_name.set(v);
                                last_name_error.set(None);
                            })
                            disabled=updating
                            error=last_name_error
                        />
                    </div>
                    <div class="space-y-1.5">
                        <FormField
                            label="Email".to_string()
                            input_type="email"
                            value=Signal::derive(move || {
                                profile.with(|p| p.as_ref().map(|p| p.email.clone()).unwrap_or_default())
                            })
                            on_input=Callback::new(|_| {})
                            disabled=true
                        />
                        <p class="text-xs text-gray-500">"Email cannot be changed"</p>
                    </div>
                    <SubmitButton busy=updating label="Save Changes" busy_label="Updating..."/>
                </form>

                <form
                    on:submit=on_password_submit
                    class="bg-white rounded-xl border border-gray-200 p-6 space-y-4"
                >
                    <div>
                        <h2 class="text-lg font-semibold text-gray-900">"Change Password"</h2>
                        <p class="text-sm text-gray-500">"Update your password to keep your account secure"</p>
                    </div>
                    <ErrorMessage error=password_error/>
                    <FormField
                        label="Current Password".to_string()
                        input_type="password"
                        autocomplete="current-password"
                        value=current_password
                        on_input=Callback::new(move |v| current_password.set(v))
                        disabled=changing_password
                    />
                    <FormField
                        label="New Password".to_string()
                        input_type="password"
                        autocomplete="new-password"
                        value=new_password
                        on_input=Callback::new(move |v| new_password.set(v))
                        disabled=changing_password
                    />
                    <FormField
                        label="Confirm Password".to_string()
                        input_type="password"
                        autocomplete="new-password"
                        value=confirm_password
                        on_input=Callback::new(move |v| confirm_password.set(v))
                        disabled=changing_password
                    />
                    <SubmitButton
                        busy=changing_password
                        label="Change Password"
                        busy_label="Changing Password..."
                    />
                </form>
            </Show>
        </div>
    }
}

#[component]
fn SubmitButton(
    #[prop(into)] busy: Signal<bool>,
    label: &'static str,
    busy_label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="px-4 py-2 rounded-lg bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 disabled:opacity-50 flex items-center gap-2"
            disabled=move || busy.get()
        >
            <Show when=move || busy.get()>
                <Spinner size=SpinnerSize::Small/>
            </Show>
            {move || if busy.get() { busy_label } else { label }}
        </button>
    }
}
