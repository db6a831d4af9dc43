//! Login Page
//!
//! Sign in with an email address or phone number.

use chatterbox::auth;
use chatterbox::routes::Route as AppRoute;
use chatterbox::{FormStatus, LoginForm};
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AuthCard, SubmitButton, TextField};
use crate::state::AppServices;

#[component]
pub fn Login(services: AppServices) -> impl IntoView {
    let identifier = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let status = create_rw_signal(FormStatus::Idle);
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }

        let form = LoginForm {
            identifier: identifier.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = form.validate() {
            status.set(FormStatus::Failed(e.to_string()));
            services.toasts.show_error(&e.to_string());
            return;
        }

        status.set(FormStatus::Submitting);
        let client = services.client();
        let navigate = navigate.clone();
        spawn_local(async move {
            let mut session = services.session.get_untracked();
            match auth::login(&*client, &mut session, &form).await {
                Ok(profile) => {
                    services.session.set(session);
                    status.set(FormStatus::Succeeded);
                    password.set(String::new());
                    services
                        .toasts
                        .show_success(&format!("Welcome back, {}!", profile.display_name));
                    navigate(AppRoute::Feed.path(), Default::default());
                }
                Err(e) => {
                    api::log_error("Login failed", &e);
                    status.set(FormStatus::Failed(e.to_string()));
                    services.toasts.show_error(&e.to_string());
                }
            }
        });
    };

    view! {
        <AuthCard title="Sign in" subtitle="Welcome back to Chatterbox">
            <form on:submit=on_submit class="space-y-4">
                <TextField
                    label="Email or phone number"
                    value=identifier
                    placeholder="you@example.com"
                    autocomplete="username"
                />
                <TextField
                    label="Password"
                    value=password
                    input_type="password"
                    autocomplete="current-password"
                />

                <div class="text-right">
                    <A href=AppRoute::ForgotPassword.path() class="text-sm text-primary-400 hover:text-primary-300">
                        "Forgot password?"
                    </A>
                </div>

                <SubmitButton
                    label="Sign in"
                    busy_label="Signing in..."
                    busy=Signal::derive(move || status.with(FormStatus::is_submitting))
                />
            </form>

            <p class="text-center text-sm text-gray-400">
                "No account yet? "
                <A href=AppRoute::Register.path() class="text-primary-400 hover:text-primary-300">
                    "Create one"
                </A>
            </p>
        </AuthCard>
    }
}
