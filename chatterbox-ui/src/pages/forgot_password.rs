//! Forgot Password Page

use chatterbox::auth;
use chatterbox::routes::Route as AppRoute;
use chatterbox::{ForgotPasswordForm, FormStatus};
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AuthCard, SubmitButton, TextField};
use crate::state::AppServices;

#[component]
pub fn ForgotPassword(services: AppServices) -> impl IntoView {
    let email = create_rw_signal(String::new());
    let status = create_rw_signal(FormStatus::Idle);
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }

        let form = ForgotPasswordForm {
            email: email.get_untracked(),
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
            match auth::forgot_password(&*client, &form).await {
                Ok(message) => {
                    status.set(FormStatus::Succeeded);
                    services.toasts.show_success(&message);
                    navigate(AppRoute::Login.path(), Default::default());
                }
                Err(e) => {
                    api::log_error("Password reset request failed", &e);
                    status.set(FormStatus::Failed(e.to_string()));
                    services.toasts.show_error(&e.to_string());
                }
            }
        });
    };

    view! {
        <AuthCard title="Reset password" subtitle="We will email you a link to choose a new one">
            <form on:submit=on_submit class="space-y-4">
                <TextField
                    label="Email"
                    value=email
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                />

                <SubmitButton
                    label="Send reset link"
                    busy_label="Sending..."
                    busy=Signal::derive(move || status.with(FormStatus::is_submitting))
                />
            </form>

            <p class="text-center text-sm text-gray-400">
                <A href=AppRoute::Login.path() class="text-primary-400 hover:text-primary-300">
                    "Back to sign in"
                </A>
            </p>
        </AuthCard>
    }
}
