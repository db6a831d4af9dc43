//! Register Page

use chatterbox::auth;
use chatterbox::routes::Route as AppRoute;
use chatterbox::{FormStatus, RegisterForm};
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AuthCard, SubmitButton, TextField};
use crate::state::AppServices;

#[component]
pub fn Register(services: AppServices) -> impl IntoView {
    let display_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let status = create_rw_signal(FormStatus::Idle);
    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_submitting() {
            return;
        }

        let form = RegisterForm {
            display_name: display_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
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
            match auth::register(&*client, &form).await {
                Ok(message) => {
                    status.set(FormStatus::Succeeded);
                    services.toasts.show_success(&message);
                    navigate(AppRoute::Login.path(), Default::default());
                }
                Err(e) => {
                    api::log_error("Registration failed", &e);
                    status.set(FormStatus::Failed(e.to_string()));
                    services.toasts.show_error(&e.to_string());
                }
            }
        });
    };

    view! {
        <AuthCard title="Create account" subtitle="Join the conversation">
            <form on:submit=on_submit class="space-y-4">
                <TextField label="Display name" value=display_name autocomplete="nickname" />
                <TextField
                    label="Email"
                    value=email
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                />
                <TextField
                    label="Phone number"
                    value=phone
                    input_type="tel"
                    placeholder="0912345678"
                    autocomplete="tel"
                />
                <TextField
                    label="Password"
                    value=password
                    input_type="password"
                    autocomplete="new-password"
                />
                <TextField
                    label="Confirm password"
                    value=confirm_password
                    input_type="password"
                    autocomplete="new-password"
                />

                <SubmitButton
                    label="Register"
                    busy_label="Creating account..."
                    busy=Signal::derive(move || status.with(FormStatus::is_submitting))
                />
            </form>

            <p class="text-center text-sm text-gray-400">
                "Already registered? "
                <A href=AppRoute::Login.path() class="text-primary-400 hover:text-primary-300">
                    "Sign in"
                </A>
            </p>
        </AuthCard>
    }
}
