//! Auth Form Building Blocks
//!
//! Card layout, labelled inputs and the submit button shared by the login,
//! registration and password recovery pages.

use leptos::*;

use crate::components::Spinner;

/// Centered card with a title
#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[80vh]">
            <div class="w-full max-w-md bg-gray-800 rounded-xl shadow-lg p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="text-gray-400 mt-1">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}

/// Labelled input bound to a string signal
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(optional)]
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-300 mb-1">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-700 border border-gray-600 rounded-lg px-4 py-2
                       focus:outline-none focus:border-primary-500"
            />
        </label>
    }
}

/// Submit button that locks while a request is in flight
#[component]
pub fn SubmitButton(
    label: &'static str,
    busy_label: &'static str,
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || busy.get()
            class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                   disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                   transition-colors flex items-center justify-center space-x-2"
        >
            {move || if busy.get() {
                view! { <Spinner label=busy_label /> }.into_view()
            } else {
                view! {
                    <span>{label}</span>
                }.into_view()
            }}
        </button>
    }
}
