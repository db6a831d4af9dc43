//! Toast stack, bottom right

use leptos::*;

use crate::state::{ToastKind, Toasts};

#[component]
pub fn Toast(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="fixed bottom-6 right-4 z-[60] flex flex-col items-end space-y-2">
            <For
                each=move || toasts.queue.with(|queue| queue.entries().to_vec())
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    view! {
                        <button
                            type="button"
                            role="status"
                            title="Dismiss"
                            on:click=move |_| toasts.dismiss(id)
                            class=format!(
                                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg \
                                 shadow-lg text-left animate-slide-in",
                                tone(entry.kind)
                            )
                        >
                            <span class="text-lg">{glyph(entry.kind)}</span>
                            <span class="text-sm font-medium">{entry.text}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}

fn tone(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-emerald-600",
        ToastKind::Error => "bg-rose-600",
    }
}

fn glyph(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "!",
    }
}
