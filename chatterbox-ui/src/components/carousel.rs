//! Image Carousel Component
//!
//! Shows one image of a post at a time with wrapping prev/next controls.

use chatterbox::Carousel;
use leptos::*;

/// Carousel over a post's image URLs
#[component]
pub fn ImageCarousel(urls: Vec<String>) -> impl IntoView {
    let carousel = create_rw_signal(Carousel::new(urls.len()));
    let urls = store_value(urls);

    let current = move || {
        let state = carousel.get();
        urls.with_value(|urls| state.current(urls).map(str::to_string))
    };

    let previous = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        carousel.update(Carousel::previous);
    };
    let next = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        carousel.update(Carousel::next);
    };

    view! {
        <Show when=move || !carousel.get().is_empty()>
            <div class="relative bg-black rounded-lg overflow-hidden">
                {move || current().map(|src| view! {
                    <img src=src alt="Post image" class="w-full max-h-[60vh] object-contain" />
                })}

                <Show when=move || carousel.get().has_controls()>
                    <button
                        type="button"
                        aria-label="Previous image"
                        on:click=previous
                        class="absolute left-2 top-1/2 -translate-y-1/2 bg-gray-900/70
                               hover:bg-gray-900 rounded-full w-9 h-9"
                    >
                        "‹"
                    </button>
                    <button
                        type="button"
                        aria-label="Next image"
                        on:click=next
                        class="absolute right-2 top-1/2 -translate-y-1/2 bg-gray-900/70
                               hover:bg-gray-900 rounded-full w-9 h-9"
                    >
                        "›"
                    </button>
                </Show>

                {move || carousel.get().position_label().map(|label| view! {
                    <span class="absolute bottom-2 right-2 bg-gray-900/70 text-xs px-2 py-1 rounded">
                        {label}
                    </span>
                })}
            </div>
        </Show>
    }
}
