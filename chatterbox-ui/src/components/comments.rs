//! Comments Section Component
//!
//! Paged comment list for one post.

use chatterbox::{Comment, CommentPage};
use leptos::*;

use crate::api;
use crate::components::{format_timestamp, Avatar, Spinner};
use crate::state::AppServices;

/// Comments of `post_id`, fetched a page at a time.
///
/// Reloads from the first page whenever `reload` changes.
#[component]
pub fn CommentsSection(
    services: AppServices,
    post_id: String,
    #[prop(into)]
    total: Signal<u64>,
    #[prop(into)]
    reload: Signal<u32>,
) -> impl IntoView {
    let listing = create_rw_signal(CommentPage::new(&post_id, total.get_untracked()));
    let loading = create_rw_signal(false);
    let generation = store_value(Generation::default());
    let post_id = store_value(post_id);

    let fetch_next = move || {
        loading.set(true);
        let ticket = generation.with_value(Generation::current);
        let client = services.client();
        let mut next = listing.get_untracked();
        spawn_local(async move {
            let result = next.load_more(&*client).await;
            // A reload started meanwhile owns the listing now
            if !generation.with_value(|g| g.is_current(ticket)) {
                return;
            }
            match result {
                Ok(_) => listing.set(next),
                Err(e) => {
                    api::log_error("Failed to fetch comments", &e);
                    services.toasts.show_error("Could not load comments");
                }
            }
            loading.set(false);
        });
    };

    create_effect(move |_| {
        let _ = reload.get();
        generation.update_value(Generation::advance);
        let fresh = post_id.with_value(|id| CommentPage::new(id, total.get_untracked()));
        let has_more = fresh.has_more();
        listing.set(fresh);
        loading.set(false);
        if has_more {
            fetch_next();
        }
    });

    view! {
        <section class="space-y-3">
            <For
                each=move || listing.get().comments
                key=|comment| comment.id.clone()
                children=|comment| view! { <CommentItem comment=comment /> }
            />

            <Show when=move || loading.get()>
                <div class="flex justify-center py-2"><Spinner /></div>
            </Show>

            <Show when=move || !loading.get() && listing.get().has_more()>
                <button
                    type="button"
                    on:click=move |_| fetch_next()
                    class="text-sm text-primary-400 hover:text-primary-300"
                >
                    "Load more comments"
                </button>
            </Show>

            <Show when=move || !loading.get() && listing.get().comments.is_empty()>
                <p class="text-sm text-gray-500">"No comments yet"</p>
            </Show>
        </section>
    }
}

/// Counts listing resets so late responses from an older listing are dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Generation(u32);

impl Generation {
    fn current(&self) -> u32 {
        self.0
    }

    fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    fn is_current(&self, ticket: u32) -> bool {
        self.0 == ticket
    }
}

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let created = format_timestamp(&comment.created_at);
    let content = comment.content;
    let has_content = !content.trim().is_empty();

    view! {
        <div class="flex space-x-3">
            <Avatar
                name=comment.author.display_name.clone()
                url=comment.author.avatar_url
                size="w-8 h-8"
            />
            <div class="flex-1 bg-gray-700 rounded-lg px-3 py-2 space-y-1">
                <div class="flex items-baseline justify-between">
                    <span class="font-semibold text-sm">{comment.author.display_name}</span>
                    <span class="text-xs text-gray-400">{created}</span>
                </div>
                {has_content.then(|| view! { <p class="text-sm whitespace-pre-line">{content}</p> })}
                {comment.image_url.map(|src| view! {
                    <img src=src alt="Comment image" class="max-h-48 rounded-lg" />
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_from_before_reload_is_stale() {
        let mut generation = Generation::default();
        let load_more = generation.current();
        assert!(generation.is_current(load_more));

        // Posting a comment reloads the list while "load more" is in flight
        generation.advance();
        let reload = generation.current();

        assert!(!generation.is_current(load_more));
        assert!(generation.is_current(reload));
    }

    #[test]
    fn test_generation_wraps() {
        let mut generation = Generation(u32::MAX);
        generation.advance();
        assert_eq!(generation, Generation(0));
    }
}
