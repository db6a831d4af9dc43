//! Post Detail Component
//!
//! Modal with the full post, its images, comments and the comment form.

use chatterbox::Post;
use leptos::*;

use crate::components::post_card::comment_count_label;
use crate::components::{format_timestamp, Avatar, CommentForm, CommentsSection, ImageCarousel};
use crate::state::AppServices;

#[component]
pub fn PostDetail(
    services: AppServices,
    post: Post,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let total_comments = create_rw_signal(post.total_comments);
    let reload = create_rw_signal(0u32);

    let on_posted = move |_: ()| {
        total_comments.update(|n| *n += 1);
        reload.update(|n| *n = n.wrapping_add(1));
    };

    let created = format_timestamp(&post.created_at);
    let reactions = post.total_reactions;
    let has_content = !post.content.trim().is_empty();

    view! {
        <div
            on:click=move |_| on_close.call(())
            class="fixed inset-0 z-50 bg-black/70 flex items-start justify-center overflow-y-auto py-8"
        >
            <div
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
                class="w-full max-w-2xl bg-gray-800 rounded-xl shadow-xl"
            >
                <header class="flex items-center justify-between p-4 border-b border-gray-700">
                    <div class="flex items-center space-x-3">
                        <Avatar name=post.author.display_name.clone() url=post.author.avatar_url.clone() />
                        <div>
                            <div class="font-semibold">{post.author.display_name.clone()}</div>
                            <div class="text-xs text-gray-400">{created}</div>
                        </div>
                    </div>
                    <button
                        type="button"
                        aria-label="Close"
                        on:click=move |_| on_close.call(())
                        class="text-gray-400 hover:text-white text-xl px-2"
                    >
                        "✕"
                    </button>
                </header>

                <div class="p-4 space-y-4">
                    {has_content.then(|| view! {
                        <p class="whitespace-pre-line">{post.content.clone()}</p>
                    })}

                    <ImageCarousel urls=post.image_urls.clone() />

                    <div class="flex items-center space-x-4 text-sm text-gray-400 border-b border-gray-700 pb-3">
                        {(reactions > 0).then(|| view! { <span>{format!("❤ {}", reactions)}</span> })}
                        <span>{move || comment_count_label(total_comments.get())}</span>
                    </div>

                    <CommentsSection
                        services=services
                        post_id=post.id.clone()
                        total=total_comments
                        reload=reload
                    />

                    <CommentForm services=services post_id=post.id.clone() on_posted=on_posted />
                </div>
            </div>
        </div>
    }
}
