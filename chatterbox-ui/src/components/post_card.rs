//! Post Card Component
//!
//! A feed entry. Clicking it opens the post detail.

use chatterbox::Post;
use leptos::*;

use crate::components::{format_timestamp, Avatar};

#[component]
pub fn PostCard(
    post: Post,
    #[prop(into)]
    on_open: Callback<Post>,
) -> impl IntoView {
    let cover = post.image_urls.first().cloned();
    let extra_images = post.image_urls.len().saturating_sub(1);
    let created = format_timestamp(&post.created_at);
    let author = post.author.clone();
    let content = post.content.clone();
    let reactions = post.total_reactions;
    let comments = post.total_comments;
    let post = store_value(post);

    view! {
        <article
            on:click=move |_| on_open.call(post.get_value())
            class="bg-gray-800 rounded-xl p-4 space-y-3 cursor-pointer hover:bg-gray-750 transition-colors"
        >
            <header class="flex items-center space-x-3">
                <Avatar name=author.display_name.clone() url=author.avatar_url.clone() />
                <div>
                    <div class="font-semibold">{author.display_name}</div>
                    <div class="text-xs text-gray-400">{created}</div>
                </div>
            </header>

            <p class="whitespace-pre-line line-clamp-4">{content}</p>

            {cover.map(|src| view! {
                <div class="relative">
                    <img src=src alt="Post image" class="w-full max-h-80 object-cover rounded-lg" />
                    {(extra_images > 0).then(|| view! {
                        <span class="absolute bottom-2 right-2 bg-gray-900/70 text-xs px-2 py-1 rounded">
                            {format!("+{}", extra_images)}
                        </span>
                    })}
                </div>
            })}

            <footer class="flex items-center space-x-4 text-sm text-gray-400">
                {(reactions > 0).then(|| view! { <span>{format!("❤ {}", reactions)}</span> })}
                <span>{comment_count_label(comments)}</span>
            </footer>
        </article>
    }
}

/// "1 comment", "3 comments"
pub fn comment_count_label(count: u64) -> String {
    if count == 1 {
        "1 comment".to_string()
    } else {
        format!("{} comments", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_count_label() {
        assert_eq!(comment_count_label(0), "0 comments");
        assert_eq!(comment_count_label(1), "1 comment");
        assert_eq!(comment_count_label(12), "12 comments");
    }
}
