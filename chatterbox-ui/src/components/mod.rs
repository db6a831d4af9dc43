//! UI Components
//!
//! Reusable Leptos components for the auth pages, the feed and post details.

pub mod auth_card;
pub mod avatar;
pub mod carousel;
pub mod comment_form;
pub mod comments;
pub mod loading;
pub mod post_card;
pub mod post_detail;
pub mod toast;

pub use auth_card::{AuthCard, SubmitButton, TextField};
pub use avatar::Avatar;
pub use carousel::ImageCarousel;
pub use comment_form::CommentForm;
pub use comments::CommentsSection;
pub use loading::{Spinner, SpinnerSize};
pub use post_card::PostCard;
pub use post_detail::PostDetail;
pub use toast::Toast;

/// Timestamp as shown under posts and comments
pub fn format_timestamp(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.with_timezone(&chrono::Local)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}
