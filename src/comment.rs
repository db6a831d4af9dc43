//! Comments
//!
//! Drafting and submitting a comment (optionally with one image), and paging
//! through the comments of a post.

use serde::Serialize;
use thiserror::Error;

use crate::client::{endpoints, ApiClient, ApiError, ApiResult, Envelope};
use crate::credentials::CredentialProvider;
use crate::models::Comment;
use crate::transport::Transport;

/// Toast shown after a comment is accepted
pub const COMMENT_POSTED: &str = "Comment posted!";

/// Toast shown when the attached image could not be uploaded
pub const IMAGE_UPLOAD_FAILED: &str = "Could not upload image";

/// Comments requested per page
pub const COMMENT_PAGE_SIZE: u32 = 10;

/// An image picked by the user, held in memory until submission
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(file_name: &str, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            bytes,
        }
    }

    /// Read an image from disk, guessing its type from the extension
    #[cfg(feature = "native")]
    pub fn from_path(path: &std::path::Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        Ok(Self {
            content_type: content_type_for(&extension).to_string(),
            file_name,
            bytes,
        })
    }
}

/// MIME type for a lowercase file extension
pub fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Why a comment was not posted. The display text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Write a comment or attach an image")]
    EmptyDraft,

    #[error("Could not upload image")]
    UploadFailed,

    #[error("Could not post comment")]
    Rejected { reason: String },

    #[error("Something went wrong while posting your comment")]
    Failed(#[source] ApiError),
}

impl From<ApiError> for SubmitError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Rejected(reason) => SubmitError::Rejected { reason },
            other => SubmitError::Failed(other),
        }
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReport {
    /// The created comment, when the server echoed it back
    pub comment: Option<Comment>,
    /// The image upload failed and the comment went out as text only
    pub image_dropped: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCommentRequest<'a> {
    post: &'a str,
    content: &'a str,
    image_url: Option<&'a str>,
}

/// Unsent comment text plus an optional image
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentDraft {
    content: String,
    image: Option<ImageAttachment>,
}

impl CommentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn image(&self) -> Option<&ImageAttachment> {
        self.image.as_ref()
    }

    pub fn attach_image(&mut self, image: ImageAttachment) {
        self.image = Some(image);
    }

    pub fn remove_image(&mut self) {
        self.image = None;
    }

    pub fn has_text(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Nothing worth sending: blank text and no image
    pub fn is_empty(&self) -> bool {
        !self.has_text() && self.image.is_none()
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.image = None;
    }

    /// Upload the image (if any), then create the comment on `post_id`.
    ///
    /// The draft is cleared only when the server accepts the comment; every
    /// failure leaves it untouched so the user can retry. An image that fails
    /// to upload is dropped in favour of a text-only comment unless there is
    /// no text, in which case nothing is sent.
    pub async fn submit<T, C>(
        &mut self,
        client: &ApiClient<T, C>,
        post_id: &str,
    ) -> Result<SubmitReport, SubmitError>
    where
        T: Transport,
        C: CredentialProvider,
    {
        if self.is_empty() {
            return Err(SubmitError::EmptyDraft);
        }

        let mut image_dropped = false;
        let image_url = match &self.image {
            Some(image) => match client.upload_image(image).await {
                Some(url) => Some(url),
                None if self.has_text() => {
                    image_dropped = true;
                    None
                }
                None => return Err(SubmitError::UploadFailed),
            },
            None => None,
        };

        let request = CreateCommentRequest {
            post: post_id,
            content: &self.content,
            image_url: image_url.as_deref(),
        };

        let envelope: Envelope<serde_json::Value> = client
            .post(endpoints::COMMENT_CREATE, &request)
            .await
            .map_err(|e| {
                tracing::warn!(post = %post_id, "Error posting comment: {}", e);
                SubmitError::from(e)
            })?;

        let envelope = envelope.accepted().map_err(|e| {
            tracing::warn!(post = %post_id, "Comment rejected: {}", e);
            SubmitError::from(e)
        })?;

        let comment = envelope
            .data
            .and_then(|data| match serde_json::from_value::<Comment>(data) {
                Ok(comment) => Some(comment),
                Err(e) => {
                    tracing::debug!("Created comment not echoed in a known shape: {}", e);
                    None
                }
            });

        tracing::info!(post = %post_id, with_image = image_url.is_some(), "Comment posted");
        self.clear();

        Ok(SubmitReport {
            comment,
            image_dropped,
        })
    }
}

/// The loaded part of a post's comment list
#[derive(Debug, Clone, PartialEq)]
pub struct CommentPage {
    pub post_id: String,
    /// Comment count reported by the post
    pub total: u64,
    pub comments: Vec<Comment>,
    /// Last page fetched, 0 before the first fetch
    pub page: u32,
    exhausted: bool,
}

impl CommentPage {
    pub fn new(post_id: &str, total: u64) -> Self {
        Self {
            post_id: post_id.to_string(),
            total,
            comments: Vec::new(),
            page: 0,
            exhausted: total == 0,
        }
    }

    /// More comments can be requested
    pub fn has_more(&self) -> bool {
        !self.exhausted && (self.comments.len() as u64) < self.total
    }

    /// Append a fetched page. A short page marks the end of the list.
    pub fn extend(&mut self, page: u32, comments: Vec<Comment>) {
        if comments.len() < COMMENT_PAGE_SIZE as usize {
            self.exhausted = true;
        }
        self.page = page;
        self.comments.extend(comments);
        self.total = self.total.max(self.comments.len() as u64);
    }

    /// Fetch the next page into this list
    pub async fn load_more<T, C>(&mut self, client: &ApiClient<T, C>) -> ApiResult<usize>
    where
        T: Transport,
        C: CredentialProvider,
    {
        let page = self.page + 1;
        let comments = fetch_comments(client, &self.post_id, page).await?;
        let count = comments.len();
        self.extend(page, comments);
        Ok(count)
    }
}

/// Fetch one page (1-based) of comments for a post
pub async fn fetch_comments<T, C>(
    client: &ApiClient<T, C>,
    post_id: &str,
    page: u32,
) -> ApiResult<Vec<Comment>>
where
    T: Transport,
    C: CredentialProvider,
{
    let path = format!(
        "{}?post={}&page={}&size={}",
        endpoints::COMMENT_LIST,
        urlencoding::encode(post_id),
        page,
        COMMENT_PAGE_SIZE
    );

    let envelope: Envelope<Vec<Comment>> = client.get(&path).await?;
    Ok(envelope.accepted()?.data.unwrap_or_default())
}
