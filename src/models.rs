//! Typed Records
//!
//! Records received from the backend. Each one is decoded through a raw wire
//! shape and checked before it reaches a view, so a post without an id or an
//! author without a name is rejected at the boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a server record fails boundary validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{record} is missing its id")]
    MissingId { record: &'static str },

    #[error("{record} author has no display name")]
    MissingDisplayName { record: &'static str },

    #[error("Post {id} contains an empty image URL")]
    EmptyImageUrl { id: String },
}

/// Current user's display identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile", rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    #[serde(rename = "_id", alias = "id", default)]
    id: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    avatar_url: Option<String>,
}

impl TryFrom<RawProfile> for Profile {
    type Error = ModelError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(ModelError::MissingId { record: "Profile" });
        }
        if raw.display_name.trim().is_empty() {
            return Err(ModelError::MissingDisplayName { record: "Profile" });
        }
        Ok(Self {
            id: raw.id,
            display_name: raw.display_name,
            avatar_url: non_empty(raw.avatar_url),
        })
    }
}

/// Author shown on posts and comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A post with its images and engagement counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPost", rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "user")]
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub image_urls: Vec<String>,
    pub total_reactions: u64,
    pub total_comments: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    #[serde(rename = "_id", alias = "id", default)]
    id: String,
    user: Author,
    #[serde(default)]
    content: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    image_urls: Vec<String>,
    #[serde(default)]
    total_reactions: u64,
    #[serde(default)]
    total_comments: u64,
}

impl TryFrom<RawPost> for Post {
    type Error = ModelError;

    fn try_from(raw: RawPost) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(ModelError::MissingId { record: "Post" });
        }
        if raw.user.display_name.trim().is_empty() {
            return Err(ModelError::MissingDisplayName { record: "Post" });
        }
        if raw.image_urls.iter().any(|url| url.trim().is_empty()) {
            return Err(ModelError::EmptyImageUrl { id: raw.id });
        }
        Ok(Self {
            id: raw.id,
            author: raw.user,
            content: raw.content,
            created_at: raw.created_at,
            image_urls: raw.image_urls,
            total_reactions: raw.total_reactions,
            total_comments: raw.total_comments,
        })
    }
}

impl Post {
    /// Whether the post has any image attached
    pub fn has_images(&self) -> bool {
        !self.image_urls.is_empty()
    }
}

/// A comment under a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawComment", rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "user")]
    pub author: Author,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComment {
    #[serde(rename = "_id", alias = "id", default)]
    id: String,
    user: Author,
    #[serde(default)]
    content: String,
    #[serde(default)]
    image_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<RawComment> for Comment {
    type Error = ModelError;

    fn try_from(raw: RawComment) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(ModelError::MissingId { record: "Comment" });
        }
        if raw.user.display_name.trim().is_empty() {
            return Err(ModelError::MissingDisplayName { record: "Comment" });
        }
        Ok(Self {
            id: raw.id,
            author: raw.user,
            content: raw.content,
            image_url: non_empty(raw.image_url),
            created_at: raw.created_at,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post_json() -> serde_json::Value {
        json!({
            "_id": "p1",
            "user": { "displayName": "Linh", "avatarUrl": "https://cdn/linh.png" },
            "content": "Weekend trip",
            "createdAt": "2024-11-20T10:00:00.000Z",
            "imageUrls": ["a.jpg", "b.jpg", "c.jpg"],
            "totalReactions": 4,
            "totalComments": 2
        })
    }

    #[test]
    fn test_post_from_wire() {
        let post: Post = serde_json::from_value(post_json()).unwrap();
        assert_eq!(post.id, "p1");
        assert_eq!(post.author.display_name, "Linh");
        assert_eq!(post.image_urls, vec!["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(post.total_reactions, 4);
        assert_eq!(post.total_comments, 2);
        assert!(post.has_images());
    }

    #[test]
    fn test_post_counters_default_to_zero() {
        let mut value = post_json();
        let obj = value.as_object_mut().unwrap();
        obj.remove("totalReactions");
        obj.remove("totalComments");
        obj.remove("imageUrls");

        let post: Post = serde_json::from_value(value).unwrap();
        assert_eq!(post.total_reactions, 0);
        assert_eq!(post.total_comments, 0);
        assert!(!post.has_images());
    }

    #[test]
    fn test_post_rejects_missing_id() {
        let mut value = post_json();
        value["_id"] = json!("");
        let err = serde_json::from_value::<Post>(value).unwrap_err();
        assert!(err.to_string().contains("Post is missing its id"));
    }

    #[test]
    fn test_post_rejects_anonymous_author() {
        let mut value = post_json();
        value["user"] = json!({ "avatarUrl": "x.png" });
        assert!(serde_json::from_value::<Post>(value).is_err());
    }

    #[test]
    fn test_post_rejects_blank_image_url() {
        let mut value = post_json();
        value["imageUrls"] = json!(["a.jpg", " "]);
        assert!(serde_json::from_value::<Post>(value).is_err());
    }

    #[test]
    fn test_profile_blank_avatar_is_none() {
        let profile: Profile = serde_json::from_value(json!({
            "_id": "u1",
            "displayName": "Minh",
            "avatarUrl": ""
        }))
        .unwrap();
        assert_eq!(profile.display_name, "Minh");
        assert_eq!(profile.avatar_url, None);
    }

    #[test]
    fn test_comment_from_wire() {
        let comment: Comment = serde_json::from_value(json!({
            "_id": "c1",
            "user": { "displayName": "An" },
            "content": "Beautiful",
            "imageUrl": null,
            "createdAt": "2024-11-20T11:00:00Z"
        }))
        .unwrap();
        assert_eq!(comment.id, "c1");
        assert_eq!(comment.image_url, None);
    }
}
