//! Post Feed

use crate::client::{endpoints, ApiClient, ApiResult, Envelope};
use crate::credentials::CredentialProvider;
use crate::models::Post;
use crate::transport::Transport;

/// Fetch one page (1-based) of the post feed.
///
/// Records that fail validation are skipped with a warning rather than
/// failing the whole page.
pub async fn fetch_feed<T, C>(client: &ApiClient<T, C>, page: u32) -> ApiResult<Vec<Post>>
where
    T: Transport,
    C: CredentialProvider,
{
    let path = format!("{}?page={}", endpoints::POST_LIST, page);
    let envelope: Envelope<Vec<serde_json::Value>> = client.get(&path).await?;

    let posts = envelope
        .accepted()?
        .data
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<Post>(raw) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!("Skipping malformed post: {}", e);
                None
            }
        })
        .collect();

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiError;
    use crate::credentials::MemoryTokenStore;
    use crate::test_support::{client_with, RecordingTransport};
    use serde_json::json;

    #[tokio::test]
    async fn test_feed_skips_malformed_posts() {
        let transport = RecordingTransport::new();
        transport.respond(
            200,
            json!({
                "result": true,
                "data": [
                    {
                        "_id": "p1",
                        "user": { "displayName": "Linh" },
                        "content": "ok",
                        "createdAt": "2024-11-20T10:00:00Z"
                    },
                    {
                        "_id": "",
                        "user": { "displayName": "Ghost" },
                        "createdAt": "2024-11-20T10:00:00Z"
                    }
                ]
            }),
        );
        let client = client_with(transport.clone(), MemoryTokenStore::with_token("tok"));

        let posts = fetch_feed(&client, 1).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "p1");
        assert_eq!(transport.requests()[0].url, "https://api.test/v1/post/list?page=1");
    }

    #[tokio::test]
    async fn test_feed_rejected() {
        let transport = RecordingTransport::new();
        transport.respond(200, json!({ "result": false, "message": "Session expired" }));
        let client = client_with(transport, MemoryTokenStore::new());

        assert_eq!(
            fetch_feed(&client, 1).await.unwrap_err(),
            ApiError::Rejected("Session expired".to_string())
        );
    }
}
