//! API Client
//!
//! `get`/`post` against the configured backend. Every request is prefixed
//! with the base URL and carries the bearer token supplied by the injected
//! [`CredentialProvider`]. Non-2xx statuses and undecodable bodies come back
//! as [`ApiError`] for the caller to turn into a notification.

mod error;
pub mod endpoints;

pub use error::{ApiError, ApiResult};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::comment::ImageAttachment;
use crate::credentials::CredentialProvider;
use crate::transport::{FilePart, HttpRequest, Method, RequestBody, Transport};

/// Standard backend response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub result: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Turn `result: false` into [`ApiError::Rejected`]
    pub fn accepted(self) -> ApiResult<Self> {
        if self.result {
            Ok(self)
        } else {
            Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "Request was not accepted".to_string()),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    url: String,
}

/// HTTP client bound to one backend and one credential provider
pub struct ApiClient<T, C> {
    base_url: String,
    transport: T,
    credentials: C,
}

impl<T: Transport, C: CredentialProvider> ApiClient<T, C> {
    pub fn new(base_url: impl Into<String>, transport: T, credentials: C) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the JSON response
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let body = self.send(Method::Get, path, RequestBody::Empty).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST `body` as JSON to `path` and decode the JSON response
    pub async fn post<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let body = self.send(Method::Post, path, RequestBody::Json(value)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Upload an image and return its public URL.
    ///
    /// Failures are logged and reported as `None`; the caller decides whether
    /// the surrounding action can go on without the image.
    pub async fn upload_image(&self, image: &ImageAttachment) -> Option<String> {
        let part = FilePart {
            field: "file".to_string(),
            file_name: image.file_name.clone(),
            content_type: image.content_type.clone(),
            bytes: image.bytes.clone(),
        };

        let body = match self
            .send(Method::Post, endpoints::FILE_UPLOAD, RequestBody::Multipart(part))
            .await
        {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(file = %image.file_name, "Image upload failed: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<UploadResponse>(&body) {
            Ok(UploadResponse { url: Some(url), .. }) if !url.is_empty() => Some(url),
            Ok(UploadResponse {
                data: Some(UploadData { url }),
                ..
            }) if !url.is_empty() => Some(url),
            Ok(_) => {
                tracing::warn!(file = %image.file_name, "Upload response carried no URL");
                None
            }
            Err(e) => {
                tracing::warn!(file = %image.file_name, "Unreadable upload response: {}", e);
                None
            }
        }
    }

    async fn send(&self, method: Method, path: &str, body: RequestBody) -> ApiResult<String> {
        let request = HttpRequest {
            method,
            url: self.url(path),
            bearer: self.credentials.access_token(),
            body,
        };

        tracing::debug!(
            method = ?request.method,
            url = %request.url,
            authenticated = request.bearer.is_some(),
            "Sending request"
        );

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::error!(path = %path, "Request failed: {}", e);
            ApiError::from(e)
        })?;

        if response.is_success() {
            return Ok(response.body);
        }

        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| {
                if response.body.trim().is_empty() {
                    "Unknown error".to_string()
                } else {
                    response.body.clone()
                }
            });

        tracing::warn!(path = %path, status = response.status, "API error: {}", message);

        Err(ApiError::Status {
            status: response.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryTokenStore;
    use crate::test_support::{client_with, RecordingTransport};
    use crate::transport::TransportError;
    use serde_json::json;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new(
            "https://api.example.com/",
            RecordingTransport::new(),
            MemoryTokenStore::new(),
        );
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.url("/v1/comment/create"),
            "https://api.example.com/v1/comment/create"
        );
        assert_eq!(client.url("v1/post/list"), "https://api.example.com/v1/post/list");
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_present() {
        let transport = RecordingTransport::new();
        transport.respond(200, json!({ "result": true }));
        let client = client_with(transport.clone(), MemoryTokenStore::with_token("tok"));

        let _: Envelope<serde_json::Value> = client.get("/v1/user/profile").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "https://api.test/v1/user/profile");
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_anonymous_request_has_no_bearer() {
        let transport = RecordingTransport::new();
        transport.respond(200, json!({ "result": true }));
        let client = client_with(transport.clone(), MemoryTokenStore::new());

        let _: Envelope<serde_json::Value> = client
            .post("/v1/auth/login", &json!({ "email": "a@b.co" }))
            .await
            .unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].bearer, None);
        assert_eq!(
            sent[0].body,
            RequestBody::Json(json!({ "email": "a@b.co" }))
        );
    }

    #[tokio::test]
    async fn test_error_status_uses_server_message() {
        let transport = RecordingTransport::new();
        transport.respond(400, json!({ "result": false, "message": "Email taken" }));
        let client = client_with(transport, MemoryTokenStore::new());

        let err = client
            .post::<_, Envelope<serde_json::Value>>("/v1/auth/register", &json!({}))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "Email taken".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_error_status_with_empty_body() {
        let transport = RecordingTransport::new();
        transport.respond_raw(502, "");
        let client = client_with(transport, MemoryTokenStore::new());

        let err = client.get::<serde_json::Value>("/v1/post/list").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: "Unknown error".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_parse_failure() {
        let transport = RecordingTransport::new();
        transport.respond_raw(200, "<html>oops</html>");
        let client = client_with(transport, MemoryTokenStore::new());

        let err = client.get::<Envelope<serde_json::Value>>("/v1/post/list").await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let transport = RecordingTransport::new();
        transport.fail(TransportError::Timeout);
        let client = client_with(transport, MemoryTokenStore::new());

        let err = client.get::<serde_json::Value>("/v1/post/list").await.unwrap_err();
        assert_eq!(err, ApiError::Transport(TransportError::Timeout));
    }

    #[test]
    fn test_envelope_rejection() {
        let envelope: Envelope<serde_json::Value> =
            serde_json::from_value(json!({ "result": false })).unwrap();
        assert_eq!(
            envelope.accepted().unwrap_err(),
            ApiError::Rejected("Request was not accepted".to_string())
        );
    }

    #[test]
    fn test_envelope_of_record_without_default() {
        use crate::models::Profile;

        let bare: Envelope<Profile> =
            serde_json::from_value(json!({ "result": true, "message": "ok" })).unwrap();
        assert!(bare.data.is_none());

        let full: Envelope<Profile> = serde_json::from_value(json!({
            "result": true,
            "data": { "_id": "u1", "displayName": "Linh" }
        }))
        .unwrap();
        assert_eq!(full.data.map(|p| p.display_name).as_deref(), Some("Linh"));
    }

    #[tokio::test]
    async fn test_upload_image_reads_url() {
        let transport = RecordingTransport::new();
        transport.respond(200, json!({ "url": "https://cdn/a.png" }));
        transport.respond(200, json!({ "result": true, "data": { "url": "https://cdn/b.png" } }));
        let client = client_with(transport.clone(), MemoryTokenStore::with_token("tok"));

        let image = ImageAttachment::new("a.png", "image/png", vec![1, 2, 3]);
        assert_eq!(client.upload_image(&image).await.as_deref(), Some("https://cdn/a.png"));
        assert_eq!(client.upload_image(&image).await.as_deref(), Some("https://cdn/b.png"));

        let sent = transport.requests();
        assert_eq!(sent[0].url, "https://api.test/v1/file/upload");
        match &sent[0].body {
            RequestBody::Multipart(part) => {
                assert_eq!(part.field, "file");
                assert_eq!(part.file_name, "a.png");
                assert_eq!(part.bytes, vec![1, 2, 3]);
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_upload_image_failure_is_none() {
        let transport = RecordingTransport::new();
        transport.respond(500, json!({ "message": "disk full" }));
        transport.respond(200, json!({ "result": true }));
        let client = client_with(transport, MemoryTokenStore::new());

        let image = ImageAttachment::new("a.png", "image/png", vec![1]);
        assert_eq!(client.upload_image(&image).await, None);
        assert_eq!(client.upload_image(&image).await, None);
    }
}
