//! HTTP Transport
//!
//! The seam between the API client and whatever actually moves bytes:
//! `reqwest` on native targets, `gloo-net` in the browser, a recording fake
//! in tests. A transport only reports what came back; status handling and
//! decoding belong to [`crate::client::ApiClient`].

use async_trait::async_trait;
use thiserror::Error;

#[cfg(feature = "native")]
mod native;

#[cfg(feature = "native")]
pub use native::ReqwestTransport;

/// HTTP verbs used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A file sent as one part of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(FilePart),
}

/// A fully resolved request, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token for the `Authorization` header
    pub bearer: Option<String>,
    pub body: RequestBody,
}

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failures that happen before a response arrives
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Request build error: {0}")]
    Build(String),

    #[error("Server unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),
}

/// Sends requests and returns raw responses.
///
/// Futures are not required to be `Send` so that browser transports, which
/// hold JavaScript values across await points, can implement this trait.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
