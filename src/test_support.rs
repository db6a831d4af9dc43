//! Shared fixtures for unit tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::client::ApiClient;
use crate::credentials::CredentialProvider;
use crate::models::Post;
use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError};

pub const BASE_URL: &str = "https://api.test";

/// Transport that records every request and replays queued responses in order
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Rc<RefCell<Vec<HttpRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: TransportError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no response queued".to_string())))
    }
}

pub fn client_with<C: CredentialProvider>(
    transport: RecordingTransport,
    credentials: C,
) -> ApiClient<RecordingTransport, C> {
    ApiClient::new(BASE_URL, transport, credentials)
}

pub fn post_with_images(urls: &[&str]) -> Post {
    serde_json::from_value(serde_json::json!({
        "_id": "post-1",
        "user": { "displayName": "Linh", "avatarUrl": "https://cdn/linh.png" },
        "content": "Weekend trip",
        "createdAt": "2024-11-20T10:00:00Z",
        "imageUrls": urls,
        "totalReactions": 3,
        "totalComments": 1
    }))
    .expect("fixture post is valid")
}
