//! `reqwest` transport for native targets

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

use super::{HttpRequest, HttpResponse, Method, RequestBody, Transport, TransportError};

/// Transport backed by a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the given request timeout
    pub fn new(timeout_secs: u64) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("Chatterbox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self { client })
    }
}

fn map_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::Unavailable
    } else if e.is_builder() {
        TransportError::Build(e.to_string())
    } else {
        TransportError::Network(e.to_string())
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)
                    .map_err(|e| TransportError::Build(e.to_string()))?;
                builder.multipart(Form::new().part(file.field, part))
            }
        };

        let response = builder.send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_error)?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::FilePart;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_json_post_with_bearer() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/comment/create"))
            .and(header("authorization", "Bearer secret"))
            .and(body_json(serde_json::json!({ "content": "hi" })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(5).unwrap();
        let response = transport
            .send(HttpRequest {
                method: Method::Post,
                url: format!("{}/v1/comment/create", server.uri()),
                bearer: Some("secret".to_string()),
                body: RequestBody::Json(serde_json::json!({ "content": "hi" })),
            })
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"result":true}"#);
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/user/profile"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(5).unwrap();
        let response = transport
            .send(HttpRequest {
                method: Method::Get,
                url: format!("{}/v1/user/profile", server.uri()),
                bearer: None,
                body: RequestBody::Empty,
            })
            .await
            .unwrap();

        assert_eq!(response.status, 401);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_multipart_upload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/file/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"url":"https://cdn/x.png"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new(5).unwrap();
        let response = transport
            .send(HttpRequest {
                method: Method::Post,
                url: format!("{}/v1/file/upload", server.uri()),
                bearer: Some("secret".to_string()),
                body: RequestBody::Multipart(FilePart {
                    field: "file".to_string(),
                    file_name: "x.png".to_string(),
                    content_type: "image/png".to_string(),
                    bytes: vec![0x89, b'P', b'N', b'G'],
                }),
            })
            .await
            .unwrap();

        assert_eq!(response.status, 200);

        let received = server.received_requests().await.unwrap();
        let content_type = received[0]
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("multipart/form-data"));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let transport = ReqwestTransport::new(5).unwrap();
        let err = transport
            .send(HttpRequest {
                method: Method::Get,
                url: "http://127.0.0.1:1/v1/post/list".to_string(),
                bearer: None,
                body: RequestBody::Empty,
            })
            .await
            .unwrap_err();

        assert_eq!(err, TransportError::Unavailable);
    }
}
