//! `gloo-net` transport

use async_trait::async_trait;
use chatterbox::transport::FilePart;
use chatterbox::{HttpRequest, HttpResponse, Method, RequestBody, Transport, TransportError};
use gloo_net::http::Request;
use wasm_bindgen::JsValue;

/// Transport backed by the browser's `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

fn js_error(e: JsValue) -> TransportError {
    TransportError::Build(format!("{:?}", e))
}

fn form_data(file: &FilePart) -> Result<web_sys::FormData, TransportError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;

    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(&file.field, &blob, &file.file_name)
        .map_err(js_error)?;
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(file) => builder.body(form_data(file)?),
        }
        .map_err(|e| TransportError::Build(e.to_string()))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
