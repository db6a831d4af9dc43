//! Browser API Access
//!
//! Wires the core [`ApiClient`] to the browser: `gloo-net` for transport and
//! `localStorage` for the access token and an optional base-URL override.

mod storage;
mod transport;

pub use storage::LocalStorageTokens;
pub use transport::BrowserTransport;

use chatterbox::config::DEFAULT_API_URL;
use chatterbox::ApiClient;

/// API client used by every view
pub type BrowserClient = ApiClient<BrowserTransport, LocalStorageTokens>;

/// Local storage key for a base-URL override
const API_URL_KEY: &str = "chatterbox_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = storage::local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Build the client for the current base URL
pub fn build_client() -> BrowserClient {
    ApiClient::new(get_api_base(), BrowserTransport, LocalStorageTokens)
}

/// Log a failure to the browser console
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    web_sys::console::error_1(&format!("{}: {}", context, error).into());
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_api_base_override() {
        let storage = storage::local_storage().unwrap();

        storage.remove_item(API_URL_KEY).unwrap();
        assert_eq!(get_api_base(), DEFAULT_API_URL);

        storage.set_item(API_URL_KEY, "http://localhost:3000/").unwrap();
        assert_eq!(get_api_base(), "http://localhost:3000");
        assert_eq!(build_client().base_url(), "http://localhost:3000");

        storage.set_item(API_URL_KEY, "   ").unwrap();
        assert_eq!(get_api_base(), DEFAULT_API_URL);

        storage.remove_item(API_URL_KEY).unwrap();
    }
}
