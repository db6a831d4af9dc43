//! `localStorage` token store

use chatterbox::config::ACCESS_TOKEN_KEY;
use chatterbox::{CredentialProvider, TokenStore, TokenStoreError};

pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn unavailable() -> TokenStoreError {
    TokenStoreError::Unavailable("localStorage is not accessible".to_string())
}

/// Access token kept in the browser's local storage under `accessToken`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokens;

impl CredentialProvider for LocalStorageTokens {
    fn access_token(&self) -> Option<String> {
        local_storage()?
            .get_item(ACCESS_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
}

impl TokenStore for LocalStorageTokens {
    fn store(&self, token: &str) -> Result<(), TokenStoreError> {
        local_storage()
            .ok_or_else(unavailable)?
            .set_item(ACCESS_TOKEN_KEY, token)
            .map_err(|e| TokenStoreError::Unavailable(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        local_storage()
            .ok_or_else(unavailable)?
            .remove_item(ACCESS_TOKEN_KEY)
            .map_err(|e| TokenStoreError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_store_and_clear_token() {
        let tokens = LocalStorageTokens;
        tokens.clear().unwrap();
        assert_eq!(tokens.access_token(), None);

        tokens.store("token-123").unwrap();
        assert_eq!(tokens.access_token().as_deref(), Some("token-123"));
        assert_eq!(
            local_storage().unwrap().get_item(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            Some("token-123")
        );

        tokens.clear().unwrap();
        assert_eq!(tokens.access_token(), None);
    }

    #[wasm_bindgen_test]
    fn test_empty_token_is_absent() {
        let tokens = LocalStorageTokens;
        tokens.store("").unwrap();
        assert_eq!(tokens.access_token(), None);
        tokens.clear().unwrap();
    }
}
