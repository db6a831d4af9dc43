//! Credential Providers
//!
//! The HTTP client never touches persistent storage directly. It is handed a
//! [`CredentialProvider`] at construction and asks it for the bearer token on
//! each request. Login and logout go through the writable [`TokenStore`].

use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Source of the bearer token attached to authenticated requests
pub trait CredentialProvider {
    /// Current access token, if the user is signed in
    fn access_token(&self) -> Option<String>;
}

/// A credential provider whose token can be replaced
pub trait TokenStore: CredentialProvider {
    fn store(&self, token: &str) -> Result<(), TokenStoreError>;

    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Errors raised while persisting the access token
#[derive(Error, Debug)]
pub enum TokenStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token storage unavailable: {0}")]
    Unavailable(String),
}

/// Process-local token store
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.to_string()))),
        }
    }
}

impl CredentialProvider for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.token
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl TokenStore for MemoryTokenStore {
    fn store(&self, token: &str) -> Result<(), TokenStoreError> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| TokenStoreError::Unavailable(e.to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut guard = self
            .token
            .write()
            .map_err(|e| TokenStoreError::Unavailable(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(feature = "native")]
pub use file::FileTokenStore;

#[cfg(feature = "native")]
mod file {
    use super::{CredentialProvider, TokenStore, TokenStoreError};
    use std::path::{Path, PathBuf};

    /// Token store backed by a single file, used by the command-line client
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl CredentialProvider for FileTokenStore {
        fn access_token(&self) -> Option<String> {
            match std::fs::read_to_string(&self.path) {
                Ok(content) => {
                    let token = content.trim();
                    (!token.is_empty()).then(|| token.to_string())
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    tracing::warn!("Failed to read token file {:?}: {}", self.path, e);
                    None
                }
            }
        }
    }

    /// Write `token`, readable by the owner only on unix
    fn write_private(path: &Path, token: &str) -> std::io::Result<()> {
        use std::io::Write;

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(path)?;
        // A file left by an older version keeps its mode on open
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(token.as_bytes())
    }

    impl TokenStore for FileTokenStore {
        fn store(&self, token: &str) -> Result<(), TokenStoreError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            write_private(&self.path, token)?;
            Ok(())
        }

        fn clear(&self) -> Result<(), TokenStoreError> {
            match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_lifecycle() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.access_token(), None);

        store.store("abc").unwrap();
        assert_eq!(store.access_token().as_deref(), Some("abc"));

        // Clones share the same slot
        let other = store.clone();
        other.clear().unwrap();
        assert_eq!(store.access_token(), None);
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("access_token"));
        assert_eq!(store.access_token(), None);

        store.store("token-123").unwrap();
        assert_eq!(store.access_token().as_deref(), Some("token-123"));

        store.clear().unwrap();
        assert_eq!(store.access_token(), None);

        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[cfg(all(feature = "native", unix))]
    #[test]
    fn test_file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access_token");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileTokenStore::new(&path);
        store.store("secret").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.access_token().as_deref(), Some("secret"));
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_file_store_ignores_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("access_token");
        std::fs::write(&path, "  \n").unwrap();

        assert_eq!(FileTokenStore::new(path).access_token(), None);
    }
}
