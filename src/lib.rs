//! # Chatterbox
//!
//! Client core for a social chat service: sign-in and registration forms,
//! post details with an image carousel, comments with image attachments.
//!
//! ## Modules
//!
//! - [`config`]: Remote endpoint and client configuration
//! - [`validation`]: Email and phone patterns used by the auth forms
//! - [`models`]: Typed records validated at the API boundary
//! - [`transport`]: The HTTP seam, with a `reqwest` implementation on native targets
//! - [`client`]: Bearer-authenticated JSON client over a transport
//! - [`auth`]: Login, registration and password recovery flows
//! - [`comment`]: Comment drafts, submission and listing
//! - [`carousel`]: Wrapping image carousel state
//!
//! The browser client (`chatterbox-ui`) builds this crate without the
//! `native` feature and supplies its own transport and token store.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatterbox::{ApiClient, CommentDraft, MemoryTokenStore, ReqwestTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(
//!         chatterbox::config::DEFAULT_API_URL,
//!         ReqwestTransport::new(30)?,
//!         MemoryTokenStore::with_token("token"),
//!     );
//!
//!     let mut draft = CommentDraft::new();
//!     draft.set_content("Nice shot!");
//!     draft.submit(&client, "post-id").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod carousel;
pub mod client;
pub mod comment;
pub mod config;
pub mod credentials;
pub mod models;
pub mod posts;
pub mod routes;
pub mod session;
pub mod transport;
pub mod validation;

#[cfg(feature = "native")]
pub mod logging;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{
    AuthError, FormStatus, ForgotPasswordForm, LoginForm, LoginIdentifier, RegisterForm,
};
pub use carousel::Carousel;
pub use client::{ApiClient, ApiError, ApiResult, Envelope};
pub use comment::{CommentDraft, CommentPage, ImageAttachment, SubmitError, SubmitReport};
pub use credentials::{CredentialProvider, MemoryTokenStore, TokenStore, TokenStoreError};
pub use models::{Author, Comment, ModelError, Post, Profile};
pub use routes::Route;
pub use session::Session;
pub use transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport, TransportError};
pub use validation::{is_valid_email, is_valid_phone, ValidationError};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};
#[cfg(feature = "native")]
pub use credentials::FileTokenStore;
#[cfg(feature = "native")]
pub use transport::ReqwestTransport;
