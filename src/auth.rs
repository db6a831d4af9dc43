//! Authentication Flows
//!
//! Login, registration and password recovery. Each form is validated locally
//! first; invalid input never reaches the network. A successful login stores
//! the access token through the client's [`TokenStore`] and signs the
//! [`Session`] in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::{endpoints, ApiClient, ApiError, ApiResult, Envelope};
use crate::credentials::{CredentialProvider, TokenStore, TokenStoreError};
use crate::models::Profile;
use crate::session::Session;
use crate::transport::Transport;
use crate::validation::{
    is_valid_email, is_valid_phone, require, ValidationError, MIN_PASSWORD_LEN,
};

/// Lifecycle of a submitted form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }
}

/// Errors from the auth flows. The display text is what the user sees.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("{}", describe_api_error(.0))]
    Api(#[from] ApiError),

    #[error("Could not save your session: {0}")]
    TokenStore(#[from] TokenStoreError),

    #[error("The server did not return an access token")]
    MissingToken,
}

fn describe_api_error(e: &ApiError) -> String {
    match e {
        ApiError::Rejected(message) | ApiError::Status { message, .. } => message.clone(),
        ApiError::Transport(_) => "Could not reach the server, please try again".to_string(),
        ApiError::Parse(_) | ApiError::Encode(_) => "Something went wrong, please try again".to_string(),
    }
}

/// What the user typed into the identifier field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIdentifier {
    Email(String),
    Phone(String),
}

impl LoginIdentifier {
    /// Classify `input` as an email or a phone number
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        require(input, "Email or phone number")?;
        if is_valid_email(input) {
            Ok(Self::Email(input.to_string()))
        } else if is_valid_phone(input) {
            Ok(Self::Phone(input.to_string()))
        } else {
            Err(ValidationError::InvalidIdentifier)
        }
    }
}

/// Login form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let identifier = LoginIdentifier::parse(&self.identifier)?;
        require(&self.password, "Password")?;

        let (email, phone) = match identifier {
            LoginIdentifier::Email(email) => (Some(email), None),
            LoginIdentifier::Phone(phone) => (None, Some(phone)),
        };

        Ok(LoginRequest {
            email,
            phone,
            password: self.password.clone(),
        })
    }
}

/// Registration form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub display_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        require(&self.display_name, "Display name")?;

        let email = self.email.trim();
        require(email, "Email")?;
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let phone = self.phone.trim();
        require(phone, "Phone number")?;
        if !is_valid_phone(phone) {
            return Err(ValidationError::InvalidPhone);
        }

        require(&self.password, "Password")?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(RegisterRequest {
            display_name: self.display_name.trim().to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Password recovery form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<ForgotPasswordRequest, ValidationError> {
        let email = self.email.trim();
        require(email, "Email")?;
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ForgotPasswordRequest {
            email: email.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginData {
    #[serde(alias = "token")]
    access_token: String,
    #[serde(default, alias = "profile")]
    user: Option<Profile>,
}

/// Sign in, persist the access token and fill the session.
///
/// If the profile cannot be resolved after the token was stored, the token
/// is removed again so no half-signed-in state is left behind.
pub async fn login<T, S>(
    client: &ApiClient<T, S>,
    session: &mut Session,
    form: &LoginForm,
) -> Result<Profile, AuthError>
where
    T: Transport,
    S: TokenStore,
{
    let request = form.validate()?;

    let envelope: Envelope<LoginData> = client.post(endpoints::LOGIN, &request).await?;
    let data = envelope.accepted()?.data.ok_or(AuthError::MissingToken)?;
    if data.access_token.trim().is_empty() {
        return Err(AuthError::MissingToken);
    }

    client.credentials().store(&data.access_token)?;

    let profile = match data.user {
        Some(profile) => profile,
        None => match fetch_profile(client).await {
            Ok(profile) => profile,
            Err(e) => {
                if let Err(clear_err) = client.credentials().clear() {
                    tracing::warn!("Failed to discard token: {}", clear_err);
                }
                return Err(e.into());
            }
        },
    };

    tracing::info!(user = %profile.id, "Logged in");
    session.sign_in(profile.clone());
    Ok(profile)
}

/// Create an account. Returns the server's confirmation message.
pub async fn register<T, C>(client: &ApiClient<T, C>, form: &RegisterForm) -> Result<String, AuthError>
where
    T: Transport,
    C: CredentialProvider,
{
    let request = form.validate()?;
    let envelope: Envelope<serde_json::Value> = client.post(endpoints::REGISTER, &request).await?;
    let envelope = envelope.accepted()?;

    tracing::info!(email = %request.email, "Account registered");
    Ok(envelope
        .message
        .unwrap_or_else(|| "Registration successful, please sign in".to_string()))
}

/// Ask the backend to send password reset instructions
pub async fn forgot_password<T, C>(
    client: &ApiClient<T, C>,
    form: &ForgotPasswordForm,
) -> Result<String, AuthError>
where
    T: Transport,
    C: CredentialProvider,
{
    let request = form.validate()?;
    let envelope: Envelope<serde_json::Value> =
        client.post(endpoints::FORGOT_PASSWORD, &request).await?;
    let envelope = envelope.accepted()?;

    Ok(envelope
        .message
        .unwrap_or_else(|| "Check your email for password reset instructions".to_string()))
}

/// Profile of the user the current token belongs to
pub async fn fetch_profile<T, C>(client: &ApiClient<T, C>) -> ApiResult<Profile>
where
    T: Transport,
    C: CredentialProvider,
{
    let envelope: Envelope<Profile> = client.get(endpoints::PROFILE).await?;
    envelope
        .accepted()?
        .data
        .ok_or_else(|| ApiError::Parse("response carried no profile".to_string()))
}

/// Rebuild the session from a stored token, if there is one
pub async fn restore_session<T, C>(client: &ApiClient<T, C>) -> Session
where
    T: Transport,
    C: CredentialProvider,
{
    if client.credentials().access_token().is_none() {
        return Session::new();
    }

    match fetch_profile(client).await {
        Ok(profile) => Session::signed_in(profile),
        Err(e) => {
            tracing::warn!("Stored token did not resolve to a profile: {}", e);
            Session::new()
        }
    }
}

/// Forget the access token and sign the session out
pub fn logout<S: TokenStore>(store: &S, session: &mut Session) -> Result<(), TokenStoreError> {
    store.clear()?;
    session.sign_out();
    tracing::info!("Logged out");
    Ok(())
}
