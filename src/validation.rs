//! Input Validation
//!
//! Client-side checks applied to auth forms before anything is sent.
//! The backend remains authoritative; these only catch obvious mistakes.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Email address shape. Consecutive dots are rejected separately because the
/// regex engine has no lookahead.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.%]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Ten digit mobile number with a leading zero and a known carrier prefix
pub const PHONE_PATTERN: &str = r"^0[35789][0-9]{8}$";

/// Minimum password length accepted by the registration form
pub const MIN_PASSWORD_LEN: usize = 6;

fn email_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

fn phone_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).ok()).as_ref()
}

/// Check an email address against [`EMAIL_PATTERN`]
pub fn is_valid_email(input: &str) -> bool {
    !input.contains("..") && email_regex().is_some_and(|re| re.is_match(input))
}

/// Check a phone number against [`PHONE_PATTERN`]
pub fn is_valid_phone(input: &str) -> bool {
    phone_regex().is_some_and(|re| re.is_match(input))
}

/// Errors raised before a form is submitted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Enter a valid email address or phone number")]
    InvalidIdentifier,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Fail with [`ValidationError::Required`] when `value` is blank
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}
