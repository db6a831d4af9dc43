//! Session State
//!
//! The signed-in user's profile. Created at the application entry point and
//! handed to every view that needs it; only the auth flows change it.

use crate::models::Profile;

/// Current user session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    profile: Option<Profile>,
}

impl Session {
    /// An anonymous session
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already signed in as `profile`
    pub fn signed_in(profile: Profile) -> Self {
        Self {
            profile: Some(profile),
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    /// Avatar of the signed-in user, if any
    pub fn avatar_url(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.avatar_url.as_deref())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.display_name.as_str())
    }

    pub(crate) fn sign_in(&mut self, profile: Profile) {
        tracing::debug!(user = %profile.id, "Session signed in");
        self.profile = Some(profile);
    }

    pub(crate) fn sign_out(&mut self) {
        if let Some(profile) = self.profile.take() {
            tracing::debug!(user = %profile.id, "Session signed out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            id: "u1".to_string(),
            display_name: "Minh".to_string(),
            avatar_url: Some("https://cdn/minh.png".to_string()),
        }
    }

    #[test]
    fn test_anonymous_session() {
        let session = Session::new();
        assert!(!session.is_signed_in());
        assert_eq!(session.avatar_url(), None);
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::new();
        session.sign_in(profile());
        assert!(session.is_signed_in());
        assert_eq!(session.display_name(), Some("Minh"));
        assert_eq!(session.avatar_url(), Some("https://cdn/minh.png"));

        session.sign_out();
        assert_eq!(session, Session::new());
    }
}
