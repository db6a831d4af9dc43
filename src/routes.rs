//! Route Table
//!
//! Paths served by the browser client. The Leptos router mounts one view per
//! variant; this enum keeps the paths in one place.

/// Top-level client routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
    Feed,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Login, Route::Register, Route::ForgotPassword, Route::Feed];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::Feed => "/feed",
        }
    }

    /// Match a location path, ignoring a trailing slash and any query string
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Routes reachable without signing in
    pub fn is_public(self) -> bool {
        !matches!(self, Route::Feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_path_normalisation() {
        assert_eq!(Route::from_path(""), Some(Route::Login));
        assert_eq!(Route::from_path("/register/"), Some(Route::Register));
        assert_eq!(
            Route::from_path("/forgot-password?email=a%40b.co"),
            Some(Route::ForgotPassword)
        );
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn test_public_routes() {
        assert!(Route::Login.is_public());
        assert!(Route::Register.is_public());
        assert!(Route::ForgotPassword.is_public());
        assert!(!Route::Feed.is_public());
    }
}
