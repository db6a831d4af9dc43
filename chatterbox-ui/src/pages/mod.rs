//! Pages
//!
//! Top-level page components for each route.

pub mod feed;
pub mod forgot_password;
pub mod login;
pub mod register;

pub use feed::Feed;
pub use forgot_password::ForgotPassword;
pub use login::Login;
pub use register::Register;
