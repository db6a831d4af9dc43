//! State Management
//!
//! Services shared by the views and the toast notifications they raise.

pub mod services;
pub mod toast;

pub use services::AppServices;
pub use toast::{ToastKind, Toasts};
