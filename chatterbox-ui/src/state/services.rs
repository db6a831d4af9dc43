//! Application Services
//!
//! The API client, the signed-in session and the toasts, created once by
//! the app root and handed to each page as a prop.

use std::rc::Rc;

use chatterbox::Session;
use leptos::*;

use crate::api::{self, BrowserClient};
use crate::state::Toasts;

/// Everything a view needs to talk to the backend and report back
#[derive(Clone, Copy)]
pub struct AppServices {
    client: StoredValue<Rc<BrowserClient>>,
    /// Current session, signed out until login or restore succeeds
    pub session: RwSignal<Session>,
    pub toasts: Toasts,
}

impl AppServices {
    pub fn new() -> Self {
        Self {
            client: store_value(Rc::new(api::build_client())),
            session: create_rw_signal(Session::new()),
            toasts: Toasts::new(),
        }
    }

    pub fn client(&self) -> Rc<BrowserClient> {
        self.client.get_value()
    }
}
