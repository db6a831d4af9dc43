//! Chatterbox Web Client
//!
//! Browser client for the Chatterbox social chat service, built with Leptos (WASM).
//!
//! # Features
//!
//! - Sign in, registration and password recovery
//! - Post feed with a detail view, image carousel and comments
//! - Comments with image attachments
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Validation, records and the API client come from the
//! `chatterbox` core crate; this crate supplies the browser transport, the
//! `localStorage` token store and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
