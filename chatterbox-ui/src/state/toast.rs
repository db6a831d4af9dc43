//! Toast State
//!
//! At most one message per kind on screen, each cleared after its own delay
//! or when clicked.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn timeout_ms(self) -> u32 {
        match self {
            ToastKind::Success => 3000,
            ToastKind::Error => 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    entries: Vec<ToastEntry>,
}

impl ToastQueue {
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    /// Show `text`, replacing any message of the same kind. Returns its id.
    pub fn push(&mut self, kind: ToastKind, text: &str) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.retain(|entry| entry.kind != kind);
        self.entries.push(ToastEntry {
            id,
            kind,
            text: text.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.entries.retain(|entry| entry.id != id);
    }
}

/// Handle views use to raise toasts
#[derive(Clone, Copy)]
pub struct Toasts {
    pub queue: RwSignal<ToastQueue>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
        }
    }

    pub fn show_success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    pub fn show_error(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|queue| queue.dismiss(id));
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, message));

        let toasts = *self;
        gloo_timers::callback::Timeout::new(kind.timeout_ms(), move || toasts.dismiss(id))
            .forget();
    }
}
