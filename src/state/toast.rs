//! Transient toast notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request errors and success confirmations surface here; nothing in this
//! queue ever mutates session state. `ToastHost` renders the queue and
//! schedules auto-dismissal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Seconds a toast stays visible before auto-dismissal.
pub const TOAST_TTL_SECS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub description: Option<String>,
}

/// FIFO toast queue with monotonically increasing ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(
        &mut self,
        level: ToastLevel,
        message: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            level,
            message: message.into(),
            description,
        });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored (already dismissed).
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Queue a toast on the shared signal and schedule its auto-dismissal.
pub fn push_toast(
    toasts: RwSignal<ToastState>,
    level: ToastLevel,
    message: impl Into<String>,
    description: Option<String>,
) {
    let id = {
        let mut queued = 0;
        toasts.update(|t| queued = t.push(level, message.into(), description));
        queued
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(u64::from(TOAST_TTL_SECS))).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn toast_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push_toast(toasts, ToastLevel::Success, message, None);
}

pub fn toast_info(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push_toast(toasts, ToastLevel::Info, message, None);
}

pub fn toast_error(
    toasts: RwSignal<ToastState>,
    message: impl Into<String>,
    description: Option<String>,
) {
    push_toast(toasts, ToastLevel::Error, message, description);
}
