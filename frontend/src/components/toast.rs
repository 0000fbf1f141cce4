//! Transient toast notifications.
//!
//! A [`Toasts`] store lives in context; any handler can push a message and
//! the [`ToastHost`] component renders the stack into a fixed container.
//! Removal is two-phase: after the display duration the toast is marked
//! leaving (so CSS can play the exit animation), then it is dropped.
//!
//! Nothing in here can fail — toasts are the error-reporting channel, so
//! they must never throw themselves. Message text goes through Leptos text
//! nodes, which escape markup.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{TOAST_DURATION_MS, TOAST_EXIT_MS};
use crate::types::ApiFailure;

/// Severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
            ToastKind::Warning => "toast-warning",
        }
    }

    /// Icon glyph shown before the message.
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Info => "ℹ",
            ToastKind::Warning => "⚠",
        }
    }
}

/// One visible toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// Exit animation is running; removal follows shortly.
    pub leaving: bool,
}

/// Shared toast store, provided through context at app startup.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Current stack, for the host component.
    pub fn items(&self) -> RwSignal<Vec<Toast>> {
        self.items
    }

    /// Show a toast with the default duration.
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        self.show_for(kind, message, TOAST_DURATION_MS);
    }

    /// Show a toast for `duration_ms`, then remove it in two phases.
    pub fn show_for(&self, kind: ToastKind, message: impl Into<String>, duration_ms: u32) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let items = self.items;
        items.update(|list| {
            list.push(Toast {
                id,
                kind,
                message: message.into(),
                leaving: false,
            });
        });

        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            items.update(|list| {
                if let Some(toast) = list.iter_mut().find(|t| t.id == id) {
                    toast.leaving = true;
                }
            });
            TimeoutFuture::new(TOAST_EXIT_MS).await;
            items.update(|list| list.retain(|t| t.id != id));
        });
    }

    /// Centralized failure-to-toast policy: logical failures show the
    /// server-supplied message (or `fallback`), transport failures show a
    /// fixed generic message.
    pub fn report(&self, failure: &ApiFailure, fallback: &str) {
        match failure {
            ApiFailure::Rejected(_) => {
                self.show(ToastKind::Error, failure.message_or(fallback).to_string());
            }
            ApiFailure::Transport(e) => {
                log::error!("transport failure: {}", e);
                self.show(ToastKind::Error, "サーバーとの通信に失敗しました");
            }
        }
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-position container rendering the toast stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let items = toasts.items();

    view! {
        <div class="toast-container" id="toastContainer">
            <For
                each=move || items.get()
                key=|toast| (toast.id, toast.leaving)
                children=move |toast| {
                    let class = if toast.leaving {
                        format!("toast {} toast-leaving", toast.kind.css_class())
                    } else {
                        format!("toast {}", toast.kind.css_class())
                    };
                    view! {
                        <div class=class role="alert">
                            <span class="toast-icon">{toast.kind.icon()}</span>
                            <span class="toast-message">{toast.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
