//! Toast notifications

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shortener::Notifier;
use crate::state::{Toast, ToastKind};

/// how long a toast stays on screen
const TOAST_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Reactive toast list; handed to the shortener as its `Notifier`.
#[derive(Debug, Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|entry| entry.id != id));
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| list.push(ToastEntry { id, toast }));

        let this = *self;
        Timeout::new(TOAST_TTL_MS, move || this.dismiss(id)).forget();
    }
}

#[component]
pub fn Toaster(notifier: ToastNotifier) -> impl IntoView {
    view! {
        <div class="toaster">
            <For
                each=move || notifier.toasts.get()
                key=|entry: &ToastEntry| entry.id
                children=move |entry: ToastEntry| {
                    let id = entry.id;
                    let class = match entry.toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| notifier.dismiss(id)>
                            {entry.toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
