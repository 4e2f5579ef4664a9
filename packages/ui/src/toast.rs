use std::time::Duration;

use dioxus::prelude::*;
use registration::{Level, Notification};

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    pub entries: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn notify(toasts: &mut Signal<Toasts>, notification: Notification) {
    tracing::debug!("{:?}: {}", notification.level, notification.message);
    toasts.write().push(notification);
}

/// Provides the toast context and renders the stack at the top centre of the
/// window. Each toast removes itself after `auto_close_ms`.
#[component]
pub fn ToastProvider(auto_close_ms: u64, children: Element) -> Element {
    let toasts = use_context_provider(|| Signal::new(Toasts::default()));
    let entries = toasts().entries;

    rsx! {
        document::Stylesheet { href: TOAST_CSS }

        {children}

        div {
            class: "toast-container",
            for toast in entries {
                ToastItem { key: "{toast.id}", toast: toast.clone(), auto_close_ms }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast, auto_close_ms: u64) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    use_future(move || async move {
        sleep(Duration::from_millis(auto_close_ms)).await;
        toasts.write().dismiss(id);
    });

    rsx! {
        div {
            class: match toast.notification.level {
                Level::Error => "toast error",
                Level::Warning => "toast warning",
                Level::Success => "toast success",
                Level::Info => "toast info",
            },
            role: "status",
            "{toast.notification.message}"
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
