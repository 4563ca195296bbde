//! On-page notifications.

use std::time::Duration;

use inkshop_commerce::notify::{Notification, Notifier};
use leptos::prelude::*;

/// Fade-out length before a toast is removed.
const FADE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
    leaving: bool,
}

/// Shows notifications as toasts and dismisses them after a delay.
///
/// Holds only reactive handles, so it is `Copy` and can be given to the
/// cart manager and to the contact form alike.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    dismiss_ms: u64,
}

impl ToastNotifier {
    pub fn new(dismiss_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            dismiss_ms: u64::from(dismiss_ms),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let toasts = self.toasts;
        toasts.update(|list| {
            list.push(Toast {
                id,
                notification,
                leaving: false,
            })
        });

        set_timeout(
            move || {
                toasts.update(|list| {
                    if let Some(toast) = list.iter_mut().find(|t| t.id == id) {
                        toast.leaving = true;
                    }
                });
                set_timeout(
                    move || toasts.update(|list| list.retain(|t| t.id != id)),
                    Duration::from_millis(FADE_MS),
                );
            },
            Duration::from_millis(self.dismiss_ms),
        );
    }
}

/// Renders the live toasts.
#[component]
pub fn ToastHost(notifier: ToastNotifier) -> impl IntoView {
    let toasts = notifier.toasts;

    view! {
        <div class="notifications">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = format!(
                            "notification {}{}",
                            toast.notification.kind,
                            if toast.leaving { " leaving" } else { "" },
                        );
                        view! { <div class=class>{toast.notification.message}</div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
