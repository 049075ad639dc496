use std::time::Duration;

use api::NotificationKind;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::app_state_mut::Toast;
use crate::compat;

const TOAST_LIFETIME: Duration = Duration::from_secs(3);

fn background(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "#22c55e",
        NotificationKind::Error => "#ef4444",
        NotificationKind::Info => "#3b82f6",
    }
}

/// One notification. Removes itself after [`TOAST_LIFETIME`].
#[component]
fn ToastItem(toast: Toast) -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let id = toast.id;

    use_future(move || async move {
        compat::sleep(TOAST_LIFETIME).await;
        app_state_mut.dismiss(id);
    });

    let kind: &'static str = toast.notification.kind.into();
    let bg = background(toast.notification.kind);

    rsx! {
        div {
            class: "toast toast-{kind}",
            role: "status",
            style: "background-color: {bg}; color: white; padding: 0.75rem 1.5rem; border-radius: 0.5rem; box-shadow: 0 10px 15px rgba(0,0,0,0.2); cursor: pointer;",
            onclick: move |_| app_state_mut.dismiss(id),
            "{toast.notification.message}"
        }
    }
}

/// The stack of live notifications in the top-right corner.
#[component]
pub fn ToastStack() -> Element {
    let app_state_mut = use_context::<AppStateMut>();
    let toasts = app_state_mut.toasts.read().clone();

    rsx! {
        div {
            style: "position: fixed; top: 1rem; right: 1rem; z-index: 1000; display: flex; flex-direction: column; gap: 0.5rem;",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}
