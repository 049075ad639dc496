//! Defines the mutable, reactive state for the application's UI.

use api::Asset;
use api::AssetView;
use api::Notification;
use dioxus::prelude::*;

use crate::compat;

/// A notification waiting to be dismissed.
#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s that the store writes into and the screens
/// read from, so every reload triggers an automatic re-render. It is the
/// store's [`AssetView`].
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The last snapshot the store loaded.
    pub assets: Signal<Vec<Asset>>,
    /// Notifications currently on screen, oldest first.
    pub toasts: Signal<Vec<Toast>>,
    toast_seq: Signal<u64>,
}

impl AppStateMut {
    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

/// Creates the signals backing [`AppStateMut`] in the calling component.
pub fn use_app_state_mut() -> AppStateMut {
    AppStateMut {
        assets: use_signal(Vec::new),
        toasts: use_signal(Vec::new),
        toast_seq: use_signal(|| 0),
    }
}

impl AssetView for AppStateMut {
    fn render(&self, assets: &[Asset]) {
        let mut signal = self.assets;
        signal.set(assets.to_vec());
    }

    fn notify(&self, notification: Notification) {
        if notification.kind.is_error() {
            dioxus_logger::tracing::warn!("notify: {}", notification.message);
        } else {
            dioxus_logger::tracing::info!("notify: {}", notification.message);
        }

        let mut seq = self.toast_seq;
        let id = *seq.peek();
        seq.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast { id, notification });
    }

    async fn confirm(&self, prompt: &str) -> bool {
        compat::confirm(prompt).await
    }
}
