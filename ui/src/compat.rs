// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Blocks on the browser's own confirm dialog.
    pub async fn confirm(prompt: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use rfd::MessageButtons;
    use rfd::MessageDialogResult;
    use rfd::MessageLevel;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Shows a native OK/Cancel dialog.
    pub async fn confirm(prompt: &str) -> bool {
        let answer = rfd::AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Confirm")
            .set_description(prompt)
            .set_buttons(MessageButtons::OkCancel)
            .show()
            .await;

        matches!(answer, MessageDialogResult::Ok | MessageDialogResult::Yes)
    }
}
