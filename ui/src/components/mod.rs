//! Shared building blocks used by more than one screen.
pub mod asset_details;
pub mod empty_state;
pub mod pico;
pub mod status_badge;
pub mod toast;
