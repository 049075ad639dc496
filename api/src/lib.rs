//! This crate contains the inventory core shared by every front end: the asset
//! model, the spreadsheet client, and the store that mirrors the sheet.
//!
//! Nothing in here depends on a presentation layer. Front ends implement
//! [`store::AssetView`] and hand it to an [`store::AssetStore`].

pub mod asset;
mod cells;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod notification;
pub mod sheet_api;
pub mod store;

pub use asset::Asset;
pub use asset::AssetId;
pub use asset::DateCell;
pub use asset::StatusKind;
pub use config::ApiConfig;
pub use dashboard::Dashboard;
pub use error::StoreError;
pub use filter::AssetFilter;
pub use notification::Notification;
pub use notification::NotificationKind;
pub use sheet_api::AssetBackend;
pub use sheet_api::SheetApi;
pub use store::AssetStore;
pub use store::AssetView;

pub use reqwest::Url;
