//! The in-memory mirror of the remote asset collection.
//!
//! The store never merges. Every successful write is followed by a full
//! reload, and the view only ever sees the last snapshot the server returned.

use chrono::NaiveDate;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use tokio::sync::RwLock;

use crate::asset::Asset;
use crate::asset::AssetId;
use crate::asset::DateCell;
use crate::dashboard::Dashboard;
use crate::error::StoreError;
use crate::filter;
use crate::filter::AssetFilter;
use crate::notification::Notification;
use crate::sheet_api::AssetBackend;
use crate::sheet_api::Mutation;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this asset?";
pub const LOAD_FAILED: &str = "Failed to load data from server";

/// The presentation side of the store.
pub trait AssetView {
    /// Called with the new collection after every successful reload.
    fn render(&self, assets: &[Asset]);

    /// Shows a transient message.
    fn notify(&self, notification: Notification);

    /// Asks the user to confirm a destructive action.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// The three kinds of write, used to phrase notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
enum Operation {
    Add,
    Update,
    Delete,
}

impl Operation {
    fn success_message(self) -> &'static str {
        match self {
            Self::Add => "Asset added successfully!",
            Self::Update => "Asset updated successfully!",
            Self::Delete => "Asset deleted successfully!",
        }
    }

    fn failure_message(self, err: &StoreError) -> String {
        let verb: &'static str = self.into();
        match err.server_message() {
            Some(reason) => format!("Failed to {verb} asset: {reason}"),
            None => format!("Failed to {verb} asset"),
        }
    }
}

#[derive(Debug)]
struct Snapshot {
    assets: Vec<Asset>,
    next_id: AssetId,
}

/// Computes the next provisional identifier: one past the highest known id,
/// or `1` when no record carries one.
pub fn next_id_after(assets: &[Asset]) -> AssetId {
    assets
        .iter()
        .filter_map(|asset| asset.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

fn utc_today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Keeps a local copy of the inventory consistent with the server's view.
///
/// The snapshot lock is never held across a network call. Two reloads that
/// overlap are not coordinated: whichever response arrives last wins.
pub struct AssetStore<B, V> {
    backend: B,
    view: V,
    snapshot: RwLock<Snapshot>,
    today: fn() -> NaiveDate,
}

impl<B: AssetBackend, V: AssetView> AssetStore<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view,
            snapshot: RwLock::new(Snapshot {
                assets: Vec::new(),
                next_id: 1,
            }),
            today: utc_today,
        }
    }

    /// Replaces the clock used to stamp new records.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    /// Replaces the whole collection with the server's.
    ///
    /// On failure the previous collection stays in place and the user is
    /// told; the error is returned for callers that care.
    pub async fn reload(&self) -> Result<(), StoreError> {
        match self.backend.fetch_records().await {
            Ok(records) => {
                let mut snapshot = self.snapshot.write().await;
                snapshot.next_id = next_id_after(&records);
                snapshot.assets = records;
                info!(
                    "loaded {} assets, next id {}",
                    snapshot.assets.len(),
                    snapshot.next_id
                );
                let snapshot = snapshot.downgrade();
                self.view.render(&snapshot.assets);
                Ok(())
            }
            Err(e) => {
                error!("Failed to load assets: {e}");
                self.view.notify(Notification::error(LOAD_FAILED));
                Err(e)
            }
        }
    }

    /// Stamps `asset` with the next provisional id and today's date, sends
    /// it, and reloads once the server accepts it.
    ///
    /// The provisional id is consumed even if the server refuses the record.
    pub async fn create(&self, mut asset: Asset) -> Result<AssetId, StoreError> {
        let id = {
            let mut snapshot = self.snapshot.write().await;
            let id = snapshot.next_id;
            snapshot.next_id = id.saturating_add(1);
            id
        };
        asset.id = Some(id);
        asset.date_added = Some(DateCell::Date(self.today()));

        debug!("creating asset {id}");
        let outcome = self.send(Mutation::Create(asset)).await;
        self.settle(Operation::Add, outcome).await.map(|()| id)
    }

    /// Replaces record `id` with `asset` on the server and reloads.
    ///
    /// A record without a date added keeps the one currently loaded, since the
    /// edit form does not carry it.
    pub async fn update(&self, id: AssetId, mut asset: Asset) -> Result<(), StoreError> {
        asset.id = Some(id);
        if asset.date_added.is_none() {
            asset.date_added = self.get(id).await.and_then(|current| current.date_added);
        }

        debug!("updating asset {id}");
        let outcome = self.send(Mutation::update(asset)).await;
        self.settle(Operation::Update, outcome).await
    }

    /// Deletes record `id` after the user confirms, then reloads.
    ///
    /// Returns `Ok(false)` without touching the network when the user declines.
    pub async fn delete(&self, id: AssetId) -> Result<bool, StoreError> {
        if !self.view.confirm(DELETE_PROMPT).await {
            debug!("delete of asset {id} declined");
            return Ok(false);
        }

        debug!("deleting asset {id}");
        let outcome = self.send(Mutation::delete(id)).await;
        self.settle(Operation::Delete, outcome).await.map(|()| true)
    }

    async fn send(&self, mutation: Mutation) -> Result<(), StoreError> {
        self.backend.submit(&mutation).await?.into_result()
    }

    async fn settle(
        &self,
        operation: Operation,
        outcome: Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        match outcome {
            Ok(()) => {
                self.view
                    .notify(Notification::success(operation.success_message()));
                // A failed reload has already been reported; the write itself stands.
                let _ = self.reload().await;
                Ok(())
            }
            Err(e) => {
                warn!("{operation:?} failed: {e}");
                self.view
                    .notify(Notification::error(operation.failure_message(&e)));
                Err(e)
            }
        }
    }

    /// A copy of the current collection.
    pub async fn assets(&self) -> Vec<Asset> {
        self.snapshot.read().await.assets.clone()
    }

    pub async fn get(&self, id: AssetId) -> Option<Asset> {
        self.snapshot
            .read()
            .await
            .assets
            .iter()
            .find(|asset| asset.id == Some(id))
            .cloned()
    }

    /// The id the next [`create`](Self::create) will use.
    pub async fn next_id(&self) -> AssetId {
        self.snapshot.read().await.next_id
    }

    pub async fn categories(&self) -> Vec<String> {
        filter::categories(&self.snapshot.read().await.assets)
    }

    pub async fn filtered(&self, criteria: &AssetFilter) -> Vec<Asset> {
        let snapshot = self.snapshot.read().await;
        criteria.apply(&snapshot.assets).cloned().collect()
    }

    pub async fn dashboard(&self) -> Dashboard {
        Dashboard::summarize(&self.snapshot.read().await.assets, self.today())
    }
}
