use api::AssetStore;
use api::SheetApi;
use std::ops::Deref;
use std::rc::Rc;

use crate::app_state_mut::AppStateMut;

pub type Store = AssetStore<SheetApi, AppStateMut>;

pub struct AppStateData {
    pub store: Store,
}

/// The long-lived, non-reactive application state.
///
/// Created once when the app starts and shared through the Dioxus context.
/// The store inside pushes its snapshots into the reactive [`AppStateMut`].
#[derive(Clone)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(backend: SheetApi, view: AppStateMut) -> Self {
        Self(Rc::new(AppStateData {
            store: AssetStore::new(backend, view),
        }))
    }
}
