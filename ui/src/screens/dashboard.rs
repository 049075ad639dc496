//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use api::Asset;
use api::Dashboard;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::empty_state::EmptyState;
use crate::components::pico::{Button, Card, Grid};
use crate::components::status_badge::StatusBadge;
use crate::format::row_key;
use crate::Screen;

#[component]
fn StatCard(label: &'static str, value: usize) -> Element {
    rsx! {
        Card {
            small { "{label}" }
            h2 { style: "margin: 0;", "{value}" }
        }
    }
}

#[component]
fn RecentRow(asset: Asset) -> Element {
    let location = if asset.location.is_empty() {
        "No location"
    } else {
        asset.location.as_str()
    };

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 0.75rem; border: 1px solid var(--pico-muted-border-color); border-radius: var(--pico-border-radius); margin-bottom: 0.5rem;",
            div {
                div { strong { "{asset.name}" } }
                small { "{asset.category} • {location}" }
            }
            StatusBadge { status: asset.status.clone() }
        }
    }
}

#[component]
pub fn DashboardScreen() -> Element {
    let today = use_context::<AppState>().store.today();
    let app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let stats = use_memo(move || Dashboard::summarize(&app_state_mut.assets.read(), today));
    let summary = stats.read();

    rsx! {
        div {
            Grid {
                StatCard { label: "Total Assets", value: summary.total }
                StatCard { label: "Active", value: summary.active }
                StatCard { label: "In Maintenance", value: summary.maintenance }
                StatCard { label: "Retired", value: summary.retired }
            }
            Card {
                h3 { "Recent Assets" }
                if summary.recent.is_empty() {
                    EmptyState {
                        title: "No assets added yet.",
                        action: rsx! {
                            Button {
                                on_click: move |_| active_screen.set(Screen::AddAsset),
                                "Add Asset"
                            }
                        },
                    }
                } else {
                    for (index, asset) in summary.recent.iter().enumerate() {
                        RecentRow {
                            key: "{row_key(asset, index)}",
                            asset: asset.clone(),
                        }
                    }
                }
            }
        }
    }
}
