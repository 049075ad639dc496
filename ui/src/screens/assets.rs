//=============================================================================
// File: src/screens/assets.rs
//=============================================================================
use api::filter;
use api::Asset;
use api::AssetFilter;
use api::AssetId;
use api::AssetView;
use api::Notification;
use api::StatusKind;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::asset_details::AssetDetails;
use crate::components::empty_state::EmptyState;
use crate::components::pico::{Button, ButtonType, Card, Grid, Input, Modal, Select};
use crate::components::status_badge::StatusBadge;
use crate::format::display_date;
use crate::format::or_na;
use crate::format::row_key;
use crate::Screen;

/// One row of the asset table.
#[component]
fn AssetRow(
    asset: Asset,
    on_view: EventHandler<Asset>,
    on_edit: EventHandler<AssetId>,
    on_delete: EventHandler<AssetId>,
) -> Element {
    let tag = if asset.tag.is_empty() {
        "No tag"
    } else {
        asset.tag.as_str()
    };
    let id = asset.id;

    rsx! {
        tr {
            td {
                div { strong { "{asset.name}" } }
                small { "{tag}" }
            }
            td { "{asset.category}" }
            td { StatusBadge { status: asset.status.clone() } }
            td { "{or_na(&asset.location)}" }
            td { "{display_date(asset.purchase_date.as_ref())}" }
            td {
                style: "white-space: nowrap;",
                div {
                    role: "group",
                    style: "font-size: 0.8em;",
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: {
                            let asset = asset.clone();
                            move |_| on_view.call(asset.clone())
                        },
                        "View"
                    }
                    if let Some(id) = id {
                        Button {
                            button_type: ButtonType::Secondary,
                            outline: true,
                            on_click: move |_| on_edit.call(id),
                            "Edit"
                        }
                        Button {
                            button_type: ButtonType::Contrast,
                            outline: true,
                            on_click: move |_| on_delete.call(id),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AssetsScreen() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let mut criteria = use_signal(AssetFilter::default);
    let mut viewing = use_signal::<Option<Asset>>(|| None);
    let mut details_open = use_signal(|| false);
    let mut refreshing = use_signal(|| false);

    let categories = use_memo(move || filter::categories(&app_state_mut.assets.read()));
    let visible = use_memo(move || {
        let criteria = criteria.read();
        criteria
            .apply(&app_state_mut.assets.read())
            .cloned()
            .collect::<Vec<_>>()
    });
    let statuses: Vec<String> = StatusKind::known().map(|kind| kind.to_string()).collect();

    let delete_asset = use_callback({
        let app_state = app_state.clone();
        move |id: AssetId| {
            let app_state = app_state.clone();
            spawn(async move {
                let _ = app_state.store.delete(id).await;
            });
        }
    });

    let refresh = move |_: MouseEvent| {
        let app_state = app_state.clone();
        spawn(async move {
            refreshing.set(true);
            if app_state.store.reload().await.is_ok() {
                app_state
                    .store
                    .view()
                    .notify(Notification::info("Inventory refreshed"));
            }
            refreshing.set(false);
        });
    };

    let title = viewing
        .read()
        .as_ref()
        .map(|asset| asset.name.clone())
        .unwrap_or_else(|| "Asset Details".to_string());

    rsx! {
        Modal {
            is_open: details_open,
            title,
            if let Some(asset) = viewing() {
                AssetDetails { asset }
            }
        }
        Card {
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { "Assets" }
                div {
                    role: "group",
                    style: "width: auto;",
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        disabled: refreshing(),
                        on_click: refresh,
                        if refreshing() { "Refreshing..." } else { "Refresh" }
                    }
                    Button {
                        on_click: move |_| active_screen.set(Screen::AddAsset),
                        "Add Asset"
                    }
                }
            }
            Grid {
                Input {
                    label: "Search",
                    name: "search",
                    input_type: "search",
                    placeholder: "Name, tag, manufacturer, model or assignee",
                    value: criteria.read().search.clone(),
                    on_input: move |value| criteria.write().search = value,
                }
                Select {
                    label: "Category",
                    name: "category-filter",
                    value: criteria.read().category.clone(),
                    options: categories(),
                    placeholder: "All Categories",
                    on_change: move |value| criteria.write().category = value,
                }
                Select {
                    label: "Status",
                    name: "status-filter",
                    value: criteria.read().status.clone(),
                    options: statuses,
                    placeholder: "All Statuses",
                    on_change: move |value| criteria.write().status = value,
                }
            }
            if visible.read().is_empty() {
                EmptyState {
                    title: "No assets found",
                    description: if criteria.read().is_empty() {
                        "Add your first asset to start tracking your inventory.".to_string()
                    } else {
                        "No asset matches the current search and filters.".to_string()
                    },
                }
            } else {
                div {
                    style: "overflow: auto;",
                    table {
                        thead {
                            tr {
                                th { "Asset" }
                                th { "Category" }
                                th { "Status" }
                                th { "Location" }
                                th { "Purchase Date" }
                                th { style: "width: 1%;", "Actions" }
                            }
                        }
                        tbody {
                            for (index, asset) in visible.read().iter().enumerate() {
                                AssetRow {
                                    key: "{row_key(asset, index)}",
                                    asset: asset.clone(),
                                    on_view: move |asset: Asset| {
                                        viewing.set(Some(asset));
                                        details_open.set(true);
                                    },
                                    on_edit: move |id| active_screen.set(Screen::EditAsset(id)),
                                    on_delete: delete_asset,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
