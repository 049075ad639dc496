//=============================================================================
// File: src/screens/asset_form.rs
//=============================================================================
use api::filter;
use api::AssetId;
use api::AssetView;
use api::Notification;
use api::StatusKind;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::pico::{Button, ButtonType, Card, Grid, Input, Select, TextArea};
use crate::draft::AssetDraft;
use crate::Screen;

const CATEGORY_LIST_ID: &str = "asset-category-options";

/// The add form, or the edit form when `editing` names a loaded asset.
#[component]
pub fn AssetFormScreen(editing: Option<AssetId>) -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let mut draft = use_signal(move || {
        editing
            .and_then(|id| {
                app_state_mut
                    .assets
                    .peek()
                    .iter()
                    .find(|asset| asset.id == Some(id))
                    .map(AssetDraft::from_asset)
            })
            .unwrap_or_default()
    });
    let mut submitting = use_signal(|| false);

    let categories = use_memo(move || filter::categories(&app_state_mut.assets.read()));

    // an unusual status read from the sheet stays selectable while editing
    let statuses = {
        let current = draft.read().status.clone();
        let mut statuses: Vec<String> = StatusKind::known().map(|kind| kind.to_string()).collect();
        if !current.is_empty() && !statuses.contains(&current) {
            statuses.push(current);
        }
        statuses
    };

    let (heading, submit_label) = match editing {
        Some(_) => ("Edit Asset", "Update Asset"),
        None => ("Add New Asset", "Add Asset"),
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let form = draft.read().clone();
        let missing = form.missing_required();
        if !missing.is_empty() {
            app_state.store.view().notify(Notification::error(format!(
                "Please fill in: {}",
                missing.join(", ")
            )));
            return;
        }

        let app_state = app_state.clone();
        spawn(async move {
            submitting.set(true);
            let record = form.to_asset();
            let saved = match editing {
                Some(id) => app_state.store.update(id, record).await.is_ok(),
                None => app_state.store.create(record).await.is_ok(),
            };
            submitting.set(false);

            if saved {
                draft.set(AssetDraft::default());
                active_screen.set(Screen::Assets);
            }
        });
    };

    rsx! {
        Card {
            h3 { "{heading}" }
            form {
                style: "overflow-y: auto;",
                onsubmit: on_submit,
                Grid {
                    Input {
                        label: "Asset Name *",
                        name: "name",
                        required: true,
                        value: draft.read().name.clone(),
                        on_input: move |value| draft.write().name = value,
                    }
                    Input {
                        label: "Asset Tag",
                        name: "tag",
                        value: draft.read().tag.clone(),
                        on_input: move |value| draft.write().tag = value,
                    }
                }
                Grid {
                    Input {
                        label: "Category *",
                        name: "category",
                        required: true,
                        list: CATEGORY_LIST_ID.to_string(),
                        value: draft.read().category.clone(),
                        on_input: move |value| draft.write().category = value,
                    }
                    Select {
                        label: "Status *",
                        name: "status",
                        required: true,
                        placeholder: "Select status",
                        options: statuses,
                        value: draft.read().status.clone(),
                        on_change: move |value| draft.write().status = value,
                    }
                }
                datalist {
                    id: CATEGORY_LIST_ID,
                    for category in categories() {
                        option { key: "{category}", value: "{category}" }
                    }
                }
                Grid {
                    Input {
                        label: "Manufacturer",
                        name: "manufacturer",
                        value: draft.read().manufacturer.clone(),
                        on_input: move |value| draft.write().manufacturer = value,
                    }
                    Input {
                        label: "Model",
                        name: "model",
                        value: draft.read().model.clone(),
                        on_input: move |value| draft.write().model = value,
                    }
                    Input {
                        label: "Serial Number",
                        name: "serial_number",
                        value: draft.read().serial_number.clone(),
                        on_input: move |value| draft.write().serial_number = value,
                    }
                }
                Grid {
                    Input {
                        label: "Location",
                        name: "location",
                        value: draft.read().location.clone(),
                        on_input: move |value| draft.write().location = value,
                    }
                    Input {
                        label: "Assigned To",
                        name: "assigned_to",
                        value: draft.read().assigned_to.clone(),
                        on_input: move |value| draft.write().assigned_to = value,
                    }
                }
                Grid {
                    Input {
                        label: "Purchase Date",
                        name: "purchase_date",
                        input_type: "date",
                        value: draft.read().purchase_date.clone(),
                        on_input: move |value| draft.write().purchase_date = value,
                    }
                    Input {
                        label: "Purchase Cost",
                        name: "purchase_cost",
                        input_type: "number",
                        placeholder: "0.00",
                        value: draft.read().purchase_cost.clone(),
                        on_input: move |value| draft.write().purchase_cost = value,
                    }
                    Input {
                        label: "Warranty Expiry",
                        name: "warranty_expiry",
                        input_type: "date",
                        value: draft.read().warranty_expiry.clone(),
                        on_input: move |value| draft.write().warranty_expiry = value,
                    }
                }
                TextArea {
                    label: "Notes",
                    name: "notes",
                    value: draft.read().notes.clone(),
                    on_input: move |value| draft.write().notes = value,
                }
                div {
                    role: "group",
                    Button {
                        kind: "submit",
                        disabled: submitting(),
                        if submitting() { "Saving..." } else { "{submit_label}" }
                    }
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| {
                            draft.set(AssetDraft::default());
                            active_screen.set(Screen::Assets);
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}
