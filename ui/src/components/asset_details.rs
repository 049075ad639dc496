use api::Asset;
use dioxus::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::format::display_cost;
use crate::format::display_date;
use crate::format::or_na;

#[component]
fn Field(label: &'static str, children: Element) -> Element {
    rsx! {
        div {
            strong { "{label}: " }
            {children}
        }
    }
}

/// Read-only view of every column of one asset, shown in the details modal.
#[component]
pub fn AssetDetails(asset: Asset) -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 0.75rem;",
            Field { label: "Name", span { "{or_na(&asset.name)}" } }
            Field { label: "Asset Tag", span { "{or_na(&asset.tag)}" } }
            Field { label: "Category", span { "{or_na(&asset.category)}" } }
            Field { label: "Status", StatusBadge { status: asset.status.clone() } }
            Field { label: "Manufacturer", span { "{or_na(&asset.manufacturer)}" } }
            Field { label: "Model", span { "{or_na(&asset.model)}" } }
            Field { label: "Serial Number", span { "{or_na(&asset.serial_number)}" } }
            Field { label: "Location", span { "{or_na(&asset.location)}" } }
            Field { label: "Purchase Date", span { "{display_date(asset.purchase_date.as_ref())}" } }
            Field { label: "Cost", span { "{display_cost(asset.purchase_cost)}" } }
            Field { label: "Warranty Expiry", span { "{display_date(asset.warranty_expiry.as_ref())}" } }
            Field { label: "Assigned To", span { "{or_na(&asset.assigned_to)}" } }
        }
        if !asset.notes.is_empty() {
            div {
                style: "margin-top: 1rem;",
                strong { "Notes:" }
                p { style: "margin-top: 0.25rem; white-space: pre-wrap;", "{asset.notes}" }
            }
        }
    }
}
