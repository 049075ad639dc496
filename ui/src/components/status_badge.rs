use api::StatusKind;
use dioxus::prelude::*;

fn colors(kind: StatusKind) -> (&'static str, &'static str) {
    match kind {
        StatusKind::Active => ("#dcfce7", "#166534"),
        StatusKind::Maintenance => ("#fef9c3", "#854d0e"),
        StatusKind::Retired => ("#fee2e2", "#991b1b"),
        StatusKind::Other => ("#f3f4f6", "#1f2937"),
    }
}

/// A rounded pill coloured by status: green, yellow, red, or grey for
/// anything the inventory does not recognise.
#[component]
pub fn StatusBadge(status: String) -> Element {
    let (background, foreground) = colors(StatusKind::classify(&status));
    let text = if status.is_empty() { "N/A" } else { status.as_str() };

    rsx! {
        span {
            style: "display: inline-flex; padding: 0.1rem 0.6rem; border-radius: 9999px; font-size: 0.75em; font-weight: 600; background-color: {background}; color: {foreground};",
            "{text}"
        }
    }
}
