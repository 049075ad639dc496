use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    action: Option<Element>,
}

/// Placeholder shown where a list has nothing to show.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                padding: 2rem;
                text-align: center;
                color: var(--pico-muted-color);
                border: 2px dashed var(--pico-card-border-color);
                border-radius: var(--pico-border-radius);
                margin: 1rem 0;
            ",
            h4 { style: "margin-bottom: 0.5rem;", "{props.title}" }
            if let Some(description) = props.description {
                p { style: "max-width: 400px; margin: 0 auto 1rem auto;", "{description}" }
            }
            if let Some(action) = props.action {
                div { {action} }
            }
        }
    }
}
