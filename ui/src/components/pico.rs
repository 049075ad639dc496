//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Contrast,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
            ButtonType::Contrast => "contrast",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
    /// `"submit"` inside forms.
    #[props(default = "button".to_string())]
    kind: String,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.button_type, props.outline) {
        (ButtonType::Primary, true) => "outline".to_string(),
        (other, true) => format!("{} outline", other.to_class()),
        (other, false) => other.to_class().to_string(),
    };
    rsx! {
        button {
            r#type: "{props.kind}",
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = false)]
    required: bool,
    #[props(optional)]
    list: Option<String>,
}

/// A labeled, controlled form input field.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                value: "{props.value}",
                placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                required: props.required,
                list: props.list.clone(),
                step: if props.input_type == "number" { "0.01" },
                min: if props.input_type == "number" { "0" },
                oninput: move |evt: FormEvent| props.on_input.call(evt.value()),
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextAreaProps {
    label: String,
    name: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = 3)]
    rows: u32,
}

pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            textarea {
                name: "{props.name}",
                rows: "{props.rows}",
                value: "{props.value}",
                oninput: move |evt: FormEvent| props.on_input.call(evt.value()),
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SelectProps {
    label: String,
    name: String,
    value: String,
    options: Vec<String>,
    on_change: EventHandler<String>,
    /// Text of the leading empty option, e.g. "All Categories".
    #[props(optional)]
    placeholder: Option<String>,
    #[props(default = false)]
    required: bool,
}

/// A labeled drop-down. The empty value stands for "nothing chosen".
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            select {
                name: "{props.name}",
                required: props.required,
                value: "{props.value}",
                onchange: move |evt: FormEvent| props.on_change.call(evt.value()),
                if let Some(placeholder) = &props.placeholder {
                    option { value: "", selected: props.value.is_empty(), "{placeholder}" }
                }
                for opt in props.options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == props.value,
                        "{opt}"
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    title: String,
    children: Element,
}

pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            dialog {
                open: true,
                onclick: move |_| props.is_open.set(false),
                article {
                    onclick: |evt| evt.stop_propagation(),
                    header {
                        a {
                            href: "#",
                            "aria-label": "Close",
                            class: "close",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                props.is_open.set(false);
                            }
                        }
                        h3 { style: "margin-bottom: 0;", "{props.title}" }
                    }
                    {props.children}
                }
            }
        }
    }
}
