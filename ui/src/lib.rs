// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
mod draft;
mod format;
mod screens;

use api::ApiConfig;
use api::AssetId;
use api::SheetApi;
use api::Url;
use app_state::AppState;
use app_state_mut::use_app_state_mut;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Card;
use components::pico::Container;
use components::toast::ToastStack;
use screens::asset_form::AssetFormScreen;
use screens::assets::AssetsScreen;
use screens::dashboard::DashboardScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
enum Screen {
    #[default]
    Dashboard,
    Assets,
    AddAsset,
    EditAsset(AssetId),
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Assets => "Assets",
            Screen::AddAsset => "Add Asset",
            Screen::EditAsset(_) => "Edit Asset",
        }
    }

    /// Whether the tab for `tab` should be highlighted while `self` is shown.
    /// Editing happens on the add form, so it lights up that tab.
    fn highlights(&self, tab: &Screen) -> bool {
        match (self, tab) {
            (Screen::EditAsset(_), Screen::AddAsset) => true,
            (active, current) => active == current,
        }
    }
}

/// Enum to represent the current view mode (for simulation).
#[derive(Clone, PartialEq, Default)]
enum ViewMode {
    #[default]
    Desktop,
    Mobile,
}

/// The screens reachable from the navigation.
const ALL_SCREENS: [Screen; 3] = [Screen::Dashboard, Screen::Assets, Screen::AddAsset];

/// The desktop navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if active_screen.read().highlights(&screen) { "active-tab" } else { "" },
                            "aria-current": if active_screen.read().highlights(&screen) { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

/// The mobile "hamburger" dropdown menu component.
#[component]
fn HamburgerMenu(active_screen: Signal<Screen>, view_mode: Signal<ViewMode>) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "hamburger-menu-container",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| is_open.toggle(),
                "≡"
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for screen in ALL_SCREENS {
                        a {
                            class: if active_screen.read().highlights(&screen) { "custom-dropdown-item active-tab" } else { "custom-dropdown-item" },
                            href: "#",
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                                is_open.set(false);
                            },
                            "{screen.name()}"
                        }
                    }
                    hr {}
                    a {
                        class: "custom-dropdown-item",
                        href: "#",
                        onclick: move |event| {
                            event.prevent_default();
                            view_mode.set(ViewMode::Desktop);
                            is_open.set(false);
                        },
                        "Desktop View"
                    }
                }
            }
        }
    }
}

/// Renders whichever screen is active.
#[component]
fn ScreenContent(active_screen: Signal<Screen>) -> Element {
    match active_screen() {
        Screen::Dashboard => rsx! {
            DashboardScreen {}
        },
        Screen::Assets => rsx! {
            AssetsScreen {}
        },
        Screen::AddAsset => {
            let add_key = "add";
            rsx! {
                AssetFormScreen { key: "{add_key}" }
            }
        }
        Screen::EditAsset(id) => rsx! {
            AssetFormScreen { key: "edit-{id}", editing: id }
        },
    }
}

/// Where the first load of the inventory stands.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LoadPhase<'a> {
    Loading,
    Ready,
    Failed(&'a str),
}

impl<'a> LoadPhase<'a> {
    fn of(state: &'a Option<Result<(), String>>) -> Self {
        match state {
            None => Self::Loading,
            Some(Ok(())) => Self::Ready,
            Some(Err(e)) => Self::Failed(e),
        }
    }

    /// A failed load leaves the app usable with an empty inventory.
    fn shows_screens(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Shows the active screen once the first load has finished, with a retry
/// banner above it when that load failed.
#[component]
fn LoadGate(
    state: Option<Result<(), String>>,
    on_retry: EventHandler<MouseEvent>,
    active_screen: Signal<Screen>,
) -> Element {
    let phase = LoadPhase::of(&state);

    rsx! {
        if let LoadPhase::Failed(e) = phase {
            article {
                role: "alert",
                style: "display: flex; justify-content: space-between; align-items: center; gap: 1rem; padding: 0.5rem 1rem; margin-bottom: 1rem; flex: none;",
                small { "Failed to load assets: {e}" }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |evt| on_retry.call(evt),
                    "Retry"
                }
            }
        }
        if phase.shows_screens() {
            ScreenContent { active_screen }
        } else {
            Card {
                h3 { "Loading..." }
                progress {}
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
        background-color: var(--muted-border-color);
    }

    .app-main-container {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        padding: 10px;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        background-color: var(--background-color);
        z-index: 100;
    }

    .app-main-container > * {
        flex: 1;
        display: flex !important;
        flex-direction: column;
        height: 100%;
        min-height: 0;
        overflow: hidden;
        margin: 0 !important;
        width: 100% !important;
        max-width: 100% !important;
    }

    .app-main-container header {
        flex-shrink: 0;
        padding: 0 1rem;
        margin-bottom: 0;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-radius: 10px 10px 0 0;
        border-top: 3px solid color-mix(in srgb, var(--pico-primary), transparent 90%) !important;
        background: linear-gradient(
            to bottom,
            color-mix(in srgb, var(--pico-primary), transparent 95%),
            transparent
        ) !important;
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .custom-dropdown-item.active-tab {
        color: var(--pico-primary);
        font-weight: bold;
        border-left: 4px solid var(--pico-primary);
        padding-left: calc(1rem - 4px);
        background-color: var(--pico-card-background-color);
    }

    .app-main-container .content {
        flex: 1;
        display: flex;
        flex-direction: column;
        overflow-y: auto;
        min-height: 0;
        padding: 0 1rem;
    }

    .mobile-view-wrapper { display: flex; justify-content: center; align-items: flex-start; padding-top: 2rem; min-height: 100vh; background-color: var(--muted-border-color); }
    .mobile-view-content { width: 100%; max-width: 400px; height: 800px; border-radius: 1.5rem; overflow: hidden; display: flex; flex-direction: column; border: 4px solid #374151; box-shadow: 0 10px 40px rgba(0,0,0,0.25); background-color: var(--card-background-color); }
    .mobile-view-content header { flex-shrink: 0; padding: 1rem; border-bottom: 1px solid var(--card-border-color); background-color: var(--card-background-color); }
    .mobile-view-content .content { flex-grow: 1; overflow-y: auto; padding: 1rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let endpoint = use_hook(|| {
        let config = ApiConfig::from_env();
        dioxus_logger::tracing::info!("using sheet '{}' at {}", config.sheet, config.api_url);
        config.endpoint().map_err(|e| e.to_string())
    });

    match endpoint {
        Ok(endpoint) => rsx! {
            LoadedApp { endpoint }
        },
        Err(e) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
    }
}

/// This component holds the main app logic and only runs once the sheet
/// endpoint is known.
#[component]
fn LoadedApp(endpoint: Url) -> Element {
    // Create the signals for mutable state and provide them.
    let app_state_mut = use_app_state_mut();
    use_context_provider(|| app_state_mut);

    // Provide the stable, non-reactive AppState.
    let app_state = use_context_provider(|| AppState::new(SheetApi::new(endpoint), app_state_mut));

    let mut initial_load = use_resource(move || {
        let app_state = app_state.clone();
        async move { app_state.store.reload().await.map_err(|e| e.to_string()) }
    });

    let active_screen = use_signal(Screen::default);
    let mut view_mode = use_signal(ViewMode::default);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    let load_state = initial_load.read().clone();

    rsx! {
        ToastStack {}
        if view_mode() == ViewMode::Desktop {
            div {
                class: "app-main-container",
                Container {
                    header {
                        nav {
                            ul {
                                li {
                                    strong { "IT Asset Tracker" }
                                }
                                // Conditionally render the button based on the environment variable.
                                if option_env!("VIEW_MODE_TOGGLE") == Some("1") {
                                    li {
                                        Button {
                                            button_type: ButtonType::Contrast,
                                            outline: true,
                                            on_click: move |_| view_mode.set(ViewMode::Mobile),
                                            "Mobile View"
                                        }
                                    }
                                }
                            }
                            ul {
                                li {
                                    Tabs {
                                        active_screen,
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "content",
                        LoadGate {
                            state: load_state.clone(),
                            on_retry: move |_| initial_load.restart(),
                            active_screen,
                        }
                    }
                }
            }
        } else {
            div {
                class: "mobile-view-wrapper",
                div {
                    class: "mobile-view-content",
                    header {
                        nav {
                            ul {
                                li {
                                    h1 {
                                        style: "margin: 0; font-size: 1.5rem;",
                                        "IT Asset Tracker"
                                    }
                                }
                            }
                            ul {
                                li {
                                    HamburgerMenu {
                                        active_screen,
                                        view_mode,
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "content",
                        LoadGate {
                            state: load_state.clone(),
                            on_retry: move |_| initial_load.restart(),
                            active_screen,
                        }
                    }
                }
            }
        }
    }
}
