#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::a11y::Announcer;
use ui::core::theme::ThemeService;
use ui::dashboard::DataSource;
use ui::views::{Analyze, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/analyze")]
    Analyze {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("SentimentX – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_analyze(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Analyze {}, "{label}" })
}

/// Desktop talks to a real analyze endpoint when one is configured, and
/// falls back to the canned samples otherwise.
fn resolve_data_source() -> DataSource {
    std::env::var("SENTIMENTX_API")
        .ok()
        .filter(|base_url| !base_url.trim().is_empty())
        .map(|base_url| DataSource::Backend { base_url })
        .unwrap_or_default()
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code signal (mirrors the web approach).
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        analyze: nav_analyze,
    });

    let theme = ThemeService::provide();
    Announcer::provide();
    use_context_provider(resolve_data_source);

    // Runtime maximize fallback (in case the initial builder flag is
    // ignored by the window manager).
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    let theme_attr = theme.current().as_str();

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds).
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            class: "app-root",
            "data-theme": "{theme_attr}",
            // Keyed wrapper forces a full remount on language change.
            div {
                key: "{lang_code()}",
                Router::<Route> { }
            }
        }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
