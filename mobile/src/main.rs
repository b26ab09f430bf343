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
    #[layout(MobileNavbar)]
    #[route("/")]
    Home {},
    #[route("/analyze")]
    Analyze {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared unified theme, embedded for mobile bundles.

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_analyze(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Analyze {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        home: nav_home,
        analyze: nav_analyze,
    });

    let theme = ThemeService::provide();
    Announcer::provide();
    use_context_provider(DataSource::default);

    let theme_attr = theme.current().as_str();

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            class: "app-root",
            "data-theme": "{theme_attr}",
            div {
                key: "{lang_code()}",
                Router::<Route> { }
            }
        }
    }
}

#[component]
fn MobileNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
