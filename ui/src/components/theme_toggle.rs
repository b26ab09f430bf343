use dioxus::prelude::*;

use crate::core::a11y::{Announcer, Priority};
use crate::core::theme::{Theme, ThemeService};

/// Dark/light switch backed by the injected `ThemeService`; the choice is
/// persisted and restored on the next launch.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = ThemeService::use_theme();
    let mut announcer = Announcer::use_announcer();

    let current = theme.current();
    let icon = match current {
        Theme::Dark => "🌙",
        Theme::Light => "☀️",
    };
    let next = current.toggled().as_str();
    let pressed = current == Theme::Light;

    rsx! {
        button {
            r#type: "button",
            class: "theme-toggle",
            role: "switch",
            aria_pressed: pressed,
            aria_label: "Switch to {next} mode",
            onclick: move |_| {
                theme.toggle();
                announcer.announce(
                    format!("Switched to {} theme", theme.current().as_str()),
                    Priority::Polite,
                );
            },
            span { class: "theme-toggle__icon", aria_hidden: "true", "{icon}" }
        }
    }
}
