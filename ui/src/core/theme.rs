//! Theme selection service.
//!
//! Injected by each launcher via context rather than read from an ambient
//! global, so views (and tests) always receive an explicit handle.

use dioxus::prelude::*;

use super::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Restore from a persisted value; anything unrecognised is dark.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ThemeService {
    current: Signal<Theme>,
}

impl ThemeService {
    /// Install the service into context, restoring the persisted choice.
    /// Call once from the launcher's root component.
    pub fn provide() -> Self {
        let current = use_signal(|| {
            Theme::parse(storage::load_setting(storage::THEME_KEY).as_deref())
        });
        use_context_provider(|| Self { current })
    }

    pub fn use_theme() -> Self {
        use_context::<Self>()
    }

    pub fn current(&self) -> Theme {
        (self.current)()
    }

    pub fn toggle(&mut self) {
        let next = self.current().toggled();
        self.current.set(next);
        if let Err(err) = storage::store_setting(storage::THEME_KEY, next.as_str()) {
            #[cfg(debug_assertions)]
            eprintln!("[theme] persist failed: {err}");
            #[cfg(not(debug_assertions))]
            let _ = err;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_dark() {
        assert_eq!(Theme::parse(None), Theme::Dark);
        assert_eq!(Theme::parse(Some("mauve")), Theme::Dark);
        assert_eq!(Theme::parse(Some("light")), Theme::Light);
    }

    #[test]
    fn toggle_flips_between_two_states() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
