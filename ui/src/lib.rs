//! Shared UI crate for SentimentX. Cross-platform views, the chart
//! renderer, and the export/share machinery live here.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod export;
pub mod i18n;
pub mod share;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod export_panel;
    pub use export_panel::ExportPanel;

    pub mod share_panel;
    pub use share_panel::SharePanel;

    pub mod search_form;
    pub use search_form::SearchForm;

    pub mod stats_panel;
    pub use stats_panel::StatsPanel;

    pub mod theme_toggle;
    pub use theme_toggle::ThemeToggle;

    pub mod tweet_card;
    pub use tweet_card::{SentimentBadge, TweetCard};
}
