//! Screen-reader announcement service.
//!
//! An explicit injected service (mirroring `ThemeService`) that collects
//! recent messages; `LiveRegions` renders them into visually-hidden
//! `aria-live` containers.

use dioxus::prelude::*;

const MAX_RECENT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Polite,
    Assertive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub message: String,
    pub priority: Priority,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Announcer {
    feed: Signal<Vec<Announcement>>,
}

impl Announcer {
    pub fn provide() -> Self {
        let feed = use_signal(Vec::new);
        use_context_provider(|| Self { feed })
    }

    pub fn use_announcer() -> Self {
        use_context::<Self>()
    }

    pub fn announce<T: Into<String>>(&mut self, message: T, priority: Priority) {
        self.feed.with_mut(|feed| {
            feed.push(Announcement {
                message: message.into(),
                priority,
            });
            let overflow = feed.len().saturating_sub(MAX_RECENT);
            if overflow > 0 {
                feed.drain(..overflow);
            }
        });
    }

    fn messages(&self, priority: Priority) -> Vec<String> {
        (self.feed)()
            .iter()
            .filter(|a| a.priority == priority)
            .map(|a| a.message.clone())
            .collect()
    }
}

#[component]
pub fn LiveRegions() -> Element {
    let announcer = Announcer::use_announcer();
    let polite = announcer.messages(Priority::Polite);
    let assertive = announcer.messages(Priority::Assertive);

    rsx! {
        div { class: "sr-only", aria_live: "polite", aria_atomic: "true",
            for (idx, message) in polite.iter().enumerate() {
                div { key: "{idx}", "{message}" }
            }
        }
        div { class: "sr-only", aria_live: "assertive", aria_atomic: "true",
            for (idx, message) in assertive.iter().enumerate() {
                div { key: "{idx}", "{message}" }
            }
        }
    }
}
