use dioxus::prelude::*;

/// Query + tweet-count form. Validation and count clamping live in the
/// dashboard engine; the form only collects raw strings and reports submit.
#[component]
pub fn SearchForm(
    query: Signal<String>,
    count: Signal<String>,
    loading: bool,
    error: Option<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let mut query = query;
    let mut count = count;
    let has_error = error.is_some();

    rsx! {
        form {
            class: "search-form",
            role: "search",
            aria_label: "Tweet analysis search",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },

            div { class: "search-form__fields",
                label { class: "sr-only", r#for: "search-input", "Search term or hashtag" }
                input {
                    id: "search-input",
                    class: "search-form__query",
                    r#type: "text",
                    placeholder: "Enter search term or hashtag...",
                    value: "{query}",
                    disabled: loading,
                    aria_invalid: has_error,
                    oninput: move |evt| query.set(evt.value()),
                }

                label { class: "sr-only", r#for: "count-input", "Number of tweets to analyze (1-100)" }
                input {
                    id: "count-input",
                    class: "search-form__count",
                    r#type: "number",
                    placeholder: "Count",
                    min: "1",
                    max: "100",
                    value: "{count}",
                    disabled: loading,
                    oninput: move |evt| count.set(evt.value()),
                }
            }

            button {
                r#type: "submit",
                class: "button button--primary search-form__submit",
                disabled: loading,
                if loading {
                    span { class: "spinner", role: "status", aria_label: "Analyzing tweets" }
                    "Analyzing…"
                } else {
                    "Analyze Tweets →"
                }
            }

            if let Some(message) = error {
                div { class: "error-banner", role: "alert",
                    span { aria_hidden: "true", "⚠️ " }
                    span { "{message}" }
                }
            }
        }
    }
}
