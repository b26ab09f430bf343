use dioxus::prelude::*;

use crate::core::format;
use crate::core::model::Sentiment;
use crate::core::stats::SentimentStats;

/// Headline stat cards plus the per-label progress breakdown.
#[component]
pub fn StatsPanel(stats: SentimentStats) -> Element {
    let total = format::format_count(stats.total as u32);
    let overall = stats.overall();
    let overall_word = match overall {
        Sentiment::Positive => "Positive",
        Sentiment::Negative => "Negative",
        Sentiment::Neutral => "Neutral",
    };
    let trend_arrow = if stats.positive_percentage > 50.0 { "↗" } else { "↘" };
    let positive_pct = format::format_percent(stats.positive_percentage);

    rsx! {
        div { class: "stats-grid",
            div { class: "stat-card",
                div { class: "stat-card__header",
                    span { class: "stat-card__label", "Total Tweets" }
                    span { class: "stat-card__trend", "↗ +{stats.total}" }
                }
                div { class: "stat-card__value", "{total}" }
                div { class: "stat-card__subtitle", "analyzed successfully" }
            }
            div { class: "stat-card",
                div { class: "stat-card__header",
                    span { class: "stat-card__label", "Sentiment Score" }
                    span { class: "stat-card__trend", "{trend_arrow} {positive_pct}" }
                }
                div { class: "stat-card__value", "{overall_word}" }
                div { class: "stat-card__subtitle", "overall sentiment" }
            }
        }

        section { class: "progress-section", aria_label: "Sentiment breakdown",
            h3 { class: "section-title", "⏱️ Sentiment Breakdown" }
            div { class: "progress-list",
                ProgressBar {
                    label: "Positive".to_string(),
                    value: stats.positive,
                    max: stats.total,
                    color: Sentiment::Positive.color().to_string(),
                }
                ProgressBar {
                    label: "Negative".to_string(),
                    value: stats.negative,
                    max: stats.total,
                    color: Sentiment::Negative.color().to_string(),
                }
                ProgressBar {
                    label: "Neutral".to_string(),
                    value: stats.neutral,
                    max: stats.total,
                    color: Sentiment::Neutral.color().to_string(),
                }
            }
        }
    }
}

#[component]
fn ProgressBar(label: String, value: usize, max: usize, color: String) -> Element {
    let percentage = if max == 0 {
        0.0
    } else {
        100.0 * value as f64 / max as f64
    };
    let pct_label = format::format_percent(percentage);

    rsx! {
        div { class: "progress-row", role: "group", aria_label: "{label} share",
            div { class: "progress-row__header",
                span { class: "progress-row__label", "{label}" }
                span { class: "progress-row__value", "{value}/{max}" }
            }
            div {
                class: "progress-bar",
                role: "progressbar",
                aria_valuenow: "{value}",
                aria_valuemin: "0",
                aria_valuemax: "{max}",
                div {
                    class: "progress-bar__fill",
                    style: "width: {percentage}%; background-color: {color}",
                }
            }
            div { class: "progress-row__percentage", "{pct_label} of analyzed tweets" }
        }
    }
}
