use dioxus::prelude::*;

use crate::components::{ExportPanel, SharePanel};
use crate::core::format;
use crate::core::model::Sentiment;
use crate::core::stats::SentimentStats;
use crate::core::timing;

use super::{snapshot, ChartHandle, SeriesPoint};

/// Reveal delay before the entrance animation starts.
const REVEAL_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Donut,
}

/// A single-series chart card with export and share actions.
///
/// The SVG markup is computed per render at its fully-revealed state; the
/// entrance animation is CSS-only, so exports never capture a transient
/// frame.
#[component]
pub fn AnimatedChart(
    series: Vec<SeriesPoint>,
    kind: ChartKind,
    title: String,
    #[props(default = String::from("#FF6B35"))] color: String,
    stats: SentimentStats,
) -> Element {
    let revealed = use_signal(|| false);
    let mut show_export = use_signal(|| false);
    let mut show_share = use_signal(|| false);

    use_future(move || {
        let mut revealed = revealed;
        async move {
            timing::sleep_ms(REVEAL_DELAY_MS).await;
            revealed.set(true);
        }
    });

    let slug = format::slugify(&title);
    let markup = match kind {
        ChartKind::Line => snapshot::line_svg(&series, &color, &slug),
        ChartKind::Bar => snapshot::bar_svg(&series, &color, &slug),
        ChartKind::Donut => snapshot::donut_svg(&series, &slug),
    };
    let handle = ChartHandle::new(title.clone(), markup.clone());

    let canvas_class = if revealed() {
        "chart-canvas chart-canvas--revealed"
    } else {
        "chart-canvas"
    };

    rsx! {
        div { class: "chart-container",
            div { class: "chart-header",
                h4 { class: "chart-title", "{title}" }
                ChartActions { title: title.clone(), show_export, show_share }
            }

            match markup {
                Some(svg) => rsx! {
                    div { class: "{canvas_class}", dangerous_inner_html: "{svg}" }
                },
                None => rsx! {
                    p { class: "chart-placeholder", "Nothing to chart yet." }
                },
            }

            if kind == ChartKind::Donut {
                div { class: "donut-legend",
                    for point in series.iter() {
                        div { class: "legend-item", key: "{point.label}",
                            span {
                                class: "legend-color",
                                style: format!(
                                    "background-color: {}",
                                    point.color.as_deref().unwrap_or(Sentiment::Neutral.color())
                                ),
                            }
                            span { class: "legend-label", "{point.label}" }
                            span { class: "legend-value", "{point.value}" }
                        }
                    }
                }
            }

            if show_export() {
                ExportPanel { handle: handle.clone(), on_close: move |_| show_export.set(false) }
            }
            if show_share() {
                SharePanel {
                    handle,
                    stats,
                    on_close: move |_| show_share.set(false),
                }
            }
        }
    }
}

/// Share + export buttons shared by every chart card.
#[component]
pub fn ChartActions(
    title: String,
    show_export: Signal<bool>,
    show_share: Signal<bool>,
) -> Element {
    let mut show_export = show_export;
    let mut show_share = show_share;

    rsx! {
        div { class: "chart-actions",
            button {
                r#type: "button",
                class: "chart-action",
                aria_label: "Share {title} chart",
                onclick: move |_| show_share.set(true),
                "🚀"
            }
            button {
                r#type: "button",
                class: "chart-action",
                aria_label: "Export {title} chart",
                onclick: move |_| show_export.set(true),
                "📤"
            }
        }
    }
}
