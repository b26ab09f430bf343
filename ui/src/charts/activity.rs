use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use rand::Rng;

use crate::components::{ExportPanel, SharePanel};
use crate::core::stats::SentimentStats;
use crate::core::timing;

use super::animated::ChartActions;
use super::{snapshot, ChartHandle};

const TITLE: &str = "Real-time Activity";
const JITTER_INTERVAL_MS: u64 = 3000;

/// One slot of the rolling activity feed: tweet volume plus a normalised
/// 0–1 sentiment score.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPoint {
    pub label: String,
    pub volume: f64,
    pub score: f64,
}

fn seed_points() -> Vec<ActivityPoint> {
    [
        ("00:00", 45.0, 0.6),
        ("04:00", 23.0, 0.4),
        ("08:00", 89.0, 0.8),
        ("12:00", 156.0, 0.7),
        ("16:00", 134.0, 0.5),
        ("20:00", 98.0, 0.9),
    ]
    .into_iter()
    .map(|(label, volume, score)| ActivityPoint {
        label: label.to_string(),
        volume,
        score,
    })
    .collect()
}

/// Nudge one random slot, keeping volume ≥ 10 and score within 0.1–1.0.
fn jitter(points: &mut [ActivityPoint], rng: &mut impl Rng) {
    if points.is_empty() {
        return;
    }
    let idx = rng.gen_range(0..points.len());
    let point = &mut points[idx];
    point.volume = (point.volume + rng.gen_range(-10.0..10.0)).max(10.0);
    point.score = (point.score + rng.gen_range(-0.1..0.1)).clamp(0.1, 1.0);
}

/// Dual-axis feed chart: tweet volume and sentiment score over the day,
/// nudged every few seconds by a background coroutine.
#[component]
pub fn ActivityChart(stats: SentimentStats) -> Element {
    let feed = use_signal(seed_points);
    let mut show_export = use_signal(|| false);
    let mut show_share = use_signal(|| false);

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut feed = feed;
        async move {
            loop {
                timing::sleep_ms(JITTER_INTERVAL_MS).await;
                feed.with_mut(|points| jitter(points, &mut rand::thread_rng()));
            }
        }
    });

    let points = feed();
    let markup = snapshot::activity_svg(&points);
    let handle = ChartHandle::new(TITLE, markup.clone());

    rsx! {
        div { class: "chart-container chart-container--wide",
            div { class: "chart-header",
                h3 { class: "chart-title", "📊 {TITLE}" }
                ChartActions { title: TITLE.to_string(), show_export, show_share }
            }
            div { class: "chart-indicators",
                div { class: "indicator",
                    span { class: "indicator-dot indicator-dot--volume" }
                    span { "Tweet Volume" }
                }
                div { class: "indicator",
                    span { class: "indicator-dot indicator-dot--score" }
                    span { "Sentiment Score" }
                }
            }

            match markup {
                Some(svg) => rsx! {
                    div { class: "chart-canvas chart-canvas--revealed", dangerous_inner_html: "{svg}" }
                },
                None => rsx! {
                    p { class: "chart-placeholder", "Activity feed warming up." }
                },
            }

            if show_export() {
                ExportPanel { handle: handle.clone(), on_close: move |_| show_export.set(false) }
            }
            if show_share() {
                SharePanel { handle, stats, on_close: move |_| show_share.set(false) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn jitter_respects_floor_and_score_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut points = seed_points();

        for _ in 0..500 {
            jitter(&mut points, &mut rng);
        }

        for point in &points {
            assert!(point.volume >= 10.0, "volume fell to {}", point.volume);
            assert!(
                (0.1..=1.0).contains(&point.score),
                "score escaped to {}",
                point.score
            );
        }
    }

    #[test]
    fn jitter_tolerates_an_empty_feed() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut points: Vec<ActivityPoint> = Vec::new();
        jitter(&mut points, &mut rng);
        assert!(points.is_empty());
    }
}
