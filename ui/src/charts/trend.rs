use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::components::{ExportPanel, SharePanel};
use crate::core::model::{Sentiment, Tweet};
use crate::core::stats::SentimentStats;

use super::animated::ChartActions;
use super::{snapshot, ChartHandle};

const TITLE: &str = "Sentiment Trends";

/// One hourly bucket of the trend chart, percentages of that hour's total.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendRow {
    pub hour_label: String,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub total: usize,
}

/// Bucket tweets by hour of day and derive per-hour sentiment percentages.
/// Tweets without a parseable timestamp are skipped; hours come out sorted.
pub fn hourly_rows(tweets: &[Tweet]) -> Vec<TrendRow> {
    let mut buckets: BTreeMap<u8, (usize, usize, usize)> = BTreeMap::new();

    for tweet in tweets {
        let Some(hour) = tweet.hour() else {
            continue;
        };
        let bucket = buckets.entry(hour).or_default();
        match tweet.sentiment {
            Sentiment::Positive => bucket.0 += 1,
            Sentiment::Negative => bucket.1 += 1,
            Sentiment::Neutral => bucket.2 += 1,
        }
    }

    buckets
        .into_iter()
        .map(|(hour, (positive, negative, neutral))| {
            let total = positive + negative + neutral;
            let pct = |count: usize| {
                if total == 0 {
                    0.0
                } else {
                    100.0 * count as f64 / total as f64
                }
            };
            TrendRow {
                hour_label: format!("{hour}:00"),
                positive: pct(positive),
                negative: pct(negative),
                neutral: pct(neutral),
                total,
            }
        })
        .collect()
}

/// Stacked hourly sentiment mix for the current tweet list.
#[component]
pub fn SentimentTrendChart(tweets: Vec<Tweet>, stats: SentimentStats) -> Element {
    let mut show_export = use_signal(|| false);
    let mut show_share = use_signal(|| false);

    let rows = hourly_rows(&tweets);
    let markup = snapshot::trend_svg(&rows);
    let handle = ChartHandle::new(TITLE, markup.clone());

    rsx! {
        div { class: "chart-container chart-container--wide",
            div { class: "chart-header",
                h3 { class: "chart-title", "📈 {TITLE}" }
                ChartActions { title: TITLE.to_string(), show_export, show_share }
            }

            match markup {
                Some(svg) => rsx! {
                    div { class: "chart-canvas chart-canvas--revealed", dangerous_inner_html: "{svg}" }
                },
                None => rsx! {
                    p { class: "chart-placeholder", "Trends appear once analyzed tweets carry timestamps." }
                },
            }

            div { class: "trend-legend",
                for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
                    div { class: "legend-item", key: "{sentiment.as_str()}",
                        span {
                            class: "legend-color",
                            style: format!("background-color: {}", sentiment.color()),
                        }
                        span { class: "legend-label", "{sentiment.as_str()}" }
                    }
                }
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
    use crate::core::samples::sample_tweets;

    #[test]
    fn sample_tweets_bucket_into_sorted_hours() {
        let rows = hourly_rows(&sample_tweets());
        let labels: Vec<&str> = rows.iter().map(|r| r.hour_label.as_str()).collect();
        assert_eq!(labels, vec!["10:00", "11:00", "12:00", "13:00", "14:00"]);
        assert!(rows.iter().all(|r| r.total == 1));
    }

    #[test]
    fn bucket_percentages_sum_to_one_hundred() {
        let rows = hourly_rows(&sample_tweets());
        for row in rows {
            let sum = row.positive + row.negative + row.neutral;
            assert!((sum - 100.0).abs() < 1e-9, "hour {} summed {sum}", row.hour_label);
        }
    }

    #[test]
    fn unparseable_timestamps_are_skipped() {
        let mut tweets = sample_tweets();
        tweets[0].timestamp = "not a timestamp".into();
        let rows = hourly_rows(&tweets);
        assert_eq!(rows.len(), 4);
    }
}
