use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::charts::{ActivityChart, AnimatedChart, ChartKind, SentimentTrendChart, SeriesPoint};
use crate::components::{SearchForm, StatsPanel, TweetCard};
use crate::core::a11y::{Announcer, LiveRegions, Priority};
use crate::core::model::{Sentiment, Tweet};
use crate::core::platform;
use crate::core::stats::SentimentStats;
use crate::dashboard::{DashboardEngine, DataSource, Phase, RunTicket, EMPTY_QUERY_MESSAGE};

/// How many tweets the results feed shows.
const FEED_PREVIEW: usize = 3;

/// Fixed demo series behind the engagement line chart.
const ENGAGEMENT_DEMO: [f64; 12] = [
    45.0, 52.0, 48.0, 61.0, 55.0, 67.0, 59.0, 72.0, 68.0, 75.0, 71.0, 78.0,
];

const WEEKLY_FACTORS: [(&str, f64); 7] = [
    ("Mon", 1.0),
    ("Tue", 1.2),
    ("Wed", 0.8),
    ("Thu", 1.5),
    ("Fri", 1.1),
    ("Sat", 0.9),
    ("Sun", 1.3),
];

#[derive(Debug, Clone)]
enum AnalyzeEvent {
    Submit { query: String, count: String },
    Loaded { run_id: u64, tweets: Vec<Tweet> },
    Failed { run_id: u64, message: String },
    DismissError,
}

/// The analysis dashboard: search form on the left, results window on the
/// right. All state transitions flow through the engine inside one
/// coroutine; fetches resolve through the event queue so a superseded run
/// can never clobber a newer one.
#[component]
pub fn Analyze() -> Element {
    let engine = use_signal(DashboardEngine::default);
    let query = use_signal(String::new);
    let count = use_signal(|| "10".to_string());
    let source = try_use_context::<DataSource>().unwrap_or_default();
    let announcer = Announcer::use_announcer();

    let sender_slot: Rc<RefCell<Option<UnboundedSender<AnalyzeEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<AnalyzeEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let source = source.clone();
        let mut engine_signal = engine;
        let mut announcer = announcer;

        async move {
            while let Some(event) = rx.next().await {
                match event {
                    AnalyzeEvent::Submit { query, count } => {
                        let ticket = engine_signal.with_mut(|eng| eng.begin(&query, &count));
                        match ticket {
                            Some(ticket) => {
                                announcer.announce("Starting tweet analysis", Priority::Polite);
                                queue_fetch(sender_slot.clone(), source.clone(), ticket);
                            }
                            None => {
                                announcer.announce(
                                    format!("Error: {EMPTY_QUERY_MESSAGE}"),
                                    Priority::Assertive,
                                );
                            }
                        }
                    }
                    AnalyzeEvent::Loaded { run_id, tweets } => {
                        if engine_signal.with_mut(|eng| eng.complete(run_id, tweets)) {
                            let stats = engine_signal
                                .with(|eng| SentimentStats::from_tweets(&eng.tweets));
                            announcer.announce(
                                format!(
                                    "Analysis complete! Found {} tweets. {} positive, {} negative, {} neutral.",
                                    stats.total, stats.positive, stats.negative, stats.neutral
                                ),
                                Priority::Polite,
                            );
                        }
                    }
                    AnalyzeEvent::Failed { run_id, message } => {
                        if engine_signal.with_mut(|eng| eng.fail(run_id, message.clone())) {
                            announcer.announce(format!("Error: {message}"), Priority::Assertive);
                        }
                    }
                    AnalyzeEvent::DismissError => {
                        engine_signal.with_mut(|eng| eng.dismiss_error());
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    let submit_handler = {
        let coroutine = coroutine.clone();
        move |_| {
            coroutine.send(AnalyzeEvent::Submit {
                query: query(),
                count: count(),
            });
        }
    };
    let dismiss_handler = {
        let coroutine = coroutine.clone();
        move |_| coroutine.send(AnalyzeEvent::DismissError)
    };

    let state = engine();
    // Derived synchronously from the freshly installed list, so charts never
    // observe a partially updated run.
    let stats = SentimentStats::from_tweets(&state.tweets);

    let validation_error = if state.phase == Phase::ErrorShown {
        None
    } else {
        state.error.clone()
    };
    let fetch_error = (state.phase == Phase::ErrorShown)
        .then(|| state.error.clone())
        .flatten();

    let weekly_series: Vec<SeriesPoint> = WEEKLY_FACTORS
        .iter()
        .map(|(label, factor)| {
            SeriesPoint::new(*label, (stats.positive as f64 * factor).floor())
        })
        .collect();
    let donut_series = vec![
        SeriesPoint::colored("Positive", stats.positive as f64, Sentiment::Positive.color()),
        SeriesPoint::colored("Negative", stats.negative as f64, Sentiment::Negative.color()),
        SeriesPoint::colored("Neutral", stats.neutral as f64, Sentiment::Neutral.color()),
    ];
    let engagement_series: Vec<SeriesPoint> = ENGAGEMENT_DEMO
        .iter()
        .enumerate()
        .map(|(idx, value)| SeriesPoint::new(format!("{}", idx + 1), *value))
        .collect();

    rsx! {
        section { class: "page page-analyze",
            div { class: "analyze-hero",
                span { class: "analyze-hero__badge", "⚡ Powered by Advanced AI" }
                h1 { class: "analyze-hero__title",
                    span { "Analyze Better." }
                    span { class: "analyze-hero__accent", "Track. Understand." }
                }
                p { class: "analyze-hero__description",
                    "Track Twitter sentiment for any search term and turn public opinion into data-driven decisions."
                }

                SearchForm {
                    query,
                    count,
                    loading: state.is_loading(),
                    error: validation_error,
                    on_submit: submit_handler,
                }
            }

            div { class: "dashboard-window",
                header { class: "dashboard-window__header",
                    span { class: "dashboard-window__title", "📊 SentimentX Analytics Dashboard" }
                    span { class: "dashboard-window__progress",
                        "{state.tweets.len()}/{state.requested_count} analyzed"
                    }
                }

                if let Some(message) = fetch_error {
                    div { class: "error-banner error-banner--dismissible", role: "alert",
                        span { "⚠️ {message}" }
                        button {
                            r#type: "button",
                            class: "error-banner__dismiss",
                            aria_label: "Dismiss error",
                            onclick: dismiss_handler,
                            "✕"
                        }
                    }
                }

                if !state.analysis_started {
                    div { class: "dashboard-placeholder", role: "status",
                        span { class: "dashboard-placeholder__icon", aria_hidden: "true", "📈" }
                        h3 { "Ready to Analyze" }
                        p { "Enter a search term to start analyzing Twitter sentiment." }
                    }
                } else {
                    StatsPanel { stats }

                    if !state.tweets.is_empty() {
                        section { class: "charts-section", aria_label: "Data visualization",
                            h3 { class: "section-title", "📊 Data Visualization" }

                            div { class: "chart-row",
                                AnimatedChart {
                                    series: weekly_series,
                                    kind: ChartKind::Bar,
                                    title: "Weekly Positive Sentiment".to_string(),
                                    color: Sentiment::Positive.color().to_string(),
                                    stats,
                                }
                                AnimatedChart {
                                    series: donut_series,
                                    kind: ChartKind::Donut,
                                    title: "Sentiment Distribution".to_string(),
                                    stats,
                                }
                            }

                            div { class: "chart-row",
                                AnimatedChart {
                                    series: engagement_series,
                                    kind: ChartKind::Line,
                                    title: "Engagement Trend".to_string(),
                                    stats,
                                }
                                ActivityChart { stats }
                            }

                            div { class: "chart-row chart-row--full",
                                SentimentTrendChart { tweets: state.tweets.clone(), stats }
                            }
                        }

                        section { class: "tweets-section", aria_label: "Recent analyzed tweets",
                            h3 { class: "section-title", "🐦 Recent Tweets" }
                            div { class: "tweets-feed", role: "feed",
                                for (index, tweet) in state.tweets.iter().take(FEED_PREVIEW).enumerate() {
                                    TweetCard { key: "{tweet.id}", tweet: tweet.clone(), index }
                                }
                            }
                        }
                    }
                }
            }

            LiveRegions {}
        }
    }
}

fn queue_fetch(
    sender_slot: Rc<RefCell<Option<UnboundedSender<AnalyzeEvent>>>>,
    source: DataSource,
    ticket: RunTicket,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            match source.fetch(&ticket.query, ticket.count).await {
                Ok(tweets) => {
                    let _ = sender.unbounded_send(AnalyzeEvent::Loaded {
                        run_id: ticket.run_id,
                        tweets,
                    });
                }
                Err(message) => {
                    let _ = sender.unbounded_send(AnalyzeEvent::Failed {
                        run_id: ticket.run_id,
                        message,
                    });
                }
            }
        });
    }
}
