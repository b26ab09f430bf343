use dioxus::prelude::*;

use crate::core::format;
use crate::core::model::{Sentiment, Tweet};

#[component]
pub fn SentimentBadge(sentiment: Sentiment) -> Element {
    let tone = sentiment.as_str();
    let icon = sentiment.icon();
    let label = sentiment.aria_label();

    rsx! {
        span {
            class: "sentiment-badge sentiment-badge--{tone}",
            role: "img",
            aria_label: "{label}",
            span { class: "sentiment-badge__icon", aria_hidden: "true", "{icon}" }
            span { class: "sentiment-badge__text", "{tone}" }
        }
    }
}

#[component]
pub fn TweetCard(tweet: Tweet, index: usize) -> Element {
    let initial = tweet.avatar_initial();
    let display_name = tweet.display_name();
    let date = tweet.date_label().to_string();
    let likes = format::format_count(tweet.likes);
    let reposts = format::format_count(tweet.reposts);
    let replies = format::format_count(tweet.replies);
    let delay = index as f64 * 0.1;

    rsx! {
        article {
            class: "tweet-card",
            style: "animation-delay: {delay}s",
            header { class: "tweet-card__header",
                div { class: "tweet-card__user",
                    div { class: "tweet-card__avatar-wrap",
                        div { class: "tweet-card__avatar", aria_hidden: "true", "{initial}" }
                        if tweet.verified {
                            span { class: "tweet-card__verified", aria_label: "Verified account", "✓" }
                        }
                    }
                    div { class: "tweet-card__user-info",
                        span { class: "tweet-card__handle", "@{tweet.user}" }
                        span { class: "tweet-card__name", "{display_name}" }
                    }
                }
                time { class: "tweet-card__time", datetime: "{tweet.timestamp}", "{date}" }
            }

            p { class: "tweet-card__text", "{tweet.text}" }

            footer { class: "tweet-card__footer",
                SentimentBadge { sentiment: tweet.sentiment }
                div { class: "tweet-card__stats",
                    span { class: "tweet-card__stat", aria_label: "{likes} likes",
                        span { aria_hidden: "true", "💖" }
                        "{likes}"
                    }
                    span { class: "tweet-card__stat", aria_label: "{reposts} reposts",
                        span { aria_hidden: "true", "🔄" }
                        "{reposts}"
                    }
                    span { class: "tweet-card__stat", aria_label: "{replies} replies",
                        span { aria_hidden: "true", "💬" }
                        "{replies}"
                    }
                }
            }
        }
    }
}
