//! Canonical tweet record shared by the sample store, the analyze-client
//! mapping, and the dashboard views.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Badge accent used by both the on-screen badges and chart segments.
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#10B981",
            Sentiment::Negative => "#EF4444",
            Sentiment::Neutral => "#6B7280",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Sentiment::Positive => "✨",
            Sentiment::Negative => "⚠️",
            Sentiment::Neutral => "⚖️",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive sentiment",
            Sentiment::Negative => "Negative sentiment",
            Sentiment::Neutral => "Neutral sentiment",
        }
    }

    /// Unrecognised labels read as neutral, matching the badge fallback.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

/// One analyzed tweet. Immutable once produced; the active list is replaced
/// wholesale per analysis run, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub user: String,
    pub text: String,
    pub sentiment: Sentiment,
    pub likes: u32,
    #[serde(alias = "retweets")]
    pub reposts: u32,
    pub replies: u32,
    /// ISO-8601 creation timestamp.
    #[serde(alias = "date")]
    pub timestamp: String,
    #[serde(default)]
    pub verified: bool,
}

impl Tweet {
    /// Date portion of the ISO timestamp, for the card byline.
    pub fn date_label(&self) -> &str {
        self.timestamp.split('T').next().unwrap_or(&self.timestamp)
    }

    /// Hour-of-day (0-23) parsed from the ISO timestamp, if present.
    pub fn hour(&self) -> Option<u8> {
        let time_segment = self.timestamp.split('T').nth(1)?;
        let hour: u8 = time_segment.get(..2)?.parse().ok()?;
        (hour < 24).then_some(hour)
    }

    /// `frustrated_coder` → `Frustrated Coder`, mirroring the handle byline.
    pub fn display_name(&self) -> String {
        self.user
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn avatar_initial(&self) -> String {
        self.user
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Merge an analyze-endpoint record into the canonical schema, minting an
    /// id when the backend returns none.
    pub fn from_analyzed(raw: api::AnalyzedTweet) -> Self {
        Self {
            id: raw
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            user: raw.user.unwrap_or_else(|| "unknown".to_string()),
            sentiment: Sentiment::parse(&raw.sentiment),
            text: raw.text,
            likes: raw.likes.unwrap_or(0),
            reposts: raw.reposts.unwrap_or(0),
            replies: raw.replies.unwrap_or(0),
            timestamp: raw.timestamp.unwrap_or_default(),
            verified: raw.verified.unwrap_or(false),
        }
    }
}
