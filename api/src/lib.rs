//! HTTP client for the SentimentX analyze endpoint.
//!
//! The endpoint contract mirrors the hosted analysis service: a POST to
//! `/analyze/` with `{query, count}` returning an array of sentiment-labelled
//! tweet records. Counts outside the accepted window are clamped before the
//! request is sent, and non-2xx responses surface the body's `detail` field
//! (falling back to a generic message when the body carries none).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Smallest tweet count the endpoint accepts.
pub const MIN_COUNT: u32 = 1;
/// Largest tweet count the endpoint accepts.
pub const MAX_COUNT: u32 = 100;

/// Message shown when the endpoint fails without a usable `detail` body.
pub const GENERIC_FETCH_MESSAGE: &str = "Failed to analyze tweets. Please try again.";

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub query: String,
    pub count: u32,
}

/// One record from the analyze response.
///
/// Only `text` and `sentiment` are guaranteed; richer deployments may also
/// return identity and engagement fields, which callers merge into their own
/// tweet model (minting ids where absent).
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzedTweet {
    pub text: String,
    pub sentiment: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub likes: Option<u32>,
    #[serde(default, alias = "retweets")]
    pub reposts: Option<u32>,
    #[serde(default)]
    pub replies: Option<u32>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

#[derive(Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection refused…).
    Transport(String),
    /// The endpoint answered with a non-2xx status.
    Endpoint { status: u16, detail: String },
    /// The 2xx body could not be decoded as a tweet array.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(err) => write!(f, "analyze request failed: {err}"),
            FetchError::Endpoint { detail, .. } => f.write_str(detail),
            FetchError::Decode(err) => write!(f, "analyze response was malformed: {err}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Clamp a requested tweet count into the endpoint's accepted window.
pub fn clamp_count(raw: i64) -> u32 {
    raw.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as u32
}

/// Pull the user-facing message out of an error body.
///
/// The endpoint reports failures as `{"detail": "..."}`; anything else maps
/// to the generic fallback.
pub fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_FETCH_MESSAGE.to_string())
}

#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    base_url: String,
    http: reqwest::Client,
}

impl AnalyzeClient {
    pub fn new<T: Into<String>>(base_url: T) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the analyze request and decode the tweet array.
    pub async fn analyze(&self, query: &str, count: u32) -> Result<Vec<AnalyzedTweet>, FetchError> {
        let request = AnalyzeRequest {
            query: query.to_string(),
            count: clamp_count(count as i64),
        };

        let url = format!("{}/analyze/", self.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Endpoint {
                status: status.as_u16(),
                detail: extract_detail(&body),
            });
        }

        response
            .json::<Vec<AnalyzedTweet>>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_clamped_into_endpoint_window() {
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_count(-5), 1);
        assert_eq!(clamp_count(10), 10);
        assert_eq!(clamp_count(100), 100);
        assert_eq!(clamp_count(2_500), 100);
    }

    #[test]
    fn detail_field_is_surfaced() {
        let body = r#"{"detail": "Error fetching tweets: rate limited"}"#;
        assert_eq!(extract_detail(body), "Error fetching tweets: rate limited");
    }

    #[test]
    fn missing_detail_falls_back_to_generic_message() {
        assert_eq!(extract_detail("{}"), GENERIC_FETCH_MESSAGE);
        assert_eq!(extract_detail("not json"), GENERIC_FETCH_MESSAGE);
        assert_eq!(extract_detail(r#"{"detail": 42}"#), GENERIC_FETCH_MESSAGE);
    }

    #[test]
    fn analyzed_tweet_accepts_minimal_and_rich_records() {
        let minimal: AnalyzedTweet =
            serde_json::from_str(r#"{"text": "hello", "sentiment": "neutral"}"#)
                .expect("minimal record");
        assert_eq!(minimal.text, "hello");
        assert!(minimal.id.is_none());

        let rich: AnalyzedTweet = serde_json::from_str(
            r#"{"text": "hi", "sentiment": "positive", "id": "42", "user": "dev", "likes": 3, "retweets": 1, "replies": 0, "verified": true}"#,
        )
        .expect("rich record");
        assert_eq!(rich.id.as_deref(), Some("42"));
        assert_eq!(rich.reposts, Some(1));
        assert_eq!(rich.verified, Some(true));
    }
}
