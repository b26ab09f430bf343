//! Submission state machine for the dashboard shell.
//!
//! Pure and synchronous — the view's coroutine owns the clock and the data
//! source, the engine owns the transitions. Each accepted submission gets a
//! monotonically increasing run id; completions carrying a stale id are
//! discarded, so the latest submission always wins and overlapping timers
//! can never corrupt state.

use crate::core::model::Tweet;

/// Fixed simulated network delay for sample-backed runs.
pub const ANALYSIS_DELAY_MS: u64 = 3000;

/// Inline validation message for an empty query.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search term";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    ShowingResults,
    ErrorShown,
}

/// Accepted submission: what the coroutine needs to run the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTicket {
    pub run_id: u64,
    pub query: String,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardEngine {
    pub phase: Phase,
    pub tweets: Vec<Tweet>,
    pub error: Option<String>,
    /// Set once the first submission is accepted; gates the placeholder.
    pub analysis_started: bool,
    pub requested_count: u32,
    run_id: u64,
}

impl DashboardEngine {
    /// Validate and accept a submission.
    ///
    /// An empty/whitespace query surfaces the validation message and leaves
    /// everything else — phase, previous results — untouched.
    pub fn begin(&mut self, query: &str, count_raw: &str) -> Option<RunTicket> {
        let query = query.trim();
        if query.is_empty() {
            self.error = Some(EMPTY_QUERY_MESSAGE.to_string());
            return None;
        }

        self.run_id += 1;
        self.phase = Phase::Submitting;
        self.error = None;
        self.analysis_started = true;
        self.requested_count = clamp_count(count_raw);

        Some(RunTicket {
            run_id: self.run_id,
            query: query.to_string(),
            count: self.requested_count,
        })
    }

    /// Install a completed run's tweet list. Stale run ids are ignored so a
    /// superseded submission can never overwrite a newer one.
    pub fn complete(&mut self, run_id: u64, tweets: Vec<Tweet>) -> bool {
        if run_id != self.run_id {
            return false;
        }
        self.tweets = tweets;
        self.phase = Phase::ShowingResults;
        self.error = None;
        true
    }

    /// Record a failed run. Previous results stay visible behind the banner.
    pub fn fail(&mut self, run_id: u64, message: String) -> bool {
        if run_id != self.run_id {
            return false;
        }
        self.phase = Phase::ErrorShown;
        self.error = Some(message);
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        if self.phase == Phase::ErrorShown {
            self.phase = if self.tweets.is_empty() {
                Phase::Idle
            } else {
                Phase::ShowingResults
            };
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }
}

/// Tweet-count field parsing: non-numeric input defaults to 10, numeric
/// input is clamped to the 1–100 window.
pub fn clamp_count(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .map(|n| n.clamp(1, 100) as u32)
        .unwrap_or(10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::samples::sample_tweets;

    #[test]
    fn count_parsing_clamps_and_defaults() {
        assert_eq!(clamp_count("10"), 10);
        assert_eq!(clamp_count(" 25 "), 25);
        assert_eq!(clamp_count("0"), 1);
        assert_eq!(clamp_count("-3"), 1);
        assert_eq!(clamp_count("250"), 100);
        assert_eq!(clamp_count("ten"), 10);
        assert_eq!(clamp_count(""), 10);
    }

    #[test]
    fn empty_query_surfaces_validation_without_transition() {
        let mut engine = DashboardEngine::default();
        let ticket = engine.begin("ai", "10").expect("valid submission");
        assert!(engine.complete(ticket.run_id, sample_tweets()));
        assert_eq!(engine.phase, Phase::ShowingResults);

        // Whitespace query: message shown, results and phase untouched.
        assert!(engine.begin("   ", "10").is_none());
        assert_eq!(engine.error.as_deref(), Some(EMPTY_QUERY_MESSAGE));
        assert_eq!(engine.phase, Phase::ShowingResults);
        assert_eq!(engine.tweets.len(), 5);
    }

    #[test]
    fn valid_submission_enters_loading_and_clears_prior_error() {
        let mut engine = DashboardEngine::default();
        engine.error = Some("old banner".into());

        let ticket = engine.begin("rustlang", "150").expect("valid submission");
        assert_eq!(engine.phase, Phase::Submitting);
        assert!(engine.is_loading());
        assert!(engine.error.is_none());
        assert!(engine.analysis_started);
        assert_eq!(ticket.count, 100);
        assert_eq!(ticket.query, "rustlang");
    }

    #[test]
    fn latest_submission_wins_over_stale_completions() {
        let mut engine = DashboardEngine::default();
        let first = engine.begin("ai", "10").expect("first");
        let second = engine.begin("rust", "10").expect("second");

        // The first run resolves late: discarded.
        assert!(!engine.complete(first.run_id, sample_tweets()));
        assert_eq!(engine.phase, Phase::Submitting);
        assert!(engine.tweets.is_empty());

        assert!(engine.complete(second.run_id, sample_tweets()));
        assert_eq!(engine.phase, Phase::ShowingResults);
        assert_eq!(engine.tweets.len(), 5);
    }

    #[test]
    fn stale_failures_are_also_discarded() {
        let mut engine = DashboardEngine::default();
        let first = engine.begin("ai", "10").expect("first");
        let second = engine.begin("rust", "10").expect("second");

        assert!(!engine.fail(first.run_id, "boom".into()));
        assert!(engine.error.is_none());

        assert!(engine.fail(second.run_id, "boom".into()));
        assert_eq!(engine.phase, Phase::ErrorShown);
        assert_eq!(engine.error.as_deref(), Some("boom"));
    }

    #[test]
    fn failure_keeps_previous_results_usable() {
        let mut engine = DashboardEngine::default();
        let first = engine.begin("ai", "10").expect("first");
        engine.complete(first.run_id, sample_tweets());

        let second = engine.begin("rust", "10").expect("second");
        engine.fail(second.run_id, "backend down".into());
        assert_eq!(engine.tweets.len(), 5, "old results survive a failure");

        engine.dismiss_error();
        assert_eq!(engine.phase, Phase::ShowingResults);
        assert!(engine.error.is_none());
    }

    #[test]
    fn dismissing_with_no_results_returns_to_idle() {
        let mut engine = DashboardEngine::default();
        let ticket = engine.begin("ai", "10").expect("submission");
        engine.fail(ticket.run_id, "backend down".into());
        engine.dismiss_error();
        assert_eq!(engine.phase, Phase::Idle);
    }
}
