//! Dashboard shell: the submission state machine and the data source the
//! launchers inject.

mod engine;

pub use engine::{
    clamp_count, DashboardEngine, Phase, RunTicket, ANALYSIS_DELAY_MS, EMPTY_QUERY_MESSAGE,
};

use crate::core::model::Tweet;
use crate::core::{samples, timing};

/// Where an analysis run gets its tweets. Launchers install one via context;
/// the default simulates a backend with the canned sample set.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Canned sample tweets after a fixed delay.
    Samples { delay_ms: u64 },
    /// A real analyze endpoint.
    Backend { base_url: String },
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Samples {
            delay_ms: ANALYSIS_DELAY_MS,
        }
    }
}

impl DataSource {
    /// Resolve one analysis run. Errors are already user-facing messages.
    pub async fn fetch(&self, query: &str, count: u32) -> Result<Vec<Tweet>, String> {
        match self {
            DataSource::Samples { delay_ms } => {
                timing::sleep_ms(*delay_ms).await;
                Ok(samples::sample_tweets())
            }
            DataSource::Backend { base_url } => {
                let client = api::AnalyzeClient::new(base_url.clone());
                let records = client
                    .analyze(query, count)
                    .await
                    .map_err(|err| err.to_string())?;
                Ok(records.into_iter().map(Tweet::from_analyzed).collect())
            }
        }
    }
}
