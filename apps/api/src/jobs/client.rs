//! Outbound calls to the job-search providers.
//!
//! Each provider wraps its listings in a different envelope (`results` for
//! Adzuna, `jobs` for Remotive); this client unwraps the envelope and hands
//! the raw records to the unifier. Timeouts and error surfacing live here;
//! the unifier itself never does I/O.

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::jobs::listings::{unify, JobListing, JobProvider};

const ADZUNA_API_URL: &str = "https://api.adzuna.com/v1/api/jobs/in/search/1";
const REMOTIVE_API_URL: &str = "https://remotive.com/api/remote-jobs";

#[derive(Debug, Error)]
pub enum JobsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("provider response missing `{field}` array")]
    MissingListings { field: &'static str },
}

/// Client for both job-search providers.
#[derive(Clone)]
pub struct JobsClient {
    client: Client,
    adzuna_app_id: String,
    adzuna_app_key: String,
}

impl JobsClient {
    pub fn new(adzuna_app_id: String, adzuna_app_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            adzuna_app_id,
            adzuna_app_key,
        }
    }

    /// Searches Adzuna listings for a query/location pair.
    pub async fn search(&self, query: &str, location: &str) -> Result<Vec<JobListing>, JobsError> {
        let response = self
            .client
            .get(ADZUNA_API_URL)
            .query(&[
                ("app_id", self.adzuna_app_id.as_str()),
                ("app_key", self.adzuna_app_key.as_str()),
                ("q", query),
                ("location0", location),
            ])
            .send()
            .await?;

        let raw = listing_array(response, "results").await?;
        Ok(unify(JobProvider::Adzuna, &raw))
    }

    /// Searches Remotive's remote-job catalogue.
    pub async fn search_remote(&self, search: &str) -> Result<Vec<JobListing>, JobsError> {
        let response = self
            .client
            .get(REMOTIVE_API_URL)
            .query(&[("search", search)])
            .send()
            .await?;

        let raw = listing_array(response, "jobs").await?;
        Ok(unify(JobProvider::Remotive, &raw))
    }
}

/// Pulls the provider's listing array out of its response envelope.
async fn listing_array(
    response: reqwest::Response,
    field: &'static str,
) -> Result<Vec<Value>, JobsError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        warn!("Job provider returned {status}: {message}");
        return Err(JobsError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let mut body: Value = response.json().await?;
    match body.get_mut(field).map(Value::take) {
        Some(Value::Array(listings)) => Ok(listings),
        _ => Err(JobsError::MissingListings { field }),
    }
}
