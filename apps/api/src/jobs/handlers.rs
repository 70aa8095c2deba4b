//! Axum route handlers for the job search API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::jobs::listings::JobListing;
use crate::state::AppState;

fn default_location() -> String {
    "India".to_string()
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default = "default_location")]
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoteSearchParams {
    #[serde(default)]
    pub search: String,
}

/// GET /api/v1/jobs/search?query=...&location=...
///
/// Location-based recommendations from Adzuna, already unified.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    let listings = state.jobs.search(&params.query, &params.location).await?;
    Ok(Json(listings))
}

/// GET /api/v1/jobs/remote?search=...
///
/// Remote-only listings from Remotive, already unified.
pub async fn handle_search_remote(
    State(state): State<AppState>,
    Query(params): Query<RemoteSearchParams>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    let listings = state.jobs.search_remote(&params.search).await?;
    Ok(Json(listings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_location_default() {
        let params: SearchParams = serde_json::from_str(r#"{"query": "rust"}"#).unwrap();
        assert_eq!(params.query, "rust");
        assert_eq!(params.location, "India");
    }

    #[test]
    fn test_remote_search_defaults_to_empty() {
        let params: RemoteSearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.search, "");
    }
}
