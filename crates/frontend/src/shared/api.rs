//! API client for the research preprocessing stage

use contracts::shared::ResearchFindingsResponse;
use gloo_net::http::Request;

const BASE_URL: &str = "/api/research-findings";

/// Fetch the research findings gathered for the current query
pub async fn fetch_research_findings() -> Result<ResearchFindingsResponse, String> {
    Request::get(BASE_URL)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}
