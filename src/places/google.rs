use crate::places::{PlaceDetails, PlaceSummary, PlacesClient, PlacesError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

const DETAILS_FIELDS: &str = "name,formatted_address,formatted_phone_number,website";

/// Google Places Web Service client (text search + details).
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<PlaceSummary>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: PlaceDetails,
}

impl GooglePlacesClient {
    pub fn new(api_key: impl Into<String>, timeout_seconds: u64) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, timeout_seconds)
    }

    /// Base URL override exists for tests against a local server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout_seconds: u64,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// ZERO_RESULTS is an empty answer, not a failure. Everything else
    /// non-OK carries the provider's message verbatim.
    fn check_status(status: &str, error_message: Option<String>) -> Result<(), PlacesError> {
        match status {
            "OK" | "ZERO_RESULTS" => Ok(()),
            _ => Err(PlacesError::Api {
                status: status.to_string(),
                message: error_message.unwrap_or_else(|| "no details provided".to_string()),
            }),
        }
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceSummary>, PlacesError> {
        let url = format!("{}/textsearch/json", self.base_url);
        let response: SearchResponse = self
            .client
            .get(&url)
            .query(&[("query", query), ("key", self.api_key.as_str())])
            .send()
            .await?
            .json()
            .await?;

        Self::check_status(&response.status, response.error_message)?;
        debug!(
            "Text search for {:?} returned {} places",
            query,
            response.results.len()
        );
        Ok(response.results)
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError> {
        let url = format!("{}/details/json", self.base_url);
        let response: DetailsResponse = self
            .client
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("fields", DETAILS_FIELDS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        Self::check_status(&response.status, response.error_message)?;
        Ok(response.result)
    }
}
