pub mod google;

pub use google::GooglePlacesClient;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Places-level failures are fatal for a whole batch, unlike per-site scrape
/// failures which the crawler contains.
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("Places API error ({status}): {message}")]
    Api { status: String, message: String },
    #[error("Places request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// One text-search hit, expandable via a details call.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
}

#[async_trait]
pub trait PlacesClient: Send + Sync {
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceSummary>, PlacesError>;

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, PlacesError>;
}
