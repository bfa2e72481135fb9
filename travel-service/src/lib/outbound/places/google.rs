use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::PlacesConfig;
use crate::domain::location::errors::LocationError;
use crate::domain::location::models::Place;
use crate::domain::location::models::SearchQuery;
use crate::domain::location::ports::PlacesClient;

/// Google Places text search.
pub struct GooglePlacesClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GooglePlacesClient {
    pub fn new(client: Client, config: &PlacesConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            base_url: config.base_url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
}

#[derive(Debug, Deserialize)]
struct PlaceResult {
    place_id: String,
    name: String,
    #[serde(default)]
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl TextSearchResponse {
    fn into_places(self) -> Result<Vec<Place>, LocationError> {
        if self.status != "OK" && self.status != "ZERO_RESULTS" {
            return Err(LocationError::Upstream(format!("status {}", self.status)));
        }

        Ok(self
            .results
            .into_iter()
            .filter_map(|r| {
                Place::new(
                    r.place_id,
                    r.name,
                    r.formatted_address,
                    r.geometry.location.lat,
                    r.geometry.location.lng,
                )
                .inspect_err(|e| tracing::debug!(error = %e, "Skipping unusable place result"))
                .ok()
            })
            .collect())
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, LocationError> {
        let api_key = self.api_key.as_deref().ok_or(LocationError::NotConfigured)?;

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("query", query.as_str()), ("key", api_key)])
            .send()
            .await
            .map_err(|e| LocationError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Upstream(format!("http status {}", status)));
        }

        response
            .json::<TextSearchResponse>()
            .await
            .map_err(|e| LocationError::Upstream(e.to_string()))?
            .into_places()
    }
}
