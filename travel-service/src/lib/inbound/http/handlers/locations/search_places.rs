use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::location::errors::LocationError;
use crate::domain::location::models::SearchQuery;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PlaceData;
use crate::inbound::http::router::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct SearchPlacesParams {
    #[serde(default)]
    query: String,
}

pub async fn search_places(
    State(state): State<AppState>,
    Query(params): Query<SearchPlacesParams>,
) -> Result<ApiSuccess<Vec<PlaceData>>, ApiError> {
    let query = SearchQuery::new(&params.query).map_err(LocationError::from)?;

    state
        .location_service
        .search_places(query)
        .await
        .map_err(ApiError::from)
        .map(|places| ApiSuccess::new(StatusCode::OK, places.iter().map(Into::into).collect()))
}
