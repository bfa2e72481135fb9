pub mod activities;
pub mod auth;
pub mod health;
pub mod itineraries;
pub mod locations;
pub mod media;
pub mod preview;
pub mod trips;
pub mod users;

use ::auth::TokenPair;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::activity::errors::ActivityError;
use crate::domain::activity::models::Activity;
use crate::domain::authentication::errors::AuthError;
use crate::domain::itinerary::errors::ItineraryError;
use crate::domain::itinerary::models::Itinerary;
use crate::domain::location::errors::LocationError;
use crate::domain::location::models::Location;
use crate::domain::location::models::Place;
use crate::domain::media::errors::MediaError;
use crate::domain::media::models::Media;
use crate::domain::share::errors::ShareError;
use crate::domain::trip::errors::TripError;
use crate::domain::trip::models::Trip;
use crate::domain::user::errors::UserError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Successful response: the payload serialized as the JSON body.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize> {
    status: StatusCode,
    data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self { status, data }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ApiError {
    /// Log the underlying failure and answer with a generic 500.
    fn internal(detail: impl std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "Request failed");
        ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidEmail(_) | AuthError::InvalidPassword(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::DuplicateEmail(_) => ApiError::Conflict("User already exists".to_string()),
            AuthError::OAuthVerificationFailed(reason) => {
                tracing::warn!(reason = %reason, "OAuth login rejected");
                ApiError::Unauthorized("OAuth authentication failed".to_string())
            }
            AuthError::Token(kind) => {
                tracing::warn!(kind = %kind, "Token rejected");
                ApiError::Unauthorized("Invalid or expired token".to_string())
            }
            AuthError::TokenIssuance(_) | AuthError::Storage(_) | AuthError::Internal(_) => {
                ApiError::internal(err)
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUserId(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidDeviceToken(_) => ApiError::UnprocessableEntity(err.to_string()),
            _ => ApiError::internal(err),
        }
    }
}

impl From<TripError> for ApiError {
    fn from(err: TripError) -> Self {
        match err {
            TripError::NotFound(_) => ApiError::NotFound("Trip not found".to_string()),
            TripError::InvalidTripId(_) => ApiError::BadRequest(err.to_string()),
            TripError::InvalidLocation(_) | TripError::InvalidDates(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            TripError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<ShareError> for ApiError {
    fn from(err: ShareError) -> Self {
        match err {
            ShareError::NotFoundOrExpired => {
                ApiError::NotFound("Share link not found or expired".to_string())
            }
            ShareError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<ItineraryError> for ApiError {
    fn from(err: ItineraryError) -> Self {
        match err {
            ItineraryError::NotFound(_) => ApiError::NotFound("Itinerary not found".to_string()),
            ItineraryError::TripNotFound(_) => ApiError::NotFound("Trip not found".to_string()),
            ItineraryError::InvalidItineraryId(_) => ApiError::BadRequest(err.to_string()),
            ItineraryError::InvalidSlug(_) => ApiError::UnprocessableEntity(err.to_string()),
            ItineraryError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        match err {
            ActivityError::NotFound(_) => ApiError::NotFound("Activity not found".to_string()),
            ActivityError::ItineraryNotFound(_) => {
                ApiError::NotFound("Itinerary not found".to_string())
            }
            ActivityError::InvalidActivityId(_) => ApiError::BadRequest(err.to_string()),
            ActivityError::InvalidName(_)
            | ActivityError::InvalidStatus(_)
            | ActivityError::InvalidTimeRange
            | ActivityError::ItineraryOutsideTrip(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ActivityError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<MediaError> for ApiError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::ActivityNotFound(_) => {
                ApiError::NotFound("Activity not found".to_string())
            }
            MediaError::InvalidFileName(_)
            | MediaError::EmptyFile
            | MediaError::FileTooLarge { .. } => ApiError::UnprocessableEntity(err.to_string()),
            MediaError::StorageFailed(_) | MediaError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<LocationError> for ApiError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::InvalidQuery(_) | LocationError::InvalidPlace(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            LocationError::NotConfigured => {
                ApiError::ServiceUnavailable("Places search is not configured".to_string())
            }
            LocationError::Upstream(detail) => {
                tracing::warn!(error = %detail, "Places provider failed");
                ApiError::BadGateway("Places provider unavailable".to_string())
            }
            LocationError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

impl MessageResponseData {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenPairResponseData {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairResponseData {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TripResponseData {
    pub id: Uuid,
    pub user_id: Uuid,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Trip> for TripResponseData {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id.0,
            user_id: trip.owner_id.0,
            location: trip.location.as_str().to_string(),
            start_date: trip.dates.start(),
            end_date: trip.dates.end(),
            created_at: trip.created_at,
            updated_at: trip.updated_at,
        }
    }
}

/// Trip as shown through a share link: no owner information.
#[derive(Debug, Clone, Serialize)]
pub struct SharedTripResponseData {
    pub id: Uuid,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<&Trip> for SharedTripResponseData {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id.0,
            location: trip.location.as_str().to_string(),
            start_date: trip.dates.start(),
            end_date: trip.dates.end(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItineraryResponseData {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub slug: String,
    pub title: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Itinerary> for ItineraryResponseData {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id.0,
            trip_id: itinerary.trip_id.0,
            slug: itinerary.slug.as_str().to_string(),
            title: itinerary.title.clone(),
            date: itinerary.date,
            created_at: itinerary.created_at,
            updated_at: itinerary.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponseData {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub itinerary_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Activity> for ActivityResponseData {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id.0,
            trip_id: activity.trip_id.0,
            itinerary_id: activity.itinerary_id.map(|id| id.0),
            name: activity.name.as_str().to_string(),
            description: activity.description.clone(),
            location: activity.location.clone(),
            start_time: activity.start_time,
            end_time: activity.end_time,
            kind: activity.kind.clone(),
            status: activity.status.as_str().to_string(),
            created_at: activity.created_at,
            updated_at: activity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaResponseData {
    pub id: Uuid,
    pub activity_id: Uuid,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Media> for MediaResponseData {
    fn from(media: &Media) -> Self {
        Self {
            id: media.id.0,
            activity_id: media.activity_id.0,
            url: media.url.clone(),
            kind: media.kind.as_str().to_string(),
            created_at: media.created_at,
        }
    }
}

/// Place in the provider's wire shape, used both for search results and as
/// the body of a save request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceData {
    pub place_id: String,
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: GeometryData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryData {
    pub location: LatLngData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngData {
    pub lat: f64,
    pub lng: f64,
}

impl From<&Place> for PlaceData {
    fn from(place: &Place) -> Self {
        Self {
            place_id: place.place_id.clone(),
            name: place.name.clone(),
            formatted_address: place.address.clone(),
            geometry: GeometryData {
                location: LatLngData {
                    lat: place.latitude,
                    lng: place.longitude,
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationResponseData {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub google_place_id: Option<String>,
}

impl From<&Location> for LocationResponseData {
    fn from(location: &Location) -> Self {
        Self {
            id: location.id,
            name: location.name.clone(),
            address: location.address.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
            google_place_id: location.google_place_id.clone(),
        }
    }
}
