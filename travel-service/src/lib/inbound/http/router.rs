use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::activities;
use super::handlers::auth;
use super::handlers::health::health_check;
use super::handlers::itineraries;
use super::handlers::locations;
use super::handlers::media;
use super::handlers::preview::get_preview;
use super::handlers::trips;
use super::handlers::users;
use super::middleware::authenticate as auth_middleware;
use crate::config::StorageConfig;
use crate::domain::activity::ports::ActivityServicePort;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::health::DatabaseProbe;
use crate::domain::itinerary::ports::ItineraryServicePort;
use crate::domain::location::ports::LocationServicePort;
use crate::domain::media::models::UploadMediaCommand;
use crate::domain::media::ports::MediaServicePort;
use crate::domain::share::ports::ShareServicePort;
use crate::domain::trip::ports::TripServicePort;
use crate::domain::user::ports::UserServicePort;

/// Room for the multipart framing around a maximum-size file.
const UPLOAD_BODY_LIMIT: usize = UploadMediaCommand::MAX_SIZE + 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub trip_service: Arc<dyn TripServicePort>,
    pub share_service: Arc<dyn ShareServicePort>,
    pub itinerary_service: Arc<dyn ItineraryServicePort>,
    pub activity_service: Arc<dyn ActivityServicePort>,
    pub media_service: Arc<dyn MediaServicePort>,
    pub location_service: Arc<dyn LocationServicePort>,
    pub database: Arc<dyn DatabaseProbe>,
}

pub fn create_router(state: AppState, storage: &StorageConfig, request_timeout: Duration) -> Router {
    let public_routes = Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/google", post(auth::google_login))
        .route("/preview/:token", get(get_preview));

    let protected_routes = Router::new()
        .route("/users/device-token", post(users::register_device))
        .route("/trips", post(trips::create_trip).get(trips::list_trips))
        .route(
            "/trips/:trip_id",
            get(trips::get_trip)
                .put(trips::update_trip)
                .delete(trips::delete_trip),
        )
        .route("/trips/:trip_id/share", post(trips::share_trip))
        .route(
            "/trips/:trip_id/itineraries",
            post(itineraries::create_itinerary).get(itineraries::list_itineraries),
        )
        .route(
            "/itineraries/:itinerary_id",
            get(itineraries::get_itinerary)
                .put(itineraries::update_itinerary)
                .delete(itineraries::delete_itinerary),
        )
        .route(
            "/itineraries/:itinerary_id/activities",
            post(activities::create_activity).get(activities::list_activities),
        )
        .route(
            "/activities/:activity_id",
            get(activities::get_activity)
                .put(activities::update_activity)
                .delete(activities::delete_activity),
        )
        .route("/activities/:activity_id/media", get(media::list_media))
        .route(
            "/media/upload",
            post(media::upload_media).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route("/locations/search", get(locations::search_places))
        .route("/locations", post(locations::save_place))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", public_routes.merge(protected_routes))
        .nest_service(&storage.public_path, ServeDir::new(&storage.upload_dir))
        .layer(trace_layer)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
