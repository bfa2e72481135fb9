use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::PasswordHasher;
use auth::TokenService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use travel_service::config::Config;
use travel_service::domain::activity::service::ActivityService;
use travel_service::domain::authentication::service::AuthService;
use travel_service::domain::itinerary::service::ItineraryService;
use travel_service::domain::location::service::LocationService;
use travel_service::domain::media::service::MediaService;
use travel_service::domain::share::service::ShareService;
use travel_service::domain::trip::service::TripService;
use travel_service::domain::user::service::UserService;
use travel_service::inbound::http::router::create_router;
use travel_service::inbound::http::router::AppState;
use travel_service::outbound::oauth::GoogleTokenVerifier;
use travel_service::outbound::places::GooglePlacesClient;
use travel_service::outbound::repositories::PostgresActivityRepository;
use travel_service::outbound::repositories::PostgresDatabaseProbe;
use travel_service::outbound::repositories::PostgresItineraryRepository;
use travel_service::outbound::repositories::PostgresLocationRepository;
use travel_service::outbound::repositories::PostgresMediaRepository;
use travel_service::outbound::repositories::PostgresShareRepository;
use travel_service::outbound::repositories::PostgresTripRepository;
use travel_service::outbound::repositories::PostgresUserRepository;
use travel_service::outbound::storage::LocalDiskStorage;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "travel-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        request_timeout_secs = config.server.request_timeout_secs,
        upload_dir = %config.storage.upload_dir,
        google_oauth_audience = config.oauth.google_client_id.is_some(),
        places_configured = config.places.api_key.is_some(),
        "Configuration loaded"
    );

    let token_service = TokenService::new(config.jwt.secret.as_bytes(), &config.jwt.issuer)?;
    let authenticator = Arc::new(Authenticator::new(PasswordHasher::new(), token_service));

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let trip_repository = Arc::new(PostgresTripRepository::new(pg_pool.clone()));
    let share_repository = Arc::new(PostgresShareRepository::new(pg_pool.clone()));
    let itinerary_repository = Arc::new(PostgresItineraryRepository::new(pg_pool.clone()));
    let activity_repository = Arc::new(PostgresActivityRepository::new(pg_pool.clone()));
    let media_repository = Arc::new(PostgresMediaRepository::new(pg_pool.clone()));
    let location_repository = Arc::new(PostgresLocationRepository::new(pg_pool.clone()));

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let token_verifier = Arc::new(GoogleTokenVerifier::new(http_client.clone(), &config.oauth));
    let places_client = Arc::new(GooglePlacesClient::new(http_client, &config.places));
    let media_storage = Arc::new(LocalDiskStorage::new(&config.storage));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            token_verifier,
            authenticator,
        )),
        user_service: Arc::new(UserService::new(user_repository)),
        trip_service: Arc::new(TripService::new(Arc::clone(&trip_repository))),
        share_service: Arc::new(ShareService::new(
            share_repository,
            Arc::clone(&trip_repository),
        )),
        itinerary_service: Arc::new(ItineraryService::new(
            Arc::clone(&itinerary_repository),
            Arc::clone(&trip_repository),
        )),
        activity_service: Arc::new(ActivityService::new(
            Arc::clone(&activity_repository),
            itinerary_repository,
            Arc::clone(&trip_repository),
        )),
        media_service: Arc::new(MediaService::new(
            media_repository,
            media_storage,
            activity_repository,
            trip_repository,
        )),
        location_service: Arc::new(LocationService::new(location_repository, places_client)),
        database: Arc::new(PostgresDatabaseProbe::new(pg_pool)),
    };

    let http_application = create_router(
        state,
        &config.storage,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application).await?;

    Ok(())
}
