pub mod activity;
pub mod health;
pub mod itinerary;
pub mod location;
pub mod media;
pub mod share;
pub mod trip;
pub mod user;

pub use activity::PostgresActivityRepository;
pub use health::PostgresDatabaseProbe;
pub use itinerary::PostgresItineraryRepository;
pub use location::PostgresLocationRepository;
pub use media::PostgresMediaRepository;
pub use share::PostgresShareRepository;
pub use trip::PostgresTripRepository;
pub use user::PostgresUserRepository;
