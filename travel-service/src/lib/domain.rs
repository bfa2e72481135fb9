pub mod activity;
pub mod authentication;
pub mod health;
pub mod itinerary;
pub mod location;
pub mod media;
pub mod share;
pub mod trip;
pub mod user;
