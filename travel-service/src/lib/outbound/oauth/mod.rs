pub mod google;

pub use google::GoogleTokenVerifier;
