pub mod oauth;
pub mod places;
pub mod repositories;
pub mod storage;
