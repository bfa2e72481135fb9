pub mod save_place;
pub mod search_places;

pub use save_place::save_place;
pub use search_places::search_places;
