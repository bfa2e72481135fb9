pub mod list_media;
pub mod upload_media;

pub use list_media::list_media;
pub use upload_media::upload_media;
