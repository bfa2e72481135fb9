pub mod google_login;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod signup;

pub use google_login::google_login;
pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use signup::signup;
