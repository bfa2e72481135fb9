pub mod generator;

pub use generator::IssuedShareToken;
pub use generator::ShareTokenGenerator;
