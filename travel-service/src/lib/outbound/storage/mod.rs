pub mod local;

pub use local::LocalDiskStorage;
