pub mod register_device;

pub use register_device::register_device;
