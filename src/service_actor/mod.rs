//! The service store: owns the cached `services` price catalog.

pub mod entity;
mod store;

pub use store::ServiceStore;
