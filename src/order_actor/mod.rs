//! The order store: owns the cached `orders` collection.

pub mod entity;
mod store;

pub use store::OrderStore;
