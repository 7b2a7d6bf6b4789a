pub mod json_number;
pub mod order;
pub mod service;
pub mod pricing;

pub use order::*;
pub use service::*;
