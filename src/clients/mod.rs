//! Cloneable handles for talking to the store actors.

#[macro_use]
mod macros;
mod order_client;
mod service_client;

pub use order_client::OrderClient;
pub use service_client::ServiceClient;
