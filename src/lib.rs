//! # laundry-desk
//!
//! Client-side core of a laundry shop's order and price management.
//!
//! Two store actors each own one cached table:
//!
//! - [`OrderStore`](order_actor::OrderStore) → `orders`: fetch, add, remove,
//!   advance work status, toggle payment.
//! - [`ServiceStore`](service_actor::ServiceStore) → `services`: fetch and
//!   update prices.
//!
//! Callers hold cloneable clients ([`OrderClient`](clients::OrderClient),
//! [`ServiceClient`](clients::ServiceClient)) that send requests and read
//! snapshots. Every mutation ends with a full re-fetch, so once it resolves
//! the snapshot reflects the remote table. Success and failure messages go
//! through the [`Interaction`](interaction::Interaction) seam; remote access
//! goes through [`RemoteTable`](remote::RemoteTable).
//!
//! ## Example Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use laundry_desk::app_system::LaundrySystem;
//! # use laundry_desk::interaction::LogInteraction;
//! # use laundry_desk::remote::MemoryTable;
//! # use laundry_desk::domain::{OrderDraft, Speed};
//! # async fn demo() -> Result<(), laundry_desk::error::StoreError> {
//! let system = LaundrySystem::new(32, Arc::new(MemoryTable::new()), Arc::new(LogInteraction::new(false)));
//!
//! let id = system.order_client.add_order(OrderDraft::by_weight("Rina", Speed::Regular, 4.5, 31500.0)).await?;
//! system.order_client.advance_order_status(id).await?;
//! assert_eq!(system.order_client.items().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod forms;
pub mod interaction;
pub mod messages;
pub mod order_actor;
pub mod remote;
pub mod service_actor;
pub mod views;

#[cfg(test)]
mod mock_framework;
