use std::sync::Arc;

use tracing::{error, info};

use crate::clients::{OrderClient, ServiceClient};
use crate::interaction::Interaction;
use crate::order_actor::OrderStore;
use crate::remote::RemoteTable;
use crate::service_actor::ServiceStore;

/// Owns the two store actors for the lifetime of the application.
///
/// Consumers get the clients injected from here; nothing else constructs
/// stores.
pub struct LaundrySystem {
    pub order_client: OrderClient,
    pub service_client: ServiceClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl LaundrySystem {
    pub fn new(
        queue_depth: usize,
        remote: Arc<dyn RemoteTable>,
        interaction: Arc<dyn Interaction>,
    ) -> Self {
        info!("Starting laundry system");

        let (order_store, order_client) = OrderStore::new(queue_depth, remote.clone(), interaction.clone());
        let order_handle = tokio::spawn(order_store.run());

        let (service_store, service_client) = ServiceStore::new(queue_depth, remote, interaction);
        let service_handle = tokio::spawn(service_store.run());

        Self {
            order_client,
            service_client,
            handles: vec![order_handle, service_handle],
        }
    }

    /// Drops this system's clients and waits for the actors to drain.
    /// Clones handed out earlier keep their actor alive until they are dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.service_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
