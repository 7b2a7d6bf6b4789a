use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::actor_framework::Collection;
use crate::clients::ServiceClient;
use crate::domain::{PriceUpdate, Service, ServiceId};
use crate::error::StoreError;
use crate::interaction::{Interaction, Notice};
use crate::messages::ServiceRequest;
use crate::remote::rows::PricePatch;
use crate::remote::{encode, Filter, RemoteTable, Table};

/// Service store actor. Sole writer of the cached price catalog.
pub struct ServiceStore {
    receiver: mpsc::Receiver<ServiceRequest>,
    services: Collection<Service>,
}

impl ServiceStore {
    pub fn new(
        queue_depth: usize,
        remote: Arc<dyn RemoteTable>,
        interaction: Arc<dyn Interaction>,
    ) -> (Self, ServiceClient) {
        let (sender, receiver) = mpsc::channel(queue_depth);
        let (services, state) = Collection::new(remote, interaction);
        let store = Self { receiver, services };
        (store, ServiceClient::new(sender, state))
    }

    #[instrument(name = "service_store", skip(self))]
    pub async fn run(mut self) {
        info!("ServiceStore starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ServiceRequest::FetchAll { respond_to } => {
                    let _ = respond_to.send(self.services.fetch_all().await);
                }
                ServiceRequest::UpdatePrice { id, prices, respond_to } => {
                    let _ = respond_to.send(self.handle_update_price(id, prices).await);
                }
            }
        }
        info!("ServiceStore stopped");
    }

    /// No cache lookup here: an unknown id is left to the remote table,
    /// which treats an update that matches nothing as a success.
    #[instrument(skip(self), fields(service_id = %id))]
    async fn handle_update_price(&self, id: ServiceId, prices: PriceUpdate) -> Result<(), StoreError> {
        debug!(standard = prices.standard, express = prices.express, "Processing price update");
        let updated = async {
            let patch = encode(&PricePatch::from(prices))?;
            self.services.remote().update(Table::Services, patch, &Filter::equals("id", id)).await
        }
        .await;

        self.services
            .commit(updated, Notice::success("Prices updated", "The service prices were saved."), "Failed to update prices")
            .await
    }
}
