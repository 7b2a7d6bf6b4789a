use tokio::sync::{mpsc, watch};

use crate::actor_framework::Snapshot;
use crate::domain::{PriceUpdate, Service, ServiceId};
use crate::messages::ServiceRequest;

/// Client for interacting with the [`ServiceStore`](crate::service_actor::ServiceStore) actor.
#[derive(Clone)]
pub struct ServiceClient {
    sender: mpsc::Sender<ServiceRequest>,
    state: watch::Receiver<Snapshot<Service>>,
}

impl ServiceClient {
    pub fn new(sender: mpsc::Sender<ServiceRequest>, state: watch::Receiver<Snapshot<Service>>) -> Self {
        Self { sender, state }
    }
}

snapshot_accessors!(ServiceClient, Service);

client_method!(ServiceClient => fn fetch_services() -> usize as ServiceRequest::FetchAll);
client_method!(ServiceClient => fn update_service_price(id: ServiceId, prices: PriceUpdate) -> () as ServiceRequest::UpdatePrice);
