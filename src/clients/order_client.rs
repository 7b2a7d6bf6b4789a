use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, instrument};

use crate::actor_framework::{OnSuccess, Snapshot};
use crate::domain::{Order, OrderDraft, OrderId, PaymentStatus, WorkStatus};
use crate::error::StoreError;
use crate::interaction::{Confirmation, Interaction};
use crate::messages::{OrderRequest, Removal};

/// Client for interacting with the [`OrderStore`](crate::order_actor::OrderStore) actor.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
    state: watch::Receiver<Snapshot<Order>>,
    interaction: Arc<dyn Interaction>,
}

impl OrderClient {
    pub fn new(
        sender: mpsc::Sender<OrderRequest>,
        state: watch::Receiver<Snapshot<Order>>,
        interaction: Arc<dyn Interaction>,
    ) -> Self {
        Self { sender, state, interaction }
    }

    /// Asks the user to confirm, then deletes the order. `on_success` runs
    /// only after the delete and the following refresh both went through.
    ///
    /// The question is asked before the request reaches the store, so other
    /// order requests keep flowing while the dialog is open.
    #[instrument(skip(self, on_success))]
    pub async fn remove_order(
        &self,
        id: OrderId,
        on_success: Option<OnSuccess>,
    ) -> Result<Removal, StoreError> {
        let prompt = Confirmation::destructive(
            "Delete order",
            "Are you sure you want to delete this order?",
            "Delete",
        );
        if !self.interaction.confirm(prompt).await {
            info!("Removal cancelled by user");
            return Ok(Removal::Cancelled);
        }

        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(OrderRequest::Remove { id, on_success, respond_to })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)??;
        Ok(Removal::Deleted)
    }
}

snapshot_accessors!(OrderClient, Order);

client_method!(OrderClient => fn fetch_orders() -> usize as OrderRequest::FetchAll);
client_method!(OrderClient => fn add_order(draft: OrderDraft) -> OrderId as OrderRequest::Add);
client_method!(OrderClient => fn advance_order_status(id: OrderId) -> Option<WorkStatus> as OrderRequest::AdvanceStatus);
client_method!(OrderClient => fn toggle_payment_status(id: OrderId) -> Option<PaymentStatus> as OrderRequest::TogglePayment);
