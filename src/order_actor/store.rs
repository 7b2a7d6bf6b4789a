use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::actor_framework::{Collection, OnSuccess};
use crate::clients::OrderClient;
use crate::domain::{Order, OrderDraft, OrderId, PaymentStatus, WorkStatus};
use crate::error::StoreError;
use crate::interaction::{Interaction, Notice};
use crate::messages::OrderRequest;
use crate::remote::rows::{NewOrderRow, PaymentStatusPatch, WorkStatusPatch};
use crate::remote::{encode, Filter, RemoteError, RemoteTable, Table};

/// Order store actor. Sole writer of the cached order collection.
pub struct OrderStore {
    receiver: mpsc::Receiver<OrderRequest>,
    orders: Collection<Order>,
}

impl OrderStore {
    pub fn new(
        queue_depth: usize,
        remote: Arc<dyn RemoteTable>,
        interaction: Arc<dyn Interaction>,
    ) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(queue_depth);
        let (orders, state) = Collection::new(remote, interaction.clone());
        let store = Self { receiver, orders };
        (store, OrderClient::new(sender, state, interaction))
    }

    #[instrument(name = "order_store", skip(self))]
    pub async fn run(mut self) {
        info!("OrderStore starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::FetchAll { respond_to } => {
                    let _ = respond_to.send(self.orders.fetch_all().await);
                }
                OrderRequest::Add { draft, respond_to } => {
                    let _ = respond_to.send(self.handle_add(draft).await);
                }
                OrderRequest::Remove { id, on_success, respond_to } => {
                    let _ = respond_to.send(self.handle_remove(id, on_success).await);
                }
                OrderRequest::AdvanceStatus { id, respond_to } => {
                    let _ = respond_to.send(self.handle_advance_status(id).await);
                }
                OrderRequest::TogglePayment { id, respond_to } => {
                    let _ = respond_to.send(self.handle_toggle_payment(id).await);
                }
            }
        }
        info!("OrderStore stopped");
    }

    #[instrument(skip(self, draft), fields(customer = %draft.customer_name, service_type = draft.service_type().as_str()))]
    async fn handle_add(&self, draft: OrderDraft) -> Result<OrderId, StoreError> {
        debug!("Processing add request");
        let inserted = async {
            let row = self.orders.remote().insert(Table::Orders, encode(&NewOrderRow::from(&draft))?).await?;
            row.get("id")
                .and_then(serde_json::Value::as_i64)
                .ok_or_else(|| RemoteError::Malformed("inserted order has no id".to_string()))
        }
        .await;

        self.orders
            .commit(inserted, Notice::success("Order added", "The new order was saved."), "Failed to add order")
            .await
    }

    /// Runs after the user already confirmed on the client side.
    #[instrument(skip(self, on_success), fields(order_id = %id))]
    async fn handle_remove(&self, id: OrderId, on_success: Option<OnSuccess>) -> Result<(), StoreError> {
        let deleted = self.orders.remote().delete(Table::Orders, &Filter::equals("id", id)).await;
        self.orders
            .commit(deleted, Notice::success("Order deleted", "The order was deleted."), "Failed to delete order")
            .await?;

        if let Some(callback) = on_success {
            callback.call();
        }
        Ok(())
    }

    #[instrument(skip(self), fields(order_id = %id))]
    async fn handle_advance_status(&self, id: OrderId) -> Result<Option<WorkStatus>, StoreError> {
        let Some(order) = self.orders.find(id) else {
            debug!("Order not cached, nothing to advance");
            return Ok(None);
        };
        let next = order.work_status.next();
        debug!(from = order.work_status.as_str(), to = next.as_str(), "Advancing work status");

        let updated = async {
            let patch = encode(&WorkStatusPatch { order_status: next })?;
            self.orders.remote().update(Table::Orders, patch, &Filter::equals("id", id)).await
        }
        .await;

        self.orders
            .commit(updated, Notice::success("Status updated", "The work status was changed."), "Failed to update status")
            .await?;
        Ok(Some(next))
    }

    #[instrument(skip(self), fields(order_id = %id))]
    async fn handle_toggle_payment(&self, id: OrderId) -> Result<Option<PaymentStatus>, StoreError> {
        let Some(order) = self.orders.find(id) else {
            debug!("Order not cached, nothing to toggle");
            return Ok(None);
        };
        let next = order.payment_status.toggled();

        let updated = async {
            let patch = encode(&PaymentStatusPatch { payment_status: next })?;
            self.orders.remote().update(Table::Orders, patch, &Filter::equals("id", id)).await
        }
        .await;

        self.orders
            .commit(
                updated,
                Notice::success("Payment updated", "The payment status was changed."),
                "Failed to update payment status",
            )
            .await?;
        Ok(Some(next))
    }
}
