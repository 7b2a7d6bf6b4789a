use crate::actor_framework::{OnSuccess, Response};
use crate::domain::{OrderDraft, OrderId, PaymentStatus, PriceUpdate, ServiceId, WorkStatus};

/// Outcome of [`OrderClient::remove_order`](crate::clients::OrderClient::remove_order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Deleted,
    Cancelled,
}

/// Typed message enums for store communication. Each variant includes parameters
/// and a oneshot channel for responses.

#[derive(Debug)]
pub enum OrderRequest {
    FetchAll {
        respond_to: Response<usize>,
    },
    Add {
        draft: OrderDraft,
        respond_to: Response<OrderId>,
    },
    Remove {
        id: OrderId,
        on_success: Option<OnSuccess>,
        respond_to: Response<()>,
    },
    AdvanceStatus {
        id: OrderId,
        respond_to: Response<Option<WorkStatus>>,
    },
    TogglePayment {
        id: OrderId,
        respond_to: Response<Option<PaymentStatus>>,
    },
}

#[derive(Debug)]
pub enum ServiceRequest {
    FetchAll {
        respond_to: Response<usize>,
    },
    UpdatePrice {
        id: ServiceId,
        prices: PriceUpdate,
        respond_to: Response<()>,
    },
}
