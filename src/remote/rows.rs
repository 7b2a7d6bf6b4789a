//! Column-level shapes of the remote tables and their mapping to the domain.

use serde::{Deserialize, Serialize};

use super::RemoteError;
use crate::domain::json_number;
use crate::domain::{
    Order, OrderDraft, OrderId, OrderItem, OrderPayload, PaymentStatus, PriceUpdate, Service,
    ServiceId, ServiceType, Speed, WorkStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: OrderId,
    pub customer_name: String,
    pub service_type: ServiceType,
    pub speed: Speed,
    #[serde(default, serialize_with = "json_number::option::serialize")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub items: Option<Vec<OrderItem>>,
    pub order_status: WorkStatus,
    pub payment_status: PaymentStatus,
    #[serde(serialize_with = "json_number::serialize")]
    pub price: f64,
    pub created_at: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = RemoteError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let payload = match (row.service_type, row.weight, row.items) {
            (ServiceType::ByWeight, Some(weight), _) => OrderPayload::ByWeight { weight },
            (ServiceType::ByItem, _, Some(items)) => OrderPayload::ByItem { items },
            (service_type, _, _) => {
                return Err(RemoteError::Malformed(format!(
                    "order {} is {} but carries no {}",
                    row.id,
                    service_type.as_str(),
                    match service_type {
                        ServiceType::ByWeight => "weight",
                        ServiceType::ByItem => "items",
                    }
                )))
            }
        };
        Ok(Order {
            id: row.id,
            customer_name: row.customer_name,
            speed: row.speed,
            payload,
            work_status: row.order_status,
            payment_status: row.payment_status,
            price: row.price,
            created_at: row.created_at,
        })
    }
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name.clone(),
            service_type: order.service_type(),
            speed: order.speed,
            weight: order.payload.weight(),
            items: order.payload.items().map(<[OrderItem]>::to_vec),
            order_status: order.work_status,
            payment_status: order.payment_status,
            price: order.price,
            created_at: order.created_at.clone(),
        }
    }
}

/// Insert payload for `orders`; omitted columns take their remote defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrderRow {
    pub customer_name: String,
    pub service_type: ServiceType,
    pub speed: Speed,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "json_number::option::serialize")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
    #[serde(serialize_with = "json_number::serialize")]
    pub price: f64,
}

impl From<&OrderDraft> for NewOrderRow {
    fn from(draft: &OrderDraft) -> Self {
        Self {
            customer_name: draft.customer_name.clone(),
            service_type: draft.service_type(),
            speed: draft.speed,
            weight: draft.payload.weight(),
            items: draft.payload.items().map(<[OrderItem]>::to_vec),
            price: draft.price,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorkStatusPatch {
    pub order_status: WorkStatus,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaymentStatusPatch {
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRow {
    pub id: ServiceId,
    pub name: String,
    pub category: String,
    pub service_type: ServiceType,
    #[serde(serialize_with = "json_number::serialize")]
    pub price_regular: f64,
    #[serde(serialize_with = "json_number::serialize")]
    pub price_kilat: f64,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: row.category,
            service_type: row.service_type,
            price_standard: row.price_regular,
            price_express: row.price_kilat,
        }
    }
}

impl From<&Service> for ServiceRow {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id,
            name: service.name.clone(),
            category: service.category.clone(),
            service_type: service.service_type,
            price_regular: service.price_standard,
            price_kilat: service.price_express,
        }
    }
}

/// Insert payload for `services`, used when seeding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewServiceRow {
    pub name: String,
    pub category: String,
    pub service_type: ServiceType,
    #[serde(serialize_with = "json_number::serialize")]
    pub price_regular: f64,
    #[serde(serialize_with = "json_number::serialize")]
    pub price_kilat: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PricePatch {
    #[serde(serialize_with = "json_number::serialize")]
    pub price_regular: f64,
    #[serde(serialize_with = "json_number::serialize")]
    pub price_kilat: f64,
}

impl From<PriceUpdate> for PricePatch {
    fn from(update: PriceUpdate) -> Self {
        Self {
            price_regular: update.standard,
            price_kilat: update.express,
        }
    }
}
