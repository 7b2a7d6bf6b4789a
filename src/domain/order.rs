use serde::{Deserialize, Serialize};

pub type OrderId = i64;

/// How an order is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "kiloan")]
    ByWeight,
    #[serde(rename = "satuan")]
    ByItem,
}

impl ServiceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::ByWeight => "kiloan",
            ServiceType::ByItem => "satuan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speed {
    #[serde(rename = "regular")]
    Regular,
    #[serde(rename = "kilat")]
    Express,
}

impl Speed {
    pub fn as_str(self) -> &'static str {
        match self {
            Speed::Regular => "regular",
            Speed::Express => "kilat",
        }
    }
}

/// Laundering progress of an order.
///
/// Statuses only move forward along [`WorkStatus::SEQUENCE`]; once an order
/// is picked up it stays picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkStatus {
    #[serde(rename = "belum dicuci")]
    Unwashed,
    #[serde(rename = "sedang dicuci")]
    Washing,
    #[serde(rename = "selesai")]
    Done,
    #[serde(rename = "sudah diambil")]
    PickedUp,
}

impl WorkStatus {
    pub const SEQUENCE: [WorkStatus; 4] = [
        WorkStatus::Unwashed,
        WorkStatus::Washing,
        WorkStatus::Done,
        WorkStatus::PickedUp,
    ];

    /// The following stage, clamped at the terminal [`WorkStatus::PickedUp`].
    pub fn next(self) -> Self {
        match self {
            WorkStatus::Unwashed => WorkStatus::Washing,
            WorkStatus::Washing => WorkStatus::Done,
            WorkStatus::Done | WorkStatus::PickedUp => WorkStatus::PickedUp,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == WorkStatus::PickedUp
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorkStatus::Unwashed => "belum dicuci",
            WorkStatus::Washing => "sedang dicuci",
            WorkStatus::Done => "selesai",
            WorkStatus::PickedUp => "sudah diambil",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "belum bayar")]
    Unpaid,
    #[serde(rename = "sudah bayar")]
    Paid,
}

impl PaymentStatus {
    pub fn toggled(self) -> Self {
        match self {
            PaymentStatus::Unpaid => PaymentStatus::Paid,
            PaymentStatus::Paid => PaymentStatus::Unpaid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "belum bayar",
            PaymentStatus::Paid => "sudah bayar",
        }
    }
}

/// One line of a by-item order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_name: String,
    pub quantity: u32,
    #[serde(serialize_with = "super::json_number::serialize")]
    pub price_per_item: f64,
}

impl OrderItem {
    pub fn new(item_name: impl Into<String>, quantity: u32, price_per_item: f64) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
            price_per_item,
        }
    }

    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.price_per_item
    }
}

/// What was handed in: a weighed bundle or a list of counted items.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderPayload {
    ByWeight { weight: f64 },
    ByItem { items: Vec<OrderItem> },
}

impl OrderPayload {
    pub fn service_type(&self) -> ServiceType {
        match self {
            OrderPayload::ByWeight { .. } => ServiceType::ByWeight,
            OrderPayload::ByItem { .. } => ServiceType::ByItem,
        }
    }

    pub fn weight(&self) -> Option<f64> {
        match self {
            OrderPayload::ByWeight { weight } => Some(*weight),
            OrderPayload::ByItem { .. } => None,
        }
    }

    pub fn items(&self) -> Option<&[OrderItem]> {
        match self {
            OrderPayload::ByWeight { .. } => None,
            OrderPayload::ByItem { items } => Some(items),
        }
    }
}

/// A laundry job as stored remotely.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub speed: Speed,
    pub payload: OrderPayload,
    pub work_status: WorkStatus,
    pub payment_status: PaymentStatus,
    pub price: f64,
    pub created_at: String,
}

impl Order {
    pub fn service_type(&self) -> ServiceType {
        self.payload.service_type()
    }
}

/// Payload for creating a new order.
///
/// Id, statuses and creation time are assigned by the remote table.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub speed: Speed,
    pub payload: OrderPayload,
    pub price: f64,
}

impl OrderDraft {
    pub fn by_weight(customer_name: impl Into<String>, speed: Speed, weight: f64, price: f64) -> Self {
        Self {
            customer_name: customer_name.into(),
            speed,
            payload: OrderPayload::ByWeight { weight },
            price,
        }
    }

    pub fn by_item(customer_name: impl Into<String>, speed: Speed, items: Vec<OrderItem>) -> Self {
        let price = items.iter().map(OrderItem::subtotal).sum();
        Self {
            customer_name: customer_name.into(),
            speed,
            payload: OrderPayload::ByItem { items },
            price,
        }
    }

    pub fn service_type(&self) -> ServiceType {
        self.payload.service_type()
    }
}
