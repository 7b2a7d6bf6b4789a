use super::order::{ServiceType, Speed};

pub type ServiceId = i64;

/// Represents one priced line of the shop's catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub category: String,
    pub service_type: ServiceType,
    pub price_standard: f64,
    pub price_express: f64,
}

impl Service {
    pub fn price(&self, speed: Speed) -> f64 {
        match speed {
            Speed::Regular => self.price_standard,
            Speed::Express => self.price_express,
        }
    }
}

/// New prices for a service. The two are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceUpdate {
    pub standard: f64,
    pub express: f64,
}
