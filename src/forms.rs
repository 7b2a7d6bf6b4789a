//! Form-side input handling. Stores never validate, so everything a user
//! types passes through here before becoming an [`OrderDraft`] or a
//! [`PriceUpdate`].

use std::collections::BTreeMap;

use crate::domain::pricing::{catalog_item, price_per_kg, ITEM_CATALOG};
use crate::domain::{OrderDraft, OrderItem, OrderPayload, PriceUpdate, ServiceType, Speed};
use crate::error::ValidationError;

/// Raw state of the new-order form.
#[derive(Debug, Clone)]
pub struct OrderForm {
    pub customer_name: String,
    pub service_type: ServiceType,
    pub speed: Speed,
    pub weight: String,
    quantities: BTreeMap<&'static str, u32>,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            service_type: ServiceType::ByWeight,
            speed: Speed::Regular,
            weight: String::new(),
            quantities: BTreeMap::new(),
        }
    }
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A by-weight form with the name and weight fields already typed in.
    pub fn by_weight(customer_name: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            weight: weight.into(),
            ..Self::default()
        }
    }

    /// An empty by-item form for `customer_name`; pick items with
    /// [`increment`](Self::increment) or [`set_quantity`](Self::set_quantity).
    pub fn by_item(customer_name: impl Into<String>, speed: Speed) -> Self {
        Self {
            customer_name: customer_name.into(),
            service_type: ServiceType::ByItem,
            speed,
            ..Self::default()
        }
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) -> Result<(), ValidationError> {
        let item = catalog_item(item_id).ok_or_else(|| ValidationError::UnknownItem(item_id.to_string()))?;
        self.quantities.insert(item.id, quantity);
        Ok(())
    }

    pub fn increment(&mut self, item_id: &str) -> Result<(), ValidationError> {
        self.set_quantity(item_id, self.quantity(item_id).saturating_add(1))
    }

    /// Lowers the count by one, never below zero.
    pub fn decrement(&mut self, item_id: &str) -> Result<(), ValidationError> {
        self.set_quantity(item_id, self.quantity(item_id).saturating_sub(1))
    }

    fn parsed_weight(&self) -> Option<f64> {
        self.weight.trim().parse::<f64>().ok().filter(|w| w.is_finite())
    }

    /// Item lines in catalog order, priced for the selected speed.
    fn item_lines(&self) -> Vec<OrderItem> {
        ITEM_CATALOG
            .iter()
            .filter_map(|item| {
                let quantity = self.quantity(item.id);
                (quantity > 0).then(|| OrderItem::new(item.name, quantity, item.price(self.speed)))
            })
            .collect()
    }

    /// Running total shown while the form is being filled in.
    pub fn total_price(&self) -> f64 {
        match self.service_type {
            ServiceType::ByWeight => self.parsed_weight().unwrap_or(0.0) * price_per_kg(self.speed),
            ServiceType::ByItem => self.item_lines().iter().map(OrderItem::subtotal).sum(),
        }
    }

    pub fn to_draft(&self) -> Result<OrderDraft, ValidationError> {
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(ValidationError::EmptyCustomerName);
        }

        let payload = match self.service_type {
            ServiceType::ByWeight => match self.parsed_weight() {
                Some(weight) if weight > 0.0 => OrderPayload::ByWeight { weight },
                _ => return Err(ValidationError::InvalidWeight),
            },
            ServiceType::ByItem => {
                let items = self.item_lines();
                if items.is_empty() {
                    return Err(ValidationError::NoItemsSelected);
                }
                OrderPayload::ByItem { items }
            }
        };

        Ok(OrderDraft {
            customer_name: customer_name.to_string(),
            speed: self.speed,
            payload,
            price: self.total_price(),
        })
    }
}

/// Raw state of the edit-prices form.
#[derive(Debug, Clone, Default)]
pub struct PriceForm {
    pub standard: String,
    pub express: String,
}

impl PriceForm {
    pub fn new(standard: impl Into<String>, express: impl Into<String>) -> Self {
        Self {
            standard: standard.into(),
            express: express.into(),
        }
    }

    pub fn to_update(&self) -> Result<PriceUpdate, ValidationError> {
        let parse = |text: &str| text.trim().parse::<u32>().map_err(|_| ValidationError::InvalidPrice);
        Ok(PriceUpdate {
            standard: f64::from(parse(&self.standard)?),
            express: f64::from(parse(&self.express)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighed_regular_order_is_priced_per_kg() {
        let form = OrderForm::by_weight("  Rina ", "4.5");
        assert_eq!(form.total_price(), 31500.0);

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.customer_name, "Rina");
        assert_eq!(draft.payload, OrderPayload::ByWeight { weight: 4.5 });
        assert_eq!(draft.price, 31500.0);
    }

    #[test]
    fn counted_order_sums_item_lines() {
        let mut form = OrderForm::by_item("Sari", Speed::Regular);
        form.increment("kemeja").unwrap();
        form.increment("kemeja").unwrap();
        form.increment("jaket").unwrap();

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.price, 35000.0);
        assert_eq!(
            draft.payload.items().unwrap(),
            [OrderItem::new("Kemeja", 2, 10000.0), OrderItem::new("Jaket", 1, 15000.0)]
        );
        assert!(draft.payload.weight().is_none());
    }

    #[test]
    fn express_speed_uses_express_prices() {
        let mut form = OrderForm::by_item("Sari", Speed::Express);
        form.set_quantity("tas", 2).unwrap();
        assert_eq!(form.total_price(), 80000.0);

        form.service_type = ServiceType::ByWeight;
        form.weight = "2".to_string();
        assert_eq!(form.total_price(), 24000.0);
    }

    #[test]
    fn validation_rejects_incomplete_forms() {
        let mut form = OrderForm::new();
        form.weight = "3".to_string();
        assert_eq!(form.to_draft(), Err(ValidationError::EmptyCustomerName));

        form.customer_name = "Budi".to_string();
        for bad in ["", "abc", "0", "-1.5"] {
            form.weight = bad.to_string();
            assert_eq!(form.to_draft(), Err(ValidationError::InvalidWeight), "weight {:?}", bad);
        }

        form.service_type = ServiceType::ByItem;
        assert_eq!(form.to_draft(), Err(ValidationError::NoItemsSelected));
        form.increment("sepatu").unwrap();
        form.decrement("sepatu").unwrap();
        form.decrement("sepatu").unwrap();
        assert_eq!(form.quantity("sepatu"), 0);
        assert_eq!(form.to_draft(), Err(ValidationError::NoItemsSelected));

        assert_eq!(form.increment("kaos"), Err(ValidationError::UnknownItem("kaos".to_string())));
    }

    #[test]
    fn price_form_accepts_whole_numbers_only() {
        assert_eq!(
            PriceForm::new("8000", " 13000 ").to_update(),
            Ok(PriceUpdate { standard: 8000.0, express: 13000.0 })
        );
        assert_eq!(PriceForm::new("8000", "").to_update(), Err(ValidationError::InvalidPrice));
        assert_eq!(PriceForm::new("-5", "100").to_update(), Err(ValidationError::InvalidPrice));
        assert_eq!(PriceForm::new("7.5", "100").to_update(), Err(ValidationError::InvalidPrice));
    }
}
