//! Starting contents of the `services` table for a fresh in-memory store.

use super::rows::NewServiceRow;
use super::{encode, RemoteError, Row};
use crate::domain::pricing::{ITEM_CATALOG, PRICE_PER_KG_EXPRESS, PRICE_PER_KG_REGULAR};
use crate::domain::ServiceType;

pub const BY_WEIGHT_CATEGORY: &str = "Kiloan";

pub fn service_rows() -> Result<Vec<Row>, RemoteError> {
    let by_weight = NewServiceRow {
        name: "Cuci Kering Setrika (per kg)".to_string(),
        category: BY_WEIGHT_CATEGORY.to_string(),
        service_type: ServiceType::ByWeight,
        price_regular: PRICE_PER_KG_REGULAR,
        price_kilat: PRICE_PER_KG_EXPRESS,
    };
    let by_item = ITEM_CATALOG.iter().map(|item| NewServiceRow {
        name: item.name.to_string(),
        category: item.category.to_string(),
        service_type: ServiceType::ByItem,
        price_regular: item.price_regular,
        price_kilat: item.price_express,
    });

    std::iter::once(by_weight)
        .chain(by_item)
        .map(|row| encode(&row))
        .collect()
}
