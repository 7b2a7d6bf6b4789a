//! Shop price list used when composing new orders.

use super::order::Speed;

pub const PRICE_PER_KG_REGULAR: f64 = 7000.0;
pub const PRICE_PER_KG_EXPRESS: f64 = 12000.0;

pub fn price_per_kg(speed: Speed) -> f64 {
    match speed {
        Speed::Regular => PRICE_PER_KG_REGULAR,
        Speed::Express => PRICE_PER_KG_EXPRESS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub price_regular: f64,
    pub price_express: f64,
}

impl CatalogItem {
    pub fn price(&self, speed: Speed) -> f64 {
        match speed {
            Speed::Regular => self.price_regular,
            Speed::Express => self.price_express,
        }
    }
}

pub const CLOTHING: &str = "Pakaian";
pub const HOUSEHOLD: &str = "Perlengkapan Rumah Tangga";
pub const EXTRAS: &str = "Barang Tambahan";

const fn item(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    price_regular: f64,
    price_express: f64,
) -> CatalogItem {
    CatalogItem { id, name, category, price_regular, price_express }
}

pub static ITEM_CATALOG: [CatalogItem; 13] = [
    item("kemeja", "Kemeja", CLOTHING, 10000.0, 15000.0),
    item("celana", "Celana Panjang / Jeans", CLOTHING, 10000.0, 15000.0),
    item("jaket", "Jaket", CLOTHING, 15000.0, 22000.0),
    item("sweater", "Sweater / Hoodie", CLOTHING, 15000.0, 22000.0),
    item("dress", "Dress", CLOTHING, 20000.0, 30000.0),
    item("batik", "Batik", CLOTHING, 12000.0, 18000.0),
    item("kebaya", "Kebaya", CLOTHING, 25000.0, 35000.0),
    item("selimut", "Selimut", HOUSEHOLD, 20000.0, 30000.0),
    item("bedcover", "Bed Cover", HOUSEHOLD, 25000.0, 35000.0),
    item("sprei", "Sprei Set", HOUSEHOLD, 18000.0, 28000.0),
    item("gordyn", "Gordyn / Tirai", HOUSEHOLD, 25000.0, 40000.0),
    item("sepatu", "Sepatu (per pasang)", EXTRAS, 30000.0, 45000.0),
    item("tas", "Tas", EXTRAS, 25000.0, 40000.0),
];

pub fn catalog_item(id: &str) -> Option<&'static CatalogItem> {
    ITEM_CATALOG.iter().find(|item| item.id == id)
}
