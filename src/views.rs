//! Read-side helpers for list screens: order filtering, price sections and
//! money formatting.

use crate::domain::{Order, Service, WorkStatus};

/// Status and customer-name filter over the order list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// `None` shows every status.
    pub status: Option<WorkStatus>,
    pub query: String,
}

impl OrderFilter {
    pub fn with_status(mut self, status: WorkStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Case-insensitive substring match; a blank query matches everyone.
    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|status| order.work_status != status) {
            return false;
        }
        let query = self.query.trim();
        query.is_empty()
            || order
                .customer_name
                .to_lowercase()
                .contains(&query.to_lowercase())
    }

    pub fn apply<'a>(&self, orders: &'a [Order]) -> Vec<&'a Order> {
        orders.iter().filter(|order| self.matches(order)).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSection<'a> {
    pub category: &'a str,
    pub services: Vec<&'a Service>,
}

/// Groups services by category, keeping the order in which categories
/// first appear.
pub fn service_sections(services: &[Service]) -> Vec<ServiceSection<'_>> {
    let mut sections: Vec<ServiceSection<'_>> = Vec::new();
    for service in services {
        match sections.iter_mut().find(|s| s.category == service.category) {
            Some(section) => section.services.push(service),
            None => sections.push(ServiceSection {
                category: &service.category,
                services: vec![service],
            }),
        }
    }
    sections
}

/// Formats an amount as Indonesian rupiah, e.g. `Rp 31.500`.
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    if rounded < 0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrderPayload, PaymentStatus, ServiceType, Speed};

    fn order(id: i64, name: &str, status: WorkStatus) -> Order {
        Order {
            id,
            customer_name: name.to_string(),
            speed: Speed::Regular,
            payload: OrderPayload::ByWeight { weight: 2.0 },
            work_status: status,
            payment_status: PaymentStatus::Unpaid,
            price: 14000.0,
            created_at: format!("2024-05-0{}T09:00:00+00:00", id),
        }
    }

    fn service(id: i64, name: &str, category: &str) -> Service {
        Service {
            id,
            name: name.to_string(),
            category: category.to_string(),
            service_type: ServiceType::ByItem,
            price_standard: 10000.0,
            price_express: 15000.0,
        }
    }

    #[test]
    fn status_then_name_filter() {
        let orders = vec![
            order(1, "Andi", WorkStatus::Unwashed),
            order(2, "Budi Santoso", WorkStatus::Done),
            order(3, "Citra", WorkStatus::PickedUp),
        ];

        let done = OrderFilter::default().with_status(WorkStatus::Done);
        let matched = done.apply(&orders);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 2);

        assert!(done.clone().with_query("citra").apply(&orders).is_empty());
        assert_eq!(done.with_query("SANTOSO").apply(&orders).len(), 1);
        assert_eq!(OrderFilter::default().with_query("   ").apply(&orders).len(), 3);
    }

    #[test]
    fn sections_keep_first_appearance_order() {
        let services = vec![
            service(1, "Kiloan", "Kiloan"),
            service(2, "Kemeja", "Pakaian"),
            service(3, "Selimut", "Perlengkapan Rumah Tangga"),
            service(4, "Jaket", "Pakaian"),
        ];
        let sections = service_sections(&services);
        let categories: Vec<_> = sections.iter().map(|s| s.category).collect();
        assert_eq!(categories, ["Kiloan", "Pakaian", "Perlengkapan Rumah Tangga"]);
        let clothing: Vec<_> = sections[1].services.iter().map(|s| s.id).collect();
        assert_eq!(clothing, [2, 4]);
    }

    #[test]
    fn rupiah_uses_dot_grouping() {
        assert_eq!(format_rupiah(31500.0), "Rp 31.500");
        assert_eq!(format_rupiah(1250000.0), "Rp 1.250.000");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(-7000.0), "-Rp 7.000");
    }
}
