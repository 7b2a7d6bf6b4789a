use crate::actor_framework::Record;
use crate::domain::{Order, OrderId};
use crate::remote::rows::OrderRow;
use crate::remote::{decode, Query, RemoteError, Row, Table};

impl Record for Order {
    type Id = OrderId;
    const TABLE: Table = Table::Orders;
    const PLURAL: &'static str = "orders";

    fn id(&self) -> OrderId {
        self.id
    }

    /// Newest orders first.
    fn listing() -> Query {
        Query::all().order_by("created_at", false)
    }

    fn from_row(row: Row) -> Result<Self, RemoteError> {
        Order::try_from(decode::<OrderRow>(row)?)
    }
}
