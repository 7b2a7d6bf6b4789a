use crate::actor_framework::Record;
use crate::domain::{Service, ServiceId};
use crate::remote::rows::ServiceRow;
use crate::remote::{decode, Query, RemoteError, Row, Table};

impl Record for Service {
    type Id = ServiceId;
    const TABLE: Table = Table::Services;
    const PLURAL: &'static str = "services";

    fn id(&self) -> ServiceId {
        self.id
    }

    fn listing() -> Query {
        Query::all().order_by("id", true)
    }

    fn from_row(row: Row) -> Result<Self, RemoteError> {
        Ok(decode::<ServiceRow>(row)?.into())
    }
}
