//! Access to the remote `orders` and `services` tables.
//!
//! [`RemoteTable`] is the seam the stores talk to. [`RestTableClient`] speaks
//! to a PostgREST-style HTTP API; [`MemoryTable`] keeps rows in process.

pub mod memory;
pub mod rest;
pub mod rows;
pub mod seed;

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use memory::{Call, MemoryTable, Operation};
pub use rest::RestTableClient;

/// A row as exchanged with the remote store, keyed by snake_case column.
pub type Row = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Orders,
    Services,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Table::Orders => "orders",
            Table::Services => "services",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Equality match on a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub value: Value,
}

impl Filter {
    pub fn equals(column: &'static str, value: impl Into<Value>) -> Self {
        Self { column, value: value.into() }
    }

    pub fn matches(&self, row: &Row) -> bool {
        row.get(self.column) == Some(&self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: &'static str,
    pub ascending: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filter: Option<Filter>,
    pub order: Option<Sort>,
}

impl Query {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn order_by(mut self, column: &'static str, ascending: bool) -> Self {
        self.order = Some(Sort { column, ascending });
        self
    }
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("row encoding failed: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("malformed row: {0}")]
    Malformed(String),
    #[error("{0}")]
    Unavailable(String),
}

/// The table operations the stores depend on.
#[async_trait]
pub trait RemoteTable: Send + Sync {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>, RemoteError>;

    /// Inserts one row and returns it as stored, with remote-assigned columns.
    async fn insert(&self, table: Table, row: Row) -> Result<Row, RemoteError>;

    /// Applies `patch` to every matching row. Matching nothing is not an error.
    async fn update(&self, table: Table, patch: Row, filter: &Filter) -> Result<(), RemoteError>;

    /// Deletes every matching row. Matching nothing is not an error.
    async fn delete(&self, table: Table, filter: &Filter) -> Result<(), RemoteError>;
}

pub fn encode<T: Serialize>(value: &T) -> Result<Row, RemoteError> {
    match serde_json::to_value(value)? {
        Value::Object(row) => Ok(row),
        other => Err(RemoteError::Malformed(format!("expected an object, got {}", other))),
    }
}

pub fn decode<T: DeserializeOwned>(row: Row) -> Result<T, RemoteError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equality_filter_matches_one_column() {
        let filter = Filter::equals("order_status", "selesai");
        assert_eq!(filter, Filter::equals("order_status", json!("selesai")));
        assert_ne!(filter, Filter::equals("order_status", "sudah diambil"));

        let mut row = Row::new();
        row.insert("order_status".to_string(), json!("selesai"));
        assert!(filter.matches(&row));
        assert!(!Filter::equals("id", 1).matches(&row));
    }
}
