//! In-process table store with the same observable behavior as the remote one.

use std::cmp::Ordering;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use super::{Filter, Query, RemoteError, RemoteTable, Row, Sort, Table};
use crate::domain::{PaymentStatus, WorkStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

/// One request received by a [`MemoryTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub operation: Operation,
    pub table: Table,
}

#[derive(Default)]
struct Tables {
    rows: HashMap<Table, Vec<Row>>,
    last_id: HashMap<Table, i64>,
    failures: HashMap<Operation, VecDeque<String>>,
    calls: Vec<Call>,
}

impl Tables {
    fn record(&mut self, operation: Operation, table: Table) -> Result<(), RemoteError> {
        self.calls.push(Call { operation, table });
        match self.failures.get_mut(&operation).and_then(VecDeque::pop_front) {
            Some(message) => Err(RemoteError::Unavailable(message)),
            None => Ok(()),
        }
    }

    fn insert(&mut self, table: Table, mut row: Row) -> Row {
        let id = self.last_id.entry(table).or_insert(0);
        *id += 1;
        row.insert("id".to_string(), Value::from(*id));
        for (column, value) in column_defaults(table) {
            row.entry(column).or_insert(value);
        }
        self.rows.entry(table).or_default().push(row.clone());
        row
    }
}

/// Columns filled in by the table itself when an insert leaves them out.
fn column_defaults(table: Table) -> Vec<(String, Value)> {
    match table {
        Table::Orders => vec![
            ("order_status".to_string(), Value::from(WorkStatus::Unwashed.as_str())),
            ("payment_status".to_string(), Value::from(PaymentStatus::Unpaid.as_str())),
            (
                "created_at".to_string(),
                Value::from(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)),
            ),
        ],
        Table::Services => Vec::new(),
    }
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (None | Some(Value::Null), Some(v)) if !v.is_null() => Ordering::Less,
        (Some(v), None | Some(Value::Null)) if !v.is_null() => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn sort_rows(rows: &mut [Row], sort: Sort) {
    rows.sort_by(|a, b| {
        let ordering = compare(a.get(sort.column), b.get(sort.column))
            .then_with(|| compare(a.get("id"), b.get("id")));
        if sort.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

/// A [`RemoteTable`] held in memory.
///
/// Ids are assigned per table starting at 1; new orders get `created_at`
/// and the initial work and payment statuses. Tests can queue failures per
/// operation and read back the calls that were made.
#[derive(Default)]
pub struct MemoryTable {
    inner: Mutex<Tables>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts rows directly, bypassing failure injection and the call log.
    pub async fn seed(&self, table: Table, rows: impl IntoIterator<Item = Row>) {
        let mut tables = self.inner.lock().await;
        for row in rows {
            tables.insert(table, row);
        }
    }

    /// Makes the next `operation` fail with `message`.
    pub async fn fail_next(&self, operation: Operation, message: impl Into<String>) {
        self.inner
            .lock()
            .await
            .failures
            .entry(operation)
            .or_default()
            .push_back(message.into());
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.inner.lock().await.calls.clone()
    }

    pub async fn count_calls(&self, operation: Operation) -> usize {
        self.inner
            .lock()
            .await
            .calls
            .iter()
            .filter(|call| call.operation == operation)
            .count()
    }

    pub async fn rows(&self, table: Table) -> Vec<Row> {
        self.inner.lock().await.rows.get(&table).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl RemoteTable for MemoryTable {
    #[instrument(skip(self, query), fields(table = %table))]
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>, RemoteError> {
        let mut tables = self.inner.lock().await;
        tables.record(Operation::Select, table)?;
        let mut rows: Vec<Row> = tables
            .rows
            .get(&table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filter.as_ref().map_or(true, |f| f.matches(row)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        if let Some(sort) = query.order {
            sort_rows(&mut rows, sort);
        }
        debug!(count = rows.len(), "Selected rows");
        Ok(rows)
    }

    #[instrument(skip(self, row), fields(table = %table))]
    async fn insert(&self, table: Table, row: Row) -> Result<Row, RemoteError> {
        let mut tables = self.inner.lock().await;
        tables.record(Operation::Insert, table)?;
        let stored = tables.insert(table, row);
        debug!(id = ?stored.get("id"), "Inserted row");
        Ok(stored)
    }

    #[instrument(skip(self, patch), fields(table = %table, column = filter.column))]
    async fn update(&self, table: Table, patch: Row, filter: &Filter) -> Result<(), RemoteError> {
        let mut tables = self.inner.lock().await;
        tables.record(Operation::Update, table)?;
        let mut matched = 0;
        for row in tables.rows.entry(table).or_default().iter_mut().filter(|row| filter.matches(row)) {
            for (column, value) in &patch {
                row.insert(column.clone(), value.clone());
            }
            matched += 1;
        }
        debug!(matched, "Updated rows");
        Ok(())
    }

    #[instrument(skip(self), fields(table = %table, column = filter.column))]
    async fn delete(&self, table: Table, filter: &Filter) -> Result<(), RemoteError> {
        let mut tables = self.inner.lock().await;
        tables.record(Operation::Delete, table)?;
        let rows = tables.rows.entry(table).or_default();
        let before = rows.len();
        rows.retain(|row| !filter.matches(row));
        debug!(deleted = before - rows.len(), "Deleted rows");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(row) => row,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_order_defaults() {
        let table = MemoryTable::new();
        let first = table.insert(Table::Orders, row(json!({ "customer_name": "A" }))).await.unwrap();
        let second = table.insert(Table::Orders, row(json!({ "customer_name": "B" }))).await.unwrap();

        assert_eq!(first["id"], json!(1));
        assert_eq!(second["id"], json!(2));
        assert_eq!(first["order_status"], json!("belum dicuci"));
        assert_eq!(first["payment_status"], json!("belum bayar"));
        assert!(first["created_at"].is_string());

        let service = table.insert(Table::Services, row(json!({ "name": "Jaket" }))).await.unwrap();
        assert_eq!(service["id"], json!(1));
        assert!(!service.contains_key("created_at"));
    }

    #[tokio::test]
    async fn select_orders_and_filters() {
        let table = MemoryTable::new();
        table
            .seed(
                Table::Services,
                [json!({ "name": "b", "rank": 2 }), json!({ "name": "a", "rank": 1 }), json!({ "name": "c", "rank": 3 })]
                    .into_iter()
                    .map(row),
            )
            .await;

        let descending = table
            .select(Table::Services, &Query::all().order_by("rank", false))
            .await
            .unwrap();
        let names: Vec<_> = descending.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["c", "b", "a"]);

        let only = table
            .select(Table::Services, &Query::all().filter(Filter::equals("name", "a")))
            .await
            .unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0]["rank"], json!(1));
    }

    #[tokio::test]
    async fn update_and_delete_tolerate_missing_rows() {
        let table = MemoryTable::new();
        table.seed(Table::Services, [row(json!({ "price_regular": 1.0 }))]).await;

        table
            .update(Table::Services, row(json!({ "price_regular": 2.0 })), &Filter::equals("id", 1))
            .await
            .unwrap();
        table
            .update(Table::Services, row(json!({ "price_regular": 9.0 })), &Filter::equals("id", 42))
            .await
            .unwrap();
        assert_eq!(table.rows(Table::Services).await[0]["price_regular"], json!(2.0));

        table.delete(Table::Services, &Filter::equals("id", 42)).await.unwrap();
        assert_eq!(table.rows(Table::Services).await.len(), 1);
        table.delete(Table::Services, &Filter::equals("id", 1)).await.unwrap();
        assert!(table.rows(Table::Services).await.is_empty());
    }

    #[tokio::test]
    async fn queued_failure_applies_once_and_is_logged() {
        let table = MemoryTable::new();
        table.fail_next(Operation::Select, "connection reset").await;

        let err = table.select(Table::Orders, &Query::all()).await.unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
        assert!(table.select(Table::Orders, &Query::all()).await.is_ok());
        assert_eq!(table.count_calls(Operation::Select).await, 2);
        assert_eq!(
            table.calls().await[0],
            Call { operation: Operation::Select, table: Table::Orders }
        );
    }
}
