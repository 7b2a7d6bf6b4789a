//! HTTP client for a PostgREST-style table API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{Filter, Query, RemoteError, RemoteTable, Row, Table};

const USER_AGENT: &str = concat!("laundry-desk/", env!("CARGO_PKG_VERSION"));

/// Error body returned by the table API on a rejected request.
#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
    details: Option<String>,
}

pub struct RestTableClient {
    client: Client,
    base_url: String,
}

impl RestTableClient {
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(api_key)
            .map_err(|e| RemoteError::Malformed(format!("invalid api key: {}", e)))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| RemoteError::Malformed(format!("invalid api key: {}", e)))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: format!("{}/rest/v1", url.trim_end_matches('/')),
        })
    }

    fn endpoint(&self, table: Table) -> String {
        format!("{}/{}", self.base_url, table.name())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, RemoteError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Table API rejected request");
        Err(rejection(status.as_u16(), &body))
    }
}

/// Renders a value the way the API expects it inside `eq.` filters.
fn filter_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn filter_param(filter: &Filter) -> (String, String) {
    (filter.column.to_string(), format!("eq.{}", filter_value(&filter.value)))
}

fn query_params(query: &Query) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    if let Some(filter) = &query.filter {
        params.push(filter_param(filter));
    }
    if let Some(sort) = query.order {
        let direction = if sort.ascending { "asc" } else { "desc" };
        params.push(("order".to_string(), format!("{}.{}", sort.column, direction)));
    }
    params
}

fn rejection(status: u16, body: &str) -> RemoteError {
    let message = serde_json::from_str::<ApiError>(body)
        .ok()
        .and_then(|e| e.message.or(e.details))
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                body.to_string()
            }
        });
    RemoteError::Rejected { status, message }
}

#[async_trait]
impl RemoteTable for RestTableClient {
    #[instrument(skip(self, query), fields(table = %table))]
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>, RemoteError> {
        let request = self.client.get(self.endpoint(table)).query(&query_params(query));
        let rows: Vec<Row> = self.send(request).await?.json().await?;
        debug!(count = rows.len(), "Selected rows");
        Ok(rows)
    }

    #[instrument(skip(self, row), fields(table = %table))]
    async fn insert(&self, table: Table, row: Row) -> Result<Row, RemoteError> {
        let request = self
            .client
            .post(self.endpoint(table))
            .header("Prefer", "return=representation")
            .json(&row);
        let mut inserted: Vec<Row> = self.send(request).await?.json().await?;
        inserted
            .pop()
            .ok_or_else(|| RemoteError::Malformed("insert returned no row".to_string()))
    }

    #[instrument(skip(self, patch), fields(table = %table, column = filter.column))]
    async fn update(&self, table: Table, patch: Row, filter: &Filter) -> Result<(), RemoteError> {
        let request = self
            .client
            .patch(self.endpoint(table))
            .query(&[filter_param(filter)])
            .header("Prefer", "return=minimal")
            .json(&patch);
        self.send(request).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(table = %table, column = filter.column))]
    async fn delete(&self, table: Table, filter: &Filter) -> Result<(), RemoteError> {
        let request = self
            .client
            .delete(self.endpoint(table))
            .query(&[filter_param(filter)]);
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_query_uses_select_and_order_params() {
        let params = query_params(&Query::all().order_by("created_at", false));
        assert_eq!(
            params,
            vec![
                ("select".to_string(), "*".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn filters_render_without_json_quotes() {
        assert_eq!(filter_param(&Filter::equals("id", 12)), ("id".to_string(), "eq.12".to_string()));
        assert_eq!(
            filter_param(&Filter::equals("order_status", "selesai")),
            ("order_status".to_string(), "eq.selesai".to_string())
        );
    }

    #[test]
    fn rejection_prefers_api_message() {
        let err = rejection(409, r#"{"code":"23505","message":"duplicate key value","details":null}"#);
        assert!(matches!(err, RemoteError::Rejected { status: 409, .. }));
        assert_eq!(err.to_string(), "duplicate key value");

        assert_eq!(rejection(502, "").to_string(), "HTTP 502");
        assert_eq!(rejection(500, "upstream down").to_string(), "upstream down");
    }

    #[test]
    fn base_url_is_normalized() {
        let client = RestTableClient::new("https://db.example.com/", "key", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(Table::Services), "https://db.example.com/rest/v1/services");
    }
}
