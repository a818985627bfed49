use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use gwscan_core::{QueryError, QueryExecutor};

/// GraphQL-over-HTTP client for the explorer API.
///
/// One POST per `execute`; no batching, retries or caching.
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, QueryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| QueryError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, endpoint: endpoint.into() })
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[async_trait]
impl QueryExecutor for GraphQlClient {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, QueryError> {
        debug!(endpoint = %self.endpoint, variables = %variables, "Sending GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest { query: document, variables })
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Status { status: status.as_u16(), body });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        let parsed: GraphQlResponse = serde_json::from_slice(&body)?;

        if let Some(errors) = parsed.errors.filter(|e| !e.is_empty()) {
            return Err(QueryError::GraphQl(errors.into_iter().map(|e| e.message).collect()));
        }

        match parsed.data {
            Some(Value::Null) | None => Err(QueryError::MissingData),
            Some(data) => Ok(data),
        }
    }
}
