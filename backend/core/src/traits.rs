use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::QueryError;

/// Sends one parameterized query to the explorer's data service.
///
/// Implementations issue exactly one request per call and never retry or
/// cache. On success they return the response's `data` object.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value, QueryError>;
}

/// Execute `document` and decode its `data` into the command's record type.
pub async fn fetch<T>(
    executor: &dyn QueryExecutor,
    document: &str,
    variables: Value,
) -> Result<T, QueryError>
where
    T: DeserializeOwned,
{
    let data = executor.execute(document, variables).await?;
    Ok(serde_json::from_value(data)?)
}
