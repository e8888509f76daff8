use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Source of raw list payloads. `path` is an API path such as
/// `/api/vistas/obras-arte`; the returned values are the unvalidated records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_list(&self, path: &str) -> Result<Vec<Value>>;
}
