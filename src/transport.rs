// Transport seam between the typed resource proxies and whatever actually
// moves bytes. Object-safe over serde_json::Value so one implementation can
// serve every entity; the production implementation lives in rest.rs and
// tests substitute an in-memory fake.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::record::RecordId;

#[async_trait]
pub trait ResourceTransport: Send + Sync + 'static {
    // GET {path}: the full collection, in backend order.
    async fn query_all(&self, path: &str) -> Result<Vec<Value>, ApiError>;

    // GET {path}/{id}: a single record.
    async fn fetch(&self, path: &str, id: RecordId) -> Result<Value, ApiError>;

    // POST {path}: create a record, returning it with the assigned id.
    async fn create(&self, path: &str, body: Value) -> Result<Value, ApiError>;

    // PUT {path}/{id}: replace a record, returning the stored form.
    async fn replace(&self, path: &str, id: RecordId, body: Value) -> Result<Value, ApiError>;

    // DELETE {path}/{id}: remove a record.
    async fn remove(&self, path: &str, id: RecordId) -> Result<(), ApiError>;
}
