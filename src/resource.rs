// Typed resource proxy over the transport seam, plus the shared collection
// cache every view reads from. The cache lives in a watch channel so each
// mutation and its notification are one atomic step; observers never see a
// half-applied list.

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

use crate::error::ApiError;
use crate::record::{Record, RecordId};
use crate::transport::ResourceTransport;

pub struct Resource<R: Record> {
    transport: Arc<dyn ResourceTransport>,
    collection: Arc<watch::Sender<Vec<R>>>,
}

// Manual clone: handles share the transport and the cache.
impl<R: Record> Clone for Resource<R> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            collection: Arc::clone(&self.collection),
        }
    }
}

impl<R: Record> Resource<R> {
    pub fn new(transport: Arc<dyn ResourceTransport>) -> Self {
        let (sender, _) = watch::channel(Vec::new());
        Self {
            transport,
            collection: Arc::new(sender),
        }
    }

    // Fetch the full collection; replace the cache only on success.
    pub async fn query(&self) -> Result<Vec<R>, ApiError> {
        let raw = self.transport.query_all(R::resource_path()).await?;
        let records = raw
            .into_iter()
            .map(decode_record)
            .collect::<Result<Vec<R>, ApiError>>()?;
        debug!(
            entity = R::entity_name(),
            count = records.len(),
            "collection refreshed"
        );
        self.collection.send_replace(records.clone());
        Ok(records)
    }

    // Fetch one record by id. The cache is not consulted and not modified.
    pub async fn get(&self, id: RecordId) -> Result<R, ApiError> {
        let raw = self.transport.fetch(R::resource_path(), id).await?;
        decode_record(raw)
    }

    // Create; on success append the stored record (id now assigned) to the
    // cache, preserving the order existing entries are in.
    pub async fn save(&self, record: &R) -> Result<R, ApiError> {
        let body = encode_record(record)?;
        let raw = self.transport.create(R::resource_path(), body).await?;
        let stored: R = decode_record(raw)?;
        debug!(entity = R::entity_name(), id = stored.id(), "record added");
        let appended = stored.clone();
        self.collection.send_modify(move |list| list.push(appended));
        Ok(stored)
    }

    // Replace by id; on success swap the matching cache entry in place. When
    // no entry matches the cache is left untouched and no notification fires.
    pub async fn update(&self, record: &R) -> Result<R, ApiError> {
        let id = record.id().ok_or(ApiError::MissingId)?;
        let body = encode_record(record)?;
        let raw = self.transport.replace(R::resource_path(), id, body).await?;
        let stored: R = decode_record(raw)?;
        debug!(entity = R::entity_name(), id, "record replaced");
        let replacement = stored.clone();
        self.collection.send_if_modified(move |list| {
            match list.iter().position(|entry| entry.id() == Some(id)) {
                Some(index) => {
                    list[index] = replacement;
                    true
                }
                None => false,
            }
        });
        Ok(stored)
    }

    // Delete by id; on success drop the matching cache entry.
    pub async fn delete(&self, record: &R) -> Result<(), ApiError> {
        let id = record.id().ok_or(ApiError::MissingId)?;
        self.transport.remove(R::resource_path(), id).await?;
        debug!(entity = R::entity_name(), id, "record removed");
        self.collection.send_if_modified(|list| {
            match list.iter().position(|entry| entry.id() == Some(id)) {
                Some(index) => {
                    list.remove(index);
                    true
                }
                None => false,
            }
        });
        Ok(())
    }

    // Snapshot of the cache, in insertion order.
    pub fn records(&self) -> Vec<R> {
        self.collection.borrow().clone()
    }

    // Receiver that wakes on every cache mutation. Fresh subscribers treat
    // the current contents as already seen.
    pub fn subscribe(&self) -> watch::Receiver<Vec<R>> {
        self.collection.subscribe()
    }
}

fn encode_record<R: Record>(record: &R) -> Result<Value, ApiError> {
    serde_json::to_value(record).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_record<R: Record>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
