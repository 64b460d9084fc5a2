// In-memory transport for tests: canned collections, scripted per-path
// failures, and a call log, in place of a running backend.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

use crate::error::ApiError;
use crate::record::RecordId;
use crate::transport::ResourceTransport;

pub(crate) struct MockTransport {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    next_id: AtomicU64,
    failures: parking_lot::Mutex<HashMap<String, VecDeque<ApiError>>>,
    calls: parking_lot::Mutex<Vec<String>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            failures: parking_lot::Mutex::new(HashMap::new()),
            calls: parking_lot::Mutex::new(Vec::new()),
        }
    }

    // Replace the stored collection at path. Ids already present stay as
    // given; later creates are assigned ids above the highest seen.
    pub(crate) async fn seed(&self, path: &str, records: Vec<Value>) {
        for record in &records {
            if let Some(id) = id_of(record) {
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
            }
        }
        self.collections
            .lock()
            .await
            .insert(path.to_string(), records);
    }

    // Queue a failure for the next request against path.
    pub(crate) fn fail_next(&self, path: &str, err: ApiError) {
        self.failures
            .lock()
            .entry(path.to_string())
            .or_default()
            .push_back(err);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn log(&self, call: String) {
        self.calls.lock().push(call);
    }

    fn take_failure(&self, path: &str) -> Option<ApiError> {
        self.failures
            .lock()
            .get_mut(path)
            .and_then(VecDeque::pop_front)
    }
}

fn id_of(record: &Value) -> Option<u64> {
    record.get("id").and_then(Value::as_u64)
}

#[async_trait]
impl ResourceTransport for MockTransport {
    async fn query_all(&self, path: &str) -> Result<Vec<Value>, ApiError> {
        self.log(format!("GET {path}"));
        if let Some(err) = self.take_failure(path) {
            return Err(err);
        }
        Ok(self
            .collections
            .lock()
            .await
            .get(path)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch(&self, path: &str, id: RecordId) -> Result<Value, ApiError> {
        self.log(format!("GET {path}/{id}"));
        if let Some(err) = self.take_failure(path) {
            return Err(err);
        }
        self.collections
            .lock()
            .await
            .get(path)
            .and_then(|list| list.iter().find(|r| id_of(r) == Some(id)).cloned())
            .ok_or_else(|| ApiError::NotFound(format!("{path}/{id}")))
    }

    async fn create(&self, path: &str, mut body: Value) -> Result<Value, ApiError> {
        self.log(format!("POST {path}"));
        if let Some(err) = self.take_failure(path) {
            return Err(err);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if let Value::Object(map) = &mut body {
            map.insert("id".to_string(), json!(id));
        }
        self.collections
            .lock()
            .await
            .entry(path.to_string())
            .or_default()
            .push(body.clone());
        Ok(body)
    }

    async fn replace(&self, path: &str, id: RecordId, mut body: Value) -> Result<Value, ApiError> {
        self.log(format!("PUT {path}/{id}"));
        if let Some(err) = self.take_failure(path) {
            return Err(err);
        }
        let mut collections = self.collections.lock().await;
        let list = collections.entry(path.to_string()).or_default();
        match list.iter().position(|r| id_of(r) == Some(id)) {
            Some(index) => {
                if let Value::Object(map) = &mut body {
                    map.insert("id".to_string(), json!(id));
                }
                list[index] = body.clone();
                Ok(body)
            }
            None => Err(ApiError::NotFound(format!("{path}/{id}"))),
        }
    }

    async fn remove(&self, path: &str, id: RecordId) -> Result<(), ApiError> {
        self.log(format!("DELETE {path}/{id}"));
        if let Some(err) = self.take_failure(path) {
            return Err(err);
        }
        let mut collections = self.collections.lock().await;
        let list = collections.entry(path.to_string()).or_default();
        match list.iter().position(|r| id_of(r) == Some(id)) {
            Some(index) => {
                list.remove(index);
                Ok(())
            }
            None => Err(ApiError::NotFound(format!("{path}/{id}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_ids_above_the_seeded_ones() {
        tokio_test::block_on(async {
            let mock = MockTransport::new();
            mock.seed("rest/taxis", vec![json!({"id": 7, "numSeats": 4, "reg": "ABC 123"})])
                .await;

            let created = mock
                .create("rest/taxis", json!({"numSeats": 6, "reg": "XYZ 789"}))
                .await
                .unwrap();

            assert_eq!(id_of(&created), Some(8));
            assert_eq!(mock.query_all("rest/taxis").await.unwrap().len(), 2);
        });
    }

    #[test]
    fn test_scripted_failures_fire_once_per_request() {
        tokio_test::block_on(async {
            let mock = MockTransport::new();
            mock.fail_next("rest/hotels", ApiError::Timeout(30_000));

            assert_eq!(
                mock.query_all("rest/hotels").await.unwrap_err(),
                ApiError::Timeout(30_000)
            );
            assert!(mock.query_all("rest/hotels").await.is_ok());
        });
    }

    #[test]
    fn test_failures_only_hit_their_own_path() {
        tokio_test::block_on(async {
            let mock = MockTransport::new();
            mock.fail_next("rest/hotels", ApiError::Timeout(30_000));

            assert!(mock.query_all("rest/customers").await.is_ok());
            assert!(mock.query_all("rest/hotels").await.is_err());
        });
    }
}
