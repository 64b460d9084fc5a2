// Production transport: JSON over HTTP against the contacts backend.

use async_trait::async_trait;
use rand::Rng;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::record::RecordId;
use crate::transport::ResourceTransport;

// Transport configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // Application root; entity paths already carry the rest/ prefix.
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 30_000,
            user_agent: format!("traveldesk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

pub struct RestTransport {
    config: ClientConfig,
    client: reqwest::Client,
}

impl RestTransport {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn item_url(&self, path: &str, id: RecordId) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path,
            id
        )
    }

    // Intermediate caches serve stale reads for these endpoints; a throwaway
    // nonce on every GET forces a fresh response.
    fn nonce() -> u64 {
        rand::thread_rng().gen()
    }

    fn send_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.config.timeout_ms)
        } else {
            ApiError::Network(err.to_string())
        }
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<(StatusCode, String), ApiError> {
        let status = response.status();
        let body = response.text().await.map_err(|e| self.send_error(e))?;
        Ok((status, body))
    }
}

// Status table for non-2xx responses. Pure so tests can cover it without a
// live server.
fn error_for_status(status: StatusCode, target: &str, body: &str) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        ApiError::NotFound(target.to_string())
    } else {
        ApiError::rejected(status.as_u16(), body)
    }
}

fn decode(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl ResourceTransport for RestTransport {
    async fn query_all(&self, path: &str) -> Result<Vec<Value>, ApiError> {
        let url = self.collection_url(path);
        debug!(%url, "GET collection");
        let response = self
            .client
            .get(&url)
            .query(&[("nonce", Self::nonce())])
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        let (status, body) = self.read_body(response).await?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "collection fetch rejected");
            return Err(error_for_status(status, path, &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch(&self, path: &str, id: RecordId) -> Result<Value, ApiError> {
        let url = self.item_url(path, id);
        debug!(%url, "GET record");
        let response = self
            .client
            .get(&url)
            .query(&[("nonce", Self::nonce())])
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        let (status, body) = self.read_body(response).await?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "record fetch rejected");
            return Err(error_for_status(status, &format!("{path}/{id}"), &body));
        }
        decode(&body)
    }

    async fn create(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        let url = self.collection_url(path);
        debug!(%url, "POST record");
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        let (status, text) = self.read_body(response).await?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "create rejected");
            return Err(error_for_status(status, path, &text));
        }
        // The backend answers 201 with the stored record, id assigned.
        decode(&text)
    }

    async fn replace(&self, path: &str, id: RecordId, body: Value) -> Result<Value, ApiError> {
        let url = self.item_url(path, id);
        debug!(%url, "PUT record");
        let response = self
            .client
            .put(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        let (status, text) = self.read_body(response).await?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "replace rejected");
            return Err(error_for_status(status, &format!("{path}/{id}"), &text));
        }
        decode(&text)
    }

    async fn remove(&self, path: &str, id: RecordId) -> Result<(), ApiError> {
        let url = self.item_url(path, id);
        debug!(%url, "DELETE record");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;
        let (status, text) = self.read_body(response).await?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "delete rejected");
            return Err(error_for_status(status, &format!("{path}/{id}"), &text));
        }
        Ok(())
    }
}
