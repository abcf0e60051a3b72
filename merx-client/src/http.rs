//! reqwest-backed [`CommerceClient`] implementation.
//!
//! Endpoint layout (all under `<api_url>/<project_key>/`):
//!
//! ```text
//! GET  <endpoint>?offset&limit[&modifiedSince]      paged source reads
//! POST <endpoint>/batch                             batch upsert, returns {created, updated, failed}
//! GET  custom-objects/merx-checkpoints/<selector>   last-sync checkpoint (404 = none)
//! POST custom-objects                               record a checkpoint
//! ```
//!
//! Retries and timeouts beyond the configured request timeout are not this
//! layer's concern.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use merx_core::ResourceKind;

use crate::client::CommerceClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{ApplyOutcome, ResourcePage, ResourceQuery, UpsertBatch};

const CHECKPOINT_CONTAINER: &str = "merx-checkpoints";

/// HTTP client for one commerce project.
///
/// Construction is connectionless — a reqwest `Client` is a lazy connection
/// pool — so building one does not count as opening a connection.
pub struct HttpCommerceClient {
    http: reqwest::Client,
    config: ClientConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct CheckpointObject {
    container: String,
    key: String,
    value: DateTime<Utc>,
}

impl HttpCommerceClient {
    /// Build from a config, creating a dedicated reqwest client.
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    /// Build on top of an existing reqwest client (shared pool).
    pub fn new(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.api_url.trim_end_matches('/'),
            self.config.project_key,
            path
        )
    }

    /// Map non-success statuses to typed errors; 502 gets its own variant.
    async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status == StatusCode::BAD_GATEWAY {
            let url = response.url().to_string();
            return Err(ClientError::BadGateway(url));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

fn endpoint(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::ProductType => "product-types",
        ResourceKind::Type => "types",
        ResourceKind::Category => "categories",
        ResourceKind::Product => "products",
        ResourceKind::InventoryEntry => "inventory-entries",
    }
}

#[async_trait]
impl CommerceClient for HttpCommerceClient {
    async fn execute(&self, query: ResourceQuery) -> Result<ResourcePage, ClientError> {
        let mut request = self
            .http
            .get(self.url(endpoint(query.kind)))
            .bearer_auth(&self.config.api_token)
            .query(&[
                ("offset", query.offset.to_string()),
                ("limit", query.limit.to_string()),
            ]);
        if let Some(since) = query.modified_since {
            request = request.query(&[("modifiedSince", since.to_rfc3339())]);
        }

        let response = Self::checked(request.send().await?).await?;
        Ok(response.json::<ResourcePage>().await?)
    }

    async fn apply(&self, batch: UpsertBatch) -> Result<ApplyOutcome, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("{}/batch", endpoint(batch.kind))))
            .bearer_auth(&self.config.api_token)
            .json(&batch.drafts)
            .send()
            .await?;
        let response = Self::checked(response).await?;
        Ok(response.json::<ApplyOutcome>().await?)
    }

    async fn checkpoint(&self, kind: ResourceKind) -> Result<Option<DateTime<Utc>>, ClientError> {
        let response = self
            .http
            .get(self.url(&format!(
                "custom-objects/{CHECKPOINT_CONTAINER}/{}",
                kind.selector()
            )))
            .bearer_auth(&self.config.api_token)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::checked(response).await?;
        let object = response.json::<CheckpointObject>().await?;
        Ok(Some(object.value))
    }

    async fn record_checkpoint(
        &self,
        kind: ResourceKind,
        at: DateTime<Utc>,
    ) -> Result<(), ClientError> {
        let object = CheckpointObject {
            container: CHECKPOINT_CONTAINER.to_string(),
            key: kind.selector().to_string(),
            value: at,
        };
        let response = self
            .http
            .post(self.url("custom-objects"))
            .bearer_auth(&self.config.api_token)
            .json(&object)
            .send()
            .await?;
        Self::checked(response).await?;
        Ok(())
    }

    async fn close(&self) {
        // The pool drains on drop; this is the lifecycle hook the factory
        // invokes exactly once per run.
        tracing::debug!(project = %self.config.project_key, "closing client");
    }
}
