use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::{config::StoreConfig, domain::House};

pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode or decode record {id}: {source}")]
    Serialization {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown store backend '{0}'")]
    UnknownBackend(String),
}

/// Keyed storage for house records.
#[async_trait]
pub trait HouseStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<House>, StoreError>;

    /// Store `house` under `id`, replacing any previous record.
    async fn put(&self, id: &str, house: &House) -> Result<(), StoreError>;

    /// Store `house` under a newly generated id and return that id.
    async fn insert(&self, house: &House) -> Result<String, StoreError>;

    /// Remove the record if present.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

pub fn from_config(cfg: &StoreConfig) -> Result<Arc<dyn HouseStore>, StoreError> {
    info!(backend = %cfg.backend, "using house store");
    match cfg.backend.as_str() {
        // "HashMap" is the name older deployments configured
        "memory" | "HashMap" => Ok(Arc::new(MemoryStore::new())),
        other => Err(StoreError::UnknownBackend(other.to_string())),
    }
}
