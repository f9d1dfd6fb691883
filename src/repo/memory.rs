use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::{HouseStore, StoreError};
use crate::domain::House;

/// Process-local store. Records are kept in their JSON wire form, so a read
/// returns exactly what a serialize/deserialize round trip produces.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HouseStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<House>, StoreError> {
        let records = self.records.read();
        records
            .get(id)
            .map(|json| {
                serde_json::from_str(json).map_err(|source| StoreError::Serialization {
                    id: id.to_string(),
                    source,
                })
            })
            .transpose()
    }

    async fn put(&self, id: &str, house: &House) -> Result<(), StoreError> {
        let json = serde_json::to_string(house).map_err(|source| StoreError::Serialization {
            id: id.to_string(),
            source,
        })?;
        let replaced = self.records.write().insert(id.to_string(), json).is_some();
        debug!(%id, replaced, "stored house");
        Ok(())
    }

    async fn insert(&self, house: &House) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.put(&id, house).await?;
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let removed = self.records.write().remove(id).is_some();
        debug!(%id, removed, "deleted house");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Improvement;

    fn sample() -> House {
        House {
            area: Some(142.5),
            floors: Some(2),
            construction_year: Some(1978),
            improvements: Some([Improvement::Geothermal].into()),
            data: Some("opaque".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryStore::new();
        store.put("a", &sample()).await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), Some(sample()));
        assert_eq!(store.get("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryStore::new();
        store.put("a", &sample()).await.unwrap();
        let updated = House { area: Some(90.0), ..sample() };
        store.put("a", &updated).await.unwrap();
        assert_eq!(store.records.read().len(), 1);
        assert_eq!(store.get("a").await.unwrap().and_then(|h| h.area), Some(90.0));
    }

    #[tokio::test]
    async fn test_insert_generates_uuid() {
        let store = MemoryStore::new();
        let first = store.insert(&sample()).await.unwrap();
        let second = store.insert(&sample()).await.unwrap();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
        assert_eq!(store.get(&first).await.unwrap(), Some(sample()));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store.put("a", &sample()).await.unwrap();
        store.delete("a").await.unwrap();
        store.delete("a").await.unwrap();
        assert!(store.records.read().is_empty());
        assert_eq!(store.get("a").await.unwrap(), None);
    }
}
