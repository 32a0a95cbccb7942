//! In-memory port implementations backing the router tests

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use crate::domain::{
    model::{SpaceField, SpaceRecord, StorageError, UpdatedField},
    ports::{IdGenerator, SpaceRepository},
};

/// A [SpaceRepository] over a shared hash map, mirroring the dynamodb semantics
#[derive(Debug, Clone, Default)]
pub struct InMemorySpaceRepository {
    records: Arc<Mutex<HashMap<String, SpaceRecord>>>,
}

impl InMemorySpaceRepository {
    /// Seed a repository with existing records
    pub fn with_records(records: impl IntoIterator<Item = SpaceRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    fn records(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, SpaceRecord>>, StorageError> {
        self.records
            .lock()
            .map_err(|_| StorageError::from(anyhow::anyhow!("in-memory store lock poisoned")))
    }

    /// Direct read of a stored record, bypassing the port
    pub fn stored(&self, id: &str) -> Option<SpaceRecord> {
        self.records().ok()?.get(id).cloned()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records().map(|records| records.len()).unwrap_or_default()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SpaceRepository for InMemorySpaceRepository {
    async fn list(&self) -> Result<Vec<SpaceRecord>, StorageError> {
        Ok(self.records()?.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<SpaceRecord>, StorageError> {
        Ok(self.records()?.get(id).cloned())
    }

    async fn create(&self, record: &SpaceRecord) -> Result<(), StorageError> {
        self.records()?.insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn update_field(
        &self,
        id: &str,
        field: SpaceField,
        value: &str,
    ) -> Result<UpdatedField, StorageError> {
        if !field.is_mutable() {
            return Err(anyhow::anyhow!("cannot update key attribute {field}").into());
        }

        let mut records = self.records()?;
        let record = records.entry(id.to_string()).or_insert_with(|| SpaceRecord {
            id: id.to_string(),
            location: String::new(),
            name: String::new(),
            description: None,
            photo_url: None,
        });
        record.set(field, value.to_string());

        Ok(UpdatedField {
            field,
            value: value.to_string(),
        })
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StorageError> {
        self.records()?.remove(id);
        Ok(())
    }
}

/// Hands out `space-1`, `space-2`, ... so tests can predict ids
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicUsize,
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("space-{n}")
    }
}
