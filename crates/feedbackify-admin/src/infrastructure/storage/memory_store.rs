//! In-memory configuration store.
//!
//! Keeps records in a mutex-guarded map.  Used when embedding the settings
//! manager in a host that owns persistence itself, and in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::application::config_store::{ConfigStore, Record, StoreError};

/// A [`ConfigStore`] that lives only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<HashMap<String, Record>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one record.
    pub fn with_record(name: impl Into<String>, record: Record) -> Self {
        let mut records = HashMap::new();
        records.insert(name.into(), record);
        Self {
            records: Mutex::new(records),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> Result<usize, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl ConfigStore for InMemoryStore {
    fn get(&self, name: &str) -> Result<Option<Record>, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.get(name).cloned())
    }

    fn set(&self, name: &str, record: Record) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::LockPoisoned)?;
        records.insert(name.to_string(), record);
        Ok(())
    }
}
