//! The configuration store port.
//!
//! A [`ConfigStore`] is a key-value service holding named records.  Each
//! record is a TOML table and is always replaced as a whole, so a reader
//! never observes half of a write.
//!
//! Implementations live in `infrastructure::storage`; the application layer
//! only ever sees this trait.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

/// A stored record: one TOML table.
pub type Record = toml::Table;

/// Error type for configuration store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing TOML document could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A record could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A stored record does not have the expected shape.
    #[error("record {name:?} is malformed: {source}")]
    Decode {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    /// A top-level entry exists but is not a table.
    #[error("record {0:?} is not a table")]
    NotATable(String),

    /// The store's internal lock was poisoned by a panicking writer.
    #[error("config store lock poisoned")]
    LockPoisoned,
}

/// Key-value persistence for named settings records.
///
/// # Contract
///
/// - `get` returns `Ok(None)` for a record that has never been written.
/// - `set` replaces the whole record atomically.  Concurrent `set` calls on
///   the same name are linearizable: the last one to complete wins.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Reads the record stored under `name`.
    fn get(&self, name: &str) -> Result<Option<Record>, StoreError>;

    /// Replaces the record stored under `name`.
    fn set(&self, name: &str, record: Record) -> Result<(), StoreError>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for Arc<S> {
    fn get(&self, name: &str) -> Result<Option<Record>, StoreError> {
        (**self).get(name)
    }

    fn set(&self, name: &str, record: Record) -> Result<(), StoreError> {
        (**self).set(name, record)
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn get(&self, name: &str) -> Result<Option<Record>, StoreError> {
        (**self).get(name)
    }

    fn set(&self, name: &str, record: Record) -> Result<(), StoreError> {
        (**self).set(name, record)
    }
}
