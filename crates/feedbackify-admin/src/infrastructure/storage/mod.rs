//! Storage infrastructure: configuration store implementations.
//!
//! Both types implement the application layer's
//! [`ConfigStore`](crate::application::config_store::ConfigStore) port:
//!
//! - [`file_store::TomlFileStore`] – records kept in one TOML file in the
//!   platform config directory, written atomically.
//! - [`memory_store::InMemoryStore`] – records kept in process memory.
//!
//! Keeping storage concerns here means the file format can change without
//! touching the settings manager or the domain rules.

pub mod file_store;
pub mod memory_store;

pub use file_store::TomlFileStore;
pub use memory_store::InMemoryStore;
