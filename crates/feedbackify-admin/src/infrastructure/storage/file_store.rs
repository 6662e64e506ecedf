//! TOML-file-backed configuration store.
//!
//! All named records live in one TOML document, one top-level table per
//! record.  The default document is `settings.toml` in the platform config
//! directory:
//! - Windows:  `%APPDATA%\Feedbackify\settings.toml`
//! - Linux:    `~/.config/feedbackify/settings.toml`
//! - macOS:    `~/Library/Application Support/Feedbackify/settings.toml`
//!
//! ```toml
//! ["feedbackify.settings"]
//! feedbackify_id = "abc123"
//!
//! ["feedbackify.settings".confs]
//! feedbackify_color = "#237BAB"
//! feedbackify_position = "left"
//!
//! ["feedbackify.settings".advanced]
//! feedbackify_visibility = 0
//! feedbackify_pages = "blog"
//! ```
//!
//! # Atomic writes
//!
//! `set` writes the whole document to a uniquely named temp file in the same
//! directory and then renames it over the target, so a reader sees either the
//! old or the new document, never a truncated one.  A mutex serializes the
//! read-modify-write cycle within one [`TomlFileStore`].  Separate handles on
//! the same file each replace the whole document; the last rename wins.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::application::config_store::{ConfigStore, Record, StoreError};

/// File name of the settings document inside the config directory.
pub const STORE_FILE_NAME: &str = "settings.toml";

/// A [`ConfigStore`] persisted as a single TOML file.
#[derive(Debug)]
pub struct TomlFileStore {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl TomlFileStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file does not need to exist yet; it is created on the first `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    /// Creates a store at the platform default location.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoPlatformConfigDir`] when the platform config
    /// base directory cannot be determined from the environment.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(default_store_path()?))
    }

    /// Path of the backing TOML file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole document.  A missing file is an empty document.
    fn read_document(&self) -> Result<toml::Table, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.parse::<toml::Table>()?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(toml::Table::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_document(&self, document: &toml::Table) -> Result<(), StoreError> {
        let dir = match self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;

        let content = toml::to_string_pretty(document)?;

        // Temp file must live on the same file system as the target for the rename.
        let mut temp = NamedTempFile::new_in(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        temp.write_all(content.as_bytes())
            .and_then(|()| temp.as_file().sync_all())
            .map_err(|source| StoreError::Io {
                path: temp.path().to_path_buf(),
                source,
            })?;
        temp.persist(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e.error,
        })?;

        debug!(path = %self.path.display(), bytes = content.len(), "wrote config document");
        Ok(())
    }
}

impl ConfigStore for TomlFileStore {
    fn get(&self, name: &str) -> Result<Option<Record>, StoreError> {
        let _guard = self.io_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut document = self.read_document()?;

        match document.remove(name) {
            Some(toml::Value::Table(record)) => Ok(Some(record)),
            Some(_) => Err(StoreError::NotATable(name.to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, name: &str, record: Record) -> Result<(), StoreError> {
        let _guard = self.io_lock.lock().map_err(|_| StoreError::LockPoisoned)?;
        let mut document = self.read_document()?;

        document.insert(name.to_string(), toml::Value::Table(record));
        self.write_document(&document)
    }
}

// ── Platform paths ────────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the settings file.
///
/// # Errors
///
/// Returns [`StoreError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, StoreError> {
    platform_config_dir().ok_or(StoreError::NoPlatformConfigDir)
}

/// Resolves the full path to the default settings file.
///
/// # Errors
///
/// Returns [`StoreError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn default_store_path() -> Result<PathBuf, StoreError> {
    Ok(config_dir()?.join(STORE_FILE_NAME))
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Feedbackify"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("feedbackify"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Feedbackify")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
