//! SettingsManager: load, validate and save the Feedbackify settings record.
//!
//! The manager is the only writer of the record.  Every write goes through
//! [`SettingsManager::save`], which runs the required-field check and the
//! domain validation rules first and refuses to touch the store if either
//! reports an error.
//!
//! # Request cycle (for beginners)
//!
//! ```text
//! UI displays form  ──►  load()          read current record (or defaults)
//! user submits      ──►  save(candidate)
//!                          ├─ check_required + validate
//!                          ├─ errors?  ──►  Err(SaveError::Invalid)  store untouched
//!                          └─ ok       ──►  ConfigStore::set         whole record replaced
//! ```
//!
//! The manager holds no state besides the store handle and caches nothing,
//! so two managers sharing one store always see the same record.

use feedbackify_core::{
    check_required, validate, FeedbackSettings, ValidationErrors, SETTINGS_NAME,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::config_store::{ConfigStore, StoreError};
use super::settings_record::{from_record, to_record};

/// Error type for [`SettingsManager::save`].
#[derive(Debug, Error)]
pub enum SaveError {
    /// The candidate failed validation; nothing was written.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),

    /// The candidate was valid but the store rejected the write.
    #[error("failed to persist settings: {0}")]
    Store(#[from] StoreError),
}

impl SaveError {
    /// Returns the field errors if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SaveError::Invalid(errors) => Some(errors),
            SaveError::Store(_) => None,
        }
    }
}

/// Mediates all reads and writes of the [`FeedbackSettings`] record.
///
/// Generic over the store so tests can inject an in-memory or mock store and
/// production code a file-backed one.
pub struct SettingsManager<S> {
    store: S,
}

impl<S: ConfigStore> SettingsManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the current settings.
    ///
    /// A record that has never been saved yields [`FeedbackSettings::default`].
    ///
    /// # Errors
    ///
    /// Propagates store read failures and [`StoreError::Decode`] for a record
    /// whose contents cannot be interpreted.
    pub fn load(&self) -> Result<FeedbackSettings, StoreError> {
        match self.store.get(SETTINGS_NAME)? {
            Some(record) => {
                debug!(name = SETTINGS_NAME, "loaded settings record");
                from_record(SETTINGS_NAME, record)
            }
            None => {
                debug!(name = SETTINGS_NAME, "settings record not found, using defaults");
                Ok(FeedbackSettings::default())
            }
        }
    }

    /// Applies the domain validation rules to `candidate`.
    ///
    /// Only the button color format is checked here; see [`SettingsManager::save`]
    /// for the full set of checks applied before persisting.
    pub fn validate(&self, candidate: &FeedbackSettings) -> Result<(), ValidationErrors> {
        validate(candidate)
    }

    /// Validates `candidate` and, if it passes, replaces the stored record.
    ///
    /// Runs the required-field check and [`SettingsManager::validate`] and
    /// reports every error from both.
    ///
    /// # Errors
    ///
    /// - [`SaveError::Invalid`] if any check fails.  The store is not called.
    /// - [`SaveError::Store`] if encoding or writing the record fails.
    pub fn save(&self, candidate: &FeedbackSettings) -> Result<(), SaveError> {
        let checked = ValidationErrors::merge(check_required(candidate), self.validate(candidate));
        if let Err(errors) = checked {
            warn!(
                name = SETTINGS_NAME,
                error_count = errors.len(),
                "settings rejected: {errors}"
            );
            return Err(SaveError::Invalid(errors));
        }

        let record = to_record(SETTINGS_NAME, candidate)?;
        self.store.set(SETTINGS_NAME, record)?;

        info!(
            name = SETTINGS_NAME,
            position = ?candidate.button_position,
            visibility = %candidate.visibility_mode,
            "settings saved"
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
