//! Application layer for the Feedbackify admin.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure business rules in `feedbackify-core`) and the infrastructure
//! (files, UI bridge).
//!
//! Code in this layer:
//!
//! - **Orchestrates** domain rules to fulfil a user goal ("save these
//!   settings if they are valid").
//! - **Depends on abstractions** (the [`config_store::ConfigStore`] trait)
//!   rather than on a concrete file format, so storage can be swapped without
//!   touching this code.
//! - **Performs no file system access** itself.
//!
//! # Sub-modules
//!
//! - **`config_store`**     – The key-value store port and its error type.
//! - **`settings_record`**  – Mapping between [`feedbackify_core::FeedbackSettings`]
//!   and the record layout kept in the store.
//! - **`manage_settings`**  – [`manage_settings::SettingsManager`]: load,
//!   validate and save the settings record.

pub mod config_store;
pub mod manage_settings;
pub mod settings_record;
