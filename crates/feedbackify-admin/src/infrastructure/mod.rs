//! Infrastructure layer for the settings manager.
//!
//! Contains the OS-facing adapters: file-system and in-memory configuration
//! stores, and the UI command bridge used by the host admin UI and the CLI.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `feedbackify_core`, but MUST NOT be imported by the `application` or
//! domain layers.

pub mod storage;
pub mod ui_bridge;
