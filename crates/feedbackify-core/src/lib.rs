//! # feedbackify-core
//!
//! Domain types for the Feedbackify widget settings: the persisted
//! [`FeedbackSettings`] record, its option enums, and the validation rules
//! applied before a record may be stored.
//!
//! This crate has no dependencies on storage, UI frameworks, or async
//! runtimes.  The admin crate wires it to a configuration store and to the
//! host UI.
//!
//! # Architecture overview (for beginners)
//!
//! Feedbackify is a hosted feedback form.  A site shows a small "Feedback"
//! button that opens the hosted form.  An administrator decides which hosted
//! form to use (the form ID), how the button looks (color, side of the page),
//! and on which pages it appears.
//!
//! All of that fits in one flat record with five fields.  This crate defines:
//!
//! - **`domain::settings`** – the record itself and the two option enums
//!   ([`ButtonPosition`], [`VisibilityMode`]).
//!
//! - **`domain::validation`** – the rules a record must satisfy before it is
//!   persisted, and the field-scoped error types returned when it does not.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `feedbackify_core::FeedbackSettings` instead of the full module path.
pub use domain::settings::{
    ButtonPosition, FeedbackSettings, ParseOptionError, VisibilityMode, SETTINGS_NAME,
};
pub use domain::validation::{
    check_required, is_valid_hex_color, validate, FieldError, FieldErrorKind, ValidationErrors,
    FIELD_BUTTON_COLOR, FIELD_BUTTON_POSITION, FIELD_FEEDBACKIFY_ID, FIELD_VISIBILITY_MODE,
    FIELD_VISIBILITY_PAGES,
};
