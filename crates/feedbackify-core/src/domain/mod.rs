//! Domain entities for the Feedbackify settings.
//!
//! This module contains pure business rules with no infrastructure
//! dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of a Clean Architecture codebase is the **domain**.
//! Domain code:
//!
//! - Describes the data the application is about (here: one settings record).
//! - States the rules that data must obey (here: the color format and the
//!   required form ID).
//! - Never reads files, talks to a network, or renders anything.
//!
//! Outer layers (application, infrastructure, UI) depend on the domain, but
//! the domain never depends on them, so every rule here can be unit-tested
//! without any setup.

/// The persisted settings record and its option enums.
pub mod settings;

/// Field validation rules and the errors they produce.
pub mod validation;
