//! Validation rules for [`FeedbackSettings`].
//!
//! Two independent checks exist:
//!
//! - [`validate`] – the domain rule: a non-empty button color must be a
//!   `#RGB` or `#RRGGBB` hexadecimal value.
//! - [`check_required`] – the form contract: the Feedbackify form ID must
//!   not be empty (whitespace-only counts as empty).
//!
//! Both return every applicable [`FieldError`] rather than stopping at the
//! first one, so a UI can mark all offending fields in a single round trip.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::settings::FeedbackSettings;

/// Field name of [`FeedbackSettings::feedbackify_id`] as reported in errors.
pub const FIELD_FEEDBACKIFY_ID: &str = "feedbackifyId";
/// Field name of [`FeedbackSettings::button_color`].
pub const FIELD_BUTTON_COLOR: &str = "buttonColor";
/// Field name of [`FeedbackSettings::button_position`].
pub const FIELD_BUTTON_POSITION: &str = "buttonPosition";
/// Field name of [`FeedbackSettings::visibility_mode`].
pub const FIELD_VISIBILITY_MODE: &str = "visibilityMode";
/// Field name of [`FeedbackSettings::visibility_pages`].
pub const FIELD_VISIBILITY_PAGES: &str = "visibilityPages";

/// Example color quoted in user-facing messages.
pub const EXAMPLE_COLOR: &str = "#237BAB";

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{3}([0-9a-fA-F]{3})?$").unwrap());

/// Category of a field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldErrorKind {
    /// A required field was left empty.
    Required,
    /// The button color is not a `#RGB` / `#RRGGBB` value.
    InvalidColorFormat,
    /// A select/radio value is not one of the offered options.
    InvalidOption,
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field (e.g. [`FIELD_BUTTON_COLOR`]).
    pub field: String,
    /// Which rule the value broke.
    pub kind: FieldErrorKind,
    /// Human-readable message suitable for showing next to the field.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    fn invalid_color() -> Self {
        Self::new(
            FIELD_BUTTON_COLOR,
            FieldErrorKind::InvalidColorFormat,
            format!(
                "Button color must be a hexadecimal color value like {EXAMPLE_COLOR}, or left blank for transparent."
            ),
        )
    }

    fn required_id() -> Self {
        Self::new(
            FIELD_FEEDBACKIFY_ID,
            FieldErrorKind::Required,
            "Feedbackify form ID field is required.",
        )
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A non-empty set of field errors.
///
/// Constructed only through [`ValidationErrors::from_errors`], which refuses
/// an empty list, so holding a `ValidationErrors` always means "rejected".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("settings rejected: {}", join_messages(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Returns `Ok(())` for an empty list, `Err(ValidationErrors)` otherwise.
    pub fn from_errors(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Combines two validation outcomes, keeping every error from both.
    pub fn merge(
        first: Result<(), ValidationErrors>,
        second: Result<(), ValidationErrors>,
    ) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if let Err(ValidationErrors(e)) = first {
            errors.extend(e);
        }
        if let Err(ValidationErrors(e)) = second {
            errors.extend(e);
        }
        Self::from_errors(errors)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never `true` for a value built through [`ValidationErrors::from_errors`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the errors reported against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |e| e.field == field)
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Returns `true` if `color` is `#RGB` or `#RRGGBB` (hex digits, any case).
pub fn is_valid_hex_color(color: &str) -> bool {
    RE_HEX_COLOR.is_match(color)
}

/// Applies the domain validation rules to a candidate record.
///
/// Only the button color is checked; an empty color is accepted.  Position
/// and visibility mode are closed enums and the pages text is kept verbatim.
///
/// # Errors
///
/// Returns [`FieldErrorKind::InvalidColorFormat`] on [`FIELD_BUTTON_COLOR`]
/// when a non-empty color does not match.
pub fn validate(candidate: &FeedbackSettings) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if !candidate.button_color.is_empty() && !is_valid_hex_color(&candidate.button_color) {
        errors.push(FieldError::invalid_color());
    }

    ValidationErrors::from_errors(errors)
}

/// Checks that required fields are filled in.
///
/// # Errors
///
/// Returns [`FieldErrorKind::Required`] on [`FIELD_FEEDBACKIFY_ID`] when the
/// form ID is empty or whitespace-only.
pub fn check_required(candidate: &FeedbackSettings) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if candidate.feedbackify_id.trim().is_empty() {
        errors.push(FieldError::required_id());
    }

    ValidationErrors::from_errors(errors)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::{ButtonPosition, VisibilityMode};

    fn valid_settings() -> FeedbackSettings {
        FeedbackSettings {
            feedbackify_id: "abc123".to_string(),
            button_color: String::new(),
            button_position: Some(ButtonPosition::Right),
            visibility_mode: VisibilityMode::AllExceptListed,
            visibility_pages: String::new(),
        }
    }

    fn with_color(color: &str) -> FeedbackSettings {
        FeedbackSettings {
            button_color: color.to_string(),
            ..valid_settings()
        }
    }

    // ── Color rule ────────────────────────────────────────────────────────────

    #[test]
    fn test_validate_accepts_six_digit_colors_in_any_case() {
        for color in ["#237BAB", "#237bab", "#000000", "#FFFFFF", "#aBcDeF"] {
            assert!(validate(&with_color(color)).is_ok(), "{color} should be valid");
        }
    }

    #[test]
    fn test_validate_accepts_three_digit_colors() {
        for color in ["#ABC", "#abc", "#000", "#f0F"] {
            assert!(validate(&with_color(color)).is_ok(), "{color} should be valid");
        }
    }

    #[test]
    fn test_validate_accepts_empty_color() {
        assert!(validate(&with_color("")).is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_colors_with_one_error() {
        let rejected = [
            "tomato", "237BAB", "#23", "#2377", "#23BAB", "#237BABA", "#GGGGGG", " #237BAB",
            "#237BAB ", "#237BAB\n", "##ABC", "#", "rgb(0,0,0)",
        ];
        for color in rejected {
            // Act
            let err = validate(&with_color(color)).expect_err(color);

            // Assert
            assert_eq!(err.len(), 1, "{color:?} should produce exactly one error");
            let only = &err.errors()[0];
            assert_eq!(only.field, FIELD_BUTTON_COLOR);
            assert_eq!(only.kind, FieldErrorKind::InvalidColorFormat);
        }
    }

    #[test]
    fn test_invalid_color_message_names_example_value() {
        let err = validate(&with_color("tomato")).unwrap_err();
        assert!(err.errors()[0].message.contains(EXAMPLE_COLOR));
    }

    #[test]
    fn test_validate_ignores_missing_id() {
        // The required check is separate from the domain rule.
        let candidate = FeedbackSettings {
            feedbackify_id: String::new(),
            ..valid_settings()
        };
        assert!(validate(&candidate).is_ok());
    }

    #[test]
    fn test_validate_accepts_arbitrary_pages_text() {
        let candidate = FeedbackSettings {
            visibility_pages: "blog\nblog/*\n<front>\n\n  spaced  ".to_string(),
            ..valid_settings()
        };
        assert!(validate(&candidate).is_ok());
    }

    // ── Required check ────────────────────────────────────────────────────────

    #[test]
    fn test_check_required_rejects_empty_id() {
        let candidate = FeedbackSettings {
            feedbackify_id: String::new(),
            ..valid_settings()
        };
        let err = check_required(&candidate).unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].field, FIELD_FEEDBACKIFY_ID);
        assert_eq!(err.errors()[0].kind, FieldErrorKind::Required);
    }

    #[test]
    fn test_check_required_rejects_whitespace_only_id() {
        let candidate = FeedbackSettings {
            feedbackify_id: " \t\n".to_string(),
            ..valid_settings()
        };
        assert!(check_required(&candidate).is_err());
    }

    #[test]
    fn test_check_required_accepts_present_id() {
        assert!(check_required(&valid_settings()).is_ok());
    }

    // ── ValidationErrors ──────────────────────────────────────────────────────

    #[test]
    fn test_merge_keeps_errors_from_both_checks() {
        // Arrange
        let candidate = FeedbackSettings {
            feedbackify_id: String::new(),
            button_color: "tomato".to_string(),
            ..valid_settings()
        };

        // Act
        let merged = ValidationErrors::merge(check_required(&candidate), validate(&candidate));

        // Assert
        let err = merged.unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.for_field(FIELD_FEEDBACKIFY_ID).count(), 1);
        assert_eq!(err.for_field(FIELD_BUTTON_COLOR).count(), 1);
    }

    #[test]
    fn test_merge_of_two_successes_is_ok() {
        assert!(ValidationErrors::merge(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_from_errors_with_empty_list_is_ok() {
        assert!(ValidationErrors::from_errors(Vec::new()).is_ok());
    }

    #[test]
    fn test_validation_errors_display_lists_fields() {
        let err = validate(&with_color("tomato")).unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("settings rejected: buttonColor: "));
    }
}
