//! UI command bridge: exposes the settings manager to the host admin UI.
//!
//! Every command is an `async fn` taking the shared [`AppState`].  The host UI
//! (a web admin page, a desktop shell, or the CLI in `main.rs`) calls these
//! and gets back a JSON-serialisable [`CommandResult`].
//!
//! # Data Transfer Objects (DTOs)
//!
//! [`SettingsFormDto`] carries the five fields as plain strings, exactly as a
//! form submits them.  Converting it to the domain record is where select and
//! radio values are checked against their option sets; unknown values become
//! [`FieldErrorKind::InvalidOption`] errors on the offending field.
//!
//! # `CommandResult<T>` wrapper
//!
//! All commands return the same shape:
//! `{ success: bool, data: T | null, error: string | null, field_errors: [...] }`.
//! `field_errors` is filled for validation failures so the UI can show each
//! message next to its field and redisplay the submitted values.
//!
//! # Blocking I/O
//!
//! Store access may hit the file system, so it runs on Tokio's blocking pool
//! via [`tokio::task::spawn_blocking`] rather than on the async worker threads.

pub mod form;

use std::sync::Arc;

use feedbackify_core::{
    check_required, ButtonPosition, FeedbackSettings, FieldError, FieldErrorKind,
    ValidationErrors, VisibilityMode, FIELD_BUTTON_POSITION, FIELD_VISIBILITY_MODE,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::application::config_store::ConfigStore;
use crate::application::manage_settings::{SaveError, SettingsManager};
use form::{form_schema, FieldDescriptor};

// ── Shared application state ──────────────────────────────────────────────────

/// State shared by all commands.
///
/// Wrapped in `Arc<>` so it can be moved into blocking tasks.  The manager
/// itself holds no mutable state; concurrent writes are ordered by the store.
pub struct AppState {
    pub settings: SettingsManager<Box<dyn ConfigStore>>,
}

impl AppState {
    /// Creates the shared state around the given configuration store.
    pub fn new(store: impl ConfigStore + 'static) -> Arc<Self> {
        let store: Box<dyn ConfigStore> = Box::new(store);
        Arc::new(Self {
            settings: SettingsManager::new(store),
        })
    }
}

// ── Data Transfer Objects ─────────────────────────────────────────────────────

/// The settings form as submitted by, and returned to, the UI.
///
/// `button_position` is `""`, `"left"` or `"right"`.  `visibility_mode` is
/// `"allExceptListed"` or `"listedOnly"`; an empty value means the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsFormDto {
    pub feedbackify_id: String,
    pub button_color: String,
    pub button_position: String,
    pub visibility_mode: String,
    pub visibility_pages: String,
}

impl From<&FeedbackSettings> for SettingsFormDto {
    fn from(s: &FeedbackSettings) -> Self {
        Self {
            feedbackify_id: s.feedbackify_id.clone(),
            button_color: s.button_color.clone(),
            button_position: s
                .button_position
                .map(|p| p.as_str().to_string())
                .unwrap_or_default(),
            visibility_mode: s.visibility_mode.as_str().to_string(),
            visibility_pages: s.visibility_pages.clone(),
        }
    }
}

impl SettingsFormDto {
    /// Converts the DTO into a candidate record.
    ///
    /// Always returns a candidate; an unknown option value is replaced by
    /// its unset/default value and reported in the second element.
    pub fn into_candidate(self) -> (FeedbackSettings, Result<(), ValidationErrors>) {
        let mut errors = Vec::new();

        let button_position = match self.button_position.as_str() {
            "" => None,
            key => match key.parse::<ButtonPosition>() {
                Ok(position) => Some(position),
                Err(e) => {
                    errors.push(FieldError::new(
                        FIELD_BUTTON_POSITION,
                        FieldErrorKind::InvalidOption,
                        format!("An illegal choice has been detected: {e}."),
                    ));
                    None
                }
            },
        };

        let visibility_mode = match self.visibility_mode.as_str() {
            "" => VisibilityMode::default(),
            key => key.parse::<VisibilityMode>().unwrap_or_else(|e| {
                errors.push(FieldError::new(
                    FIELD_VISIBILITY_MODE,
                    FieldErrorKind::InvalidOption,
                    format!("An illegal choice has been detected: {e}."),
                ));
                VisibilityMode::default()
            }),
        };

        let candidate = FeedbackSettings {
            feedbackify_id: self.feedbackify_id,
            button_color: self.button_color,
            button_position,
            visibility_mode,
            visibility_pages: self.visibility_pages,
        };
        (candidate, ValidationErrors::from_errors(errors))
    }
}

/// Unified response wrapper used by every command.
#[derive(Debug, Serialize)]
pub struct CommandResult<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub field_errors: Vec<FieldError>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            field_errors: Vec::new(),
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
            field_errors: Vec::new(),
        }
    }

    /// A validation failure with one entry per offending field.
    pub fn invalid(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            data: None,
            error: Some("The settings contain errors.".to_string()),
            field_errors: errors.into_errors(),
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns the current settings for display.
///
/// # Example (frontend)
/// ```ts
/// const form = await invoke<SettingsFormDto>('get_settings');
/// ```
pub async fn get_settings(state: Arc<AppState>) -> CommandResult<SettingsFormDto> {
    match tokio::task::spawn_blocking(move || state.settings.load()).await {
        Ok(Ok(settings)) => CommandResult::ok(SettingsFormDto::from(&settings)),
        Ok(Err(e)) => {
            error!("failed to load settings: {e}");
            CommandResult::err(format!("failed to load settings: {e}"))
        }
        Err(e) => CommandResult::err(format!("settings task failed: {e}")),
    }
}

/// Runs the option, required-field and color checks on a converted form.
fn check_form(
    state: &AppState,
    candidate: &FeedbackSettings,
    option_check: Result<(), ValidationErrors>,
) -> Result<(), ValidationErrors> {
    ValidationErrors::merge(
        option_check,
        ValidationErrors::merge(check_required(candidate), state.settings.validate(candidate)),
    )
}

/// Checks a form without saving it.
///
/// Reports every failure, the same set [`submit_settings`] would reject.
pub async fn validate_settings(state: Arc<AppState>, form: SettingsFormDto) -> CommandResult<()> {
    let (candidate, option_check) = form.into_candidate();
    match check_form(&state, &candidate, option_check) {
        Ok(()) => CommandResult::ok(()),
        Err(errors) => CommandResult::invalid(errors),
    }
}

/// Validates and persists a submitted form.
///
/// On a validation failure nothing is written and `field_errors` lists every
/// offending field.
pub async fn submit_settings(state: Arc<AppState>, form: SettingsFormDto) -> CommandResult<()> {
    let (candidate, option_check) = form.into_candidate();
    if let Err(errors) = check_form(&state, &candidate, option_check) {
        return CommandResult::invalid(errors);
    }

    match tokio::task::spawn_blocking(move || state.settings.save(&candidate)).await {
        Ok(Ok(())) => CommandResult::ok(()),
        Ok(Err(SaveError::Invalid(errors))) => CommandResult::invalid(errors),
        Ok(Err(e @ SaveError::Store(_))) => {
            error!("{e}");
            CommandResult::err(e.to_string())
        }
        Err(e) => CommandResult::err(format!("settings task failed: {e}")),
    }
}

/// Returns the form schema the UI should render.
pub async fn get_form_schema() -> CommandResult<Vec<FieldDescriptor>> {
    CommandResult::ok(form_schema())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
