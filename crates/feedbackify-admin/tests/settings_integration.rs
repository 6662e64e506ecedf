//! Integration tests for the settings workflow.
//!
//! These tests exercise feedbackify-admin end-to-end: `SettingsManager` and
//! the UI bridge on top of the real TOML file store in a temporary directory.

use std::sync::Arc;

use feedbackify_admin::application::config_store::ConfigStore;
use feedbackify_admin::application::manage_settings::{SaveError, SettingsManager};
use feedbackify_admin::infrastructure::storage::{InMemoryStore, TomlFileStore};
use feedbackify_admin::infrastructure::ui_bridge::{self, AppState, SettingsFormDto};
use feedbackify_core::{
    ButtonPosition, FeedbackSettings, FieldErrorKind, VisibilityMode, FIELD_BUTTON_COLOR,
    FIELD_FEEDBACKIFY_ID, SETTINGS_NAME,
};

fn blog_settings() -> FeedbackSettings {
    FeedbackSettings {
        feedbackify_id: "abc123".to_string(),
        button_color: "#237BAB".to_string(),
        button_position: Some(ButtonPosition::Left),
        visibility_mode: VisibilityMode::AllExceptListed,
        visibility_pages: "blog\nblog/*".to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_save_then_load_round_trips_through_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = SettingsManager::new(TomlFileStore::new(dir.path().join("settings.toml")));

    manager.save(&blog_settings()).expect("valid settings must save");

    assert_eq!(manager.load().expect("load"), blog_settings());
}

#[test]
fn test_settings_survive_reopening_the_store() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");

    SettingsManager::new(TomlFileStore::new(&path))
        .save(&blog_settings())
        .expect("save");

    // A fresh store on the same file sees the saved record.
    let reopened = SettingsManager::new(TomlFileStore::new(&path));
    assert_eq!(reopened.load().expect("load"), blog_settings());
}

#[test]
fn test_rejected_color_leaves_empty_store_untouched() {
    // Arrange
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let manager = SettingsManager::new(TomlFileStore::new(&path));
    let candidate = FeedbackSettings {
        button_color: "tomato".to_string(),
        ..blog_settings()
    };

    // Act
    let result = manager.save(&candidate);

    // Assert
    let errors = match result {
        Err(SaveError::Invalid(errors)) => errors,
        other => panic!("expected a validation failure, got {other:?}"),
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.errors()[0].field, FIELD_BUTTON_COLOR);
    assert_eq!(errors.errors()[0].kind, FieldErrorKind::InvalidColorFormat);
    assert!(!path.exists(), "a rejected save must not create the file");
    assert_eq!(manager.load().expect("load"), FeedbackSettings::default());
}

#[test]
fn test_rejected_save_keeps_previous_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = SettingsManager::new(TomlFileStore::new(dir.path().join("settings.toml")));
    manager.save(&blog_settings()).expect("first save");

    let bad = FeedbackSettings {
        feedbackify_id: String::new(),
        button_color: "#12345".to_string(),
        ..blog_settings()
    };
    let errors = manager.save(&bad).expect_err("must be rejected");

    let errors = errors.validation_errors().expect("validation failure");
    assert_eq!(errors.len(), 2, "missing id and bad color are reported together");
    assert_eq!(errors.for_field(FIELD_FEEDBACKIFY_ID).count(), 1);
    assert_eq!(manager.load().expect("load"), blog_settings());
}

#[test]
fn test_short_hex_color_is_accepted_and_stored_verbatim() {
    let manager = SettingsManager::new(InMemoryStore::new());
    let candidate = FeedbackSettings {
        button_color: "#ABC".to_string(),
        ..blog_settings()
    };

    manager.save(&candidate).expect("#ABC is a valid color");

    assert_eq!(manager.load().expect("load").button_color, "#ABC");
}

#[test]
fn test_saving_twice_is_the_same_as_saving_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let manager = SettingsManager::new(TomlFileStore::new(&path));

    manager.save(&blog_settings()).expect("first save");
    let after_first = std::fs::read_to_string(&path).expect("read");
    manager.save(&blog_settings()).expect("second save");
    let after_second = std::fs::read_to_string(&path).expect("read");

    assert_eq!(after_first, after_second);
}

#[test]
fn test_file_layout_stores_visibility_as_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let manager = SettingsManager::new(TomlFileStore::new(&path));
    let candidate = FeedbackSettings {
        visibility_mode: VisibilityMode::ListedOnly,
        ..blog_settings()
    };

    manager.save(&candidate).expect("save");

    let document: toml::Table = std::fs::read_to_string(&path)
        .expect("read")
        .parse()
        .expect("parse");
    let record = document[SETTINGS_NAME].as_table().expect("record table");
    assert_eq!(record["feedbackify_id"].as_str(), Some("abc123"));
    assert_eq!(record["confs"]["feedbackify_color"].as_str(), Some("#237BAB"));
    assert_eq!(record["confs"]["feedbackify_position"].as_str(), Some("left"));
    assert_eq!(record["advanced"]["feedbackify_visibility"].as_integer(), Some(1));
    assert_eq!(record["advanced"]["feedbackify_pages"].as_str(), Some("blog\nblog/*"));
}

#[test]
fn test_hand_written_file_with_symbolic_visibility_is_readable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
["feedbackify.settings"]
feedbackify_id = "xyz"

["feedbackify.settings".advanced]
feedbackify_visibility = "listedOnly"
feedbackify_pages = "<front>"
"#,
    )
    .expect("write");
    let manager = SettingsManager::new(TomlFileStore::new(&path));

    let loaded = manager.load().expect("load");

    assert_eq!(loaded.feedbackify_id, "xyz");
    assert_eq!(loaded.button_color, "");
    assert_eq!(loaded.button_position, None);
    assert_eq!(loaded.visibility_mode, VisibilityMode::ListedOnly);
    assert_eq!(loaded.visibility_pages, "<front>");
}

#[tokio::test]
async fn test_ui_bridge_submit_and_reload_through_file_store() {
    // Arrange
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let state = AppState::new(TomlFileStore::new(&path));
    let form = SettingsFormDto::from(&blog_settings());

    // Act
    let submitted = ui_bridge::submit_settings(Arc::clone(&state), form.clone()).await;
    let loaded = ui_bridge::get_settings(Arc::clone(&state)).await;

    // Assert
    assert!(submitted.success, "{:?}", submitted.error);
    assert_eq!(loaded.data, Some(form));
    assert!(state
        .settings
        .store()
        .get(SETTINGS_NAME)
        .expect("get")
        .is_some());
}

#[tokio::test]
async fn test_ui_bridge_reports_field_errors_as_json() {
    let state = AppState::new(InMemoryStore::new());
    let form = SettingsFormDto {
        button_color: "tomato".to_string(),
        ..SettingsFormDto::from(&blog_settings())
    };

    let result = ui_bridge::submit_settings(state, form).await;
    let json = serde_json::to_value(&result).expect("serialize");

    assert_eq!(json["success"], false);
    assert_eq!(json["field_errors"][0]["field"], FIELD_BUTTON_COLOR);
    assert_eq!(
        json["field_errors"][0]["message"],
        "Button color must be a hexadecimal color value like #237BAB, or left blank for transparent."
    );
}
