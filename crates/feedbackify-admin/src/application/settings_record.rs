//! Mapping between [`FeedbackSettings`] and its stored record layout.
//!
//! The stored layout groups fields the same way the settings form does,
//! which keeps it compatible with records written by earlier installations:
//!
//! ```toml
//! feedbackify_id = "abc123"
//!
//! [confs]
//! feedbackify_color = "#237BAB"
//! feedbackify_position = "left"
//!
//! [advanced]
//! feedbackify_visibility = 0
//! feedbackify_pages = "blog\nblog/*"
//! ```
//!
//! `feedbackify_visibility` is written as the radio option index (`0` or
//! `1`).  On read, the symbolic keys `"allExceptListed"` / `"listedOnly"` and
//! the index as a string are accepted too.  Any missing key decodes to its
//! default.

use feedbackify_core::{ButtonPosition, FeedbackSettings, VisibilityMode};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::config_store::{Record, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct SettingsRecord {
    feedbackify_id: String,
    confs: Confs,
    advanced: Advanced,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Confs {
    feedbackify_color: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_position"
    )]
    feedbackify_position: Option<ButtonPosition>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Advanced {
    #[serde(
        serialize_with = "serialize_visibility",
        deserialize_with = "deserialize_visibility"
    )]
    feedbackify_visibility: VisibilityMode,
    feedbackify_pages: String,
}

/// An empty string means "no position selected".
fn deserialize_position<'de, D>(deserializer: D) -> Result<Option<ButtonPosition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(key) => key.parse().map(Some).map_err(de::Error::custom),
    }
}

fn serialize_visibility<S>(mode: &VisibilityMode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(i64::from(mode.index()))
}

fn deserialize_visibility<'de, D>(deserializer: D) -> Result<VisibilityMode, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Index(i64),
        Key(String),
    }

    match Stored::deserialize(deserializer)? {
        Stored::Index(index) => VisibilityMode::from_index(index)
            .ok_or_else(|| de::Error::custom(format!("unknown visibility index {index}"))),
        Stored::Key(key) if key.is_empty() => Ok(VisibilityMode::default()),
        Stored::Key(key) => key.parse().map_err(de::Error::custom),
    }
}

impl From<&FeedbackSettings> for SettingsRecord {
    fn from(s: &FeedbackSettings) -> Self {
        Self {
            feedbackify_id: s.feedbackify_id.clone(),
            confs: Confs {
                feedbackify_color: s.button_color.clone(),
                feedbackify_position: s.button_position,
            },
            advanced: Advanced {
                feedbackify_visibility: s.visibility_mode,
                feedbackify_pages: s.visibility_pages.clone(),
            },
        }
    }
}

impl From<SettingsRecord> for FeedbackSettings {
    fn from(r: SettingsRecord) -> Self {
        Self {
            feedbackify_id: r.feedbackify_id,
            button_color: r.confs.feedbackify_color,
            button_position: r.confs.feedbackify_position,
            visibility_mode: r.advanced.feedbackify_visibility,
            visibility_pages: r.advanced.feedbackify_pages,
        }
    }
}

/// Converts settings into the record stored under `name`.
///
/// # Errors
///
/// Returns [`StoreError::Serialize`] if TOML serialization fails, or
/// [`StoreError::NotATable`] if it does not produce a table.
pub fn to_record(name: &str, settings: &FeedbackSettings) -> Result<Record, StoreError> {
    match toml::Value::try_from(SettingsRecord::from(settings))? {
        toml::Value::Table(table) => Ok(table),
        _ => Err(StoreError::NotATable(name.to_string())),
    }
}

/// Decodes the record stored under `name`.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] when a field has the wrong type or an
/// option key is not recognised.
pub fn from_record(name: &str, record: Record) -> Result<FeedbackSettings, StoreError> {
    toml::Value::Table(record)
        .try_into::<SettingsRecord>()
        .map(FeedbackSettings::from)
        .map_err(|source| StoreError::Decode {
            name: name.to_string(),
            source,
        })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
