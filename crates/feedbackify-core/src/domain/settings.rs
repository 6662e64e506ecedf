//! The Feedbackify settings record.
//!
//! There is exactly one [`FeedbackSettings`] record per installation, stored
//! under the fixed name [`SETTINGS_NAME`].  Unset fields are represented as
//! empty strings (text fields), `None` (button position) or the default
//! [`VisibilityMode::AllExceptListed`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration record in the configuration store.
pub const SETTINGS_NAME: &str = "feedbackify.settings";

/// Error returned when an option key does not name a known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {option} option: {value:?}")]
pub struct ParseOptionError {
    /// Which option set was being parsed (`"button position"`, `"visibility mode"`).
    pub option: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Which side of the page the feedback button is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPosition {
    Left,
    Right,
}

impl ButtonPosition {
    /// All options in display order.
    pub const ALL: [ButtonPosition; 2] = [ButtonPosition::Left, ButtonPosition::Right];

    /// The stored option key (`"left"` / `"right"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ButtonPosition::Left => "left",
            ButtonPosition::Right => "right",
        }
    }
}

impl fmt::Display for ButtonPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonPosition {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(ButtonPosition::Left),
            "right" => Ok(ButtonPosition::Right),
            other => Err(ParseOptionError {
                option: "button position",
                value: other.to_string(),
            }),
        }
    }
}

/// Page-visibility policy for the feedback button.
///
/// The list of pages itself lives in [`FeedbackSettings::visibility_pages`];
/// matching a request path against it is done by the page renderer, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisibilityMode {
    /// Show the button on every page except the listed ones.
    #[default]
    AllExceptListed,
    /// Show the button on the listed pages only.
    ListedOnly,
}

impl VisibilityMode {
    /// All options in display order.  The position in this array is the
    /// option index used by the persisted record.
    pub const ALL: [VisibilityMode; 2] = [VisibilityMode::AllExceptListed, VisibilityMode::ListedOnly];

    /// The symbolic option key (`"allExceptListed"` / `"listedOnly"`).
    pub fn as_str(self) -> &'static str {
        match self {
            VisibilityMode::AllExceptListed => "allExceptListed",
            VisibilityMode::ListedOnly => "listedOnly",
        }
    }

    /// Radio option index: `0` for all-except-listed, `1` for listed-only.
    pub fn index(self) -> u8 {
        match self {
            VisibilityMode::AllExceptListed => 0,
            VisibilityMode::ListedOnly => 1,
        }
    }

    /// Inverse of [`VisibilityMode::index`].
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(VisibilityMode::AllExceptListed),
            1 => Some(VisibilityMode::ListedOnly),
            _ => None,
        }
    }
}

impl fmt::Display for VisibilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisibilityMode {
    type Err = ParseOptionError;

    /// Accepts the symbolic key or the option index as a string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allExceptListed" | "0" => Ok(VisibilityMode::AllExceptListed),
            "listedOnly" | "1" => Ok(VisibilityMode::ListedOnly),
            other => Err(ParseOptionError {
                option: "visibility mode",
                value: other.to_string(),
            }),
        }
    }
}

/// The persisted Feedbackify configuration record.
///
/// `Default` yields the first-access state: every text field empty, no
/// button position, and [`VisibilityMode::AllExceptListed`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackSettings {
    /// Identifier of the hosted Feedbackify form.  Required.
    pub feedbackify_id: String,
    /// Button color as `#RGB` or `#RRGGBB`; empty means transparent.
    pub button_color: String,
    /// Side of the page the button is attached to.
    pub button_position: Option<ButtonPosition>,
    /// Whether `visibility_pages` is a deny-list or an allow-list.
    pub visibility_mode: VisibilityMode,
    /// One page pattern per line, kept verbatim.
    pub visibility_pages: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
