//! Form schema: how the host UI should present the settings record.
//!
//! The schema is pure presentation metadata.  It describes five fields, the
//! widget each one uses, and the two collapsible groups they are shown in.
//! Rendering itself is up to the host UI; it only needs to honour the field
//! names so submitted values and returned [`FieldError`]s line up.
//!
//! [`FieldError`]: feedbackify_core::FieldError

use feedbackify_core::domain::validation::EXAMPLE_COLOR;
use feedbackify_core::{
    ButtonPosition, VisibilityMode, FIELD_BUTTON_COLOR, FIELD_BUTTON_POSITION,
    FIELD_FEEDBACKIFY_ID, FIELD_VISIBILITY_MODE, FIELD_VISIBILITY_PAGES,
};
use serde::Serialize;

/// Widget used to edit a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WidgetKind {
    /// Single-line text input.
    Text,
    /// Single-line text input holding a hex color.
    ColorText,
    /// Drop-down with a fixed option set.
    Select,
    /// Radio buttons with a fixed option set.
    Radios,
    /// Multi-line text area.
    Textarea,
}

/// A selectable option of a select or radios widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    /// Value submitted back in the form DTO.
    pub value: &'static str,
    pub label: &'static str,
}

/// A collapsible group of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldGroup {
    /// Button appearance ("Configurations").
    Confs,
    /// Page visibility rules ("Visibility").
    Advanced,
}

impl FieldGroup {
    pub fn title(self) -> &'static str {
        match self {
            FieldGroup::Confs => "Configurations",
            FieldGroup::Advanced => "Visibility",
        }
    }
}

/// Presentation description of one settings field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field name, identical to the DTO key and to `FieldError::field`.
    pub name: &'static str,
    pub label: &'static str,
    pub widget: WidgetKind,
    pub required: bool,
    /// `None` for fields shown above the groups.
    pub group: Option<FieldGroup>,
    /// Section heading of `group`, for the UI to render.
    pub group_title: Option<&'static str>,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

fn position_label(position: ButtonPosition) -> &'static str {
    match position {
        ButtonPosition::Left => "Left",
        ButtonPosition::Right => "Right",
    }
}

fn visibility_label(mode: VisibilityMode) -> &'static str {
    match mode {
        VisibilityMode::AllExceptListed => "On every page except the listed pages.",
        VisibilityMode::ListedOnly => "On the listed pages only.",
    }
}

/// Returns the five field descriptors in display order.
pub fn form_schema() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor {
            name: FIELD_FEEDBACKIFY_ID,
            label: "Feedbackify form ID",
            widget: WidgetKind::Text,
            required: true,
            group: None,
            group_title: None,
            description: None,
            options: Vec::new(),
        },
        FieldDescriptor {
            name: FIELD_BUTTON_COLOR,
            label: "Button color",
            widget: WidgetKind::ColorText,
            required: false,
            group: Some(FieldGroup::Confs),
            group_title: Some(FieldGroup::Confs.title()),
            description: Some(format!(
                "Please specify a hexadecimal color value like {EXAMPLE_COLOR}, or leave blank for transparent."
            )),
            options: Vec::new(),
        },
        FieldDescriptor {
            name: FIELD_BUTTON_POSITION,
            label: "Button Position",
            widget: WidgetKind::Select,
            required: false,
            group: Some(FieldGroup::Confs),
            group_title: Some(FieldGroup::Confs.title()),
            description: None,
            options: ButtonPosition::ALL
                .iter()
                .map(|p| FieldOption {
                    value: p.as_str(),
                    label: position_label(*p),
                })
                .collect(),
        },
        FieldDescriptor {
            name: FIELD_VISIBILITY_MODE,
            label: "Display Feedbackify button",
            widget: WidgetKind::Radios,
            required: false,
            group: Some(FieldGroup::Advanced),
            group_title: Some(FieldGroup::Advanced.title()),
            description: None,
            options: VisibilityMode::ALL
                .iter()
                .map(|m| FieldOption {
                    value: m.as_str(),
                    label: visibility_label(*m),
                })
                .collect(),
        },
        FieldDescriptor {
            name: FIELD_VISIBILITY_PAGES,
            label: "Pages",
            widget: WidgetKind::Textarea,
            required: false,
            group: Some(FieldGroup::Advanced),
            group_title: Some(FieldGroup::Advanced.title()),
            description: Some(
                "Enter one page per line as site paths. The '*' character is a wildcard. \
                 Example paths are blog for the blog page and blog/* for every personal blog. \
                 <front> is the front page."
                    .to_string(),
            ),
            options: Vec::new(),
        },
    ]
}
