//! Alfred script-filter output: the item schema and the mapping from a
//! [`Resolution`](crate::shorthand::Resolution) to result rows.

use serde::Serialize;

mod items;

pub use items::items_for;


/// The full script-filter response.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Items {
    /// Result rows, in display order.
    pub items: Vec<Item>,
    /// Seconds after which Alfred re-runs the script, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerun: Option<f32>,
}

/// A single result row.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Item {
    /// Stable identifier Alfred uses to learn the user's preferences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Title displayed in the row.
    pub title: String,
    /// Secondary line displayed under the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Argument passed to the workflow's action, usually a URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    /// Custom icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// `true` if actionable; `false` means the row only fills in autocomplete text.
    pub valid: bool,
    /// Text inserted when the row is tab-completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
}

/// A custom icon for an item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Icon {
    /// Path to the icon file.
    pub path: String,
    /// `fileicon` or `filetype`, when the path should be interpreted.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Item {
    /// An actionable row opening `url`.
    #[must_use]
    pub fn open(title: String, url: &url::Url) -> Self {
        Self {
            uid: Some(url.to_string()),
            title,
            arg: Some(url.to_string()),
            valid: true,
            ..Self::default()
        }
    }

    /// A non-actionable hint row.
    #[must_use]
    pub fn hint(title: String, subtitle: Option<String>) -> Self {
        Self {
            title,
            subtitle,
            valid: false,
            ..Self::default()
        }
    }
}
