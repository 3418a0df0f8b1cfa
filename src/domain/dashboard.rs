// Dashboard domain model
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::field::nullable;

pub const DEFAULT_SCHEMA_VERSION: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardStyle {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(deserialize_with = "nullable")]
    pub annotations: Annotations,
    #[serde(deserialize_with = "nullable")]
    pub editable: bool,
    #[serde(deserialize_with = "nullable")]
    pub graph_tooltip: u32,
    #[serde(deserialize_with = "nullable")]
    pub hide_controls: bool,
    #[serde(deserialize_with = "nullable")]
    pub links: Vec<Value>,
    pub refresh: Value,
    #[serde(deserialize_with = "nullable")]
    pub rows: Vec<DashboardRow>,
    #[serde(deserialize_with = "nullable")]
    pub schema_version: u32,
    #[serde(deserialize_with = "nullable")]
    pub style: DashboardStyle,
    #[serde(deserialize_with = "nullable")]
    tags: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub templating: Templating,
    #[serde(deserialize_with = "nullable")]
    pub time: TimeRange,
    #[serde(deserialize_with = "nullable")]
    pub timepicker: TimePicker,
    #[serde(deserialize_with = "nullable")]
    pub timezone: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<DashboardMeta>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            editable: true,
            schema_version: DEFAULT_SCHEMA_VERSION,
            style: DashboardStyle::Dark,
            ..Self::default()
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Replaces all tags, keeping the given order.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    /// Appends every tag not already present (exact, case-sensitive match).
    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Removes every occurrence of each given tag.
    pub fn remove_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let doomed: Vec<S> = tags.into_iter().collect();
        self.tags
            .retain(|tag| !doomed.iter().any(|old| old.as_ref() == tag.as_str()));
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    #[serde(deserialize_with = "nullable")]
    pub list: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Templating {
    #[serde(deserialize_with = "nullable")]
    pub list: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRange {
    #[serde(deserialize_with = "nullable")]
    pub from: String,
    #[serde(deserialize_with = "nullable")]
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePicker {
    #[serde(deserialize_with = "nullable")]
    pub refresh_intervals: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub time_options: Vec<String>,
}

/// Server-assigned metadata returned alongside a stored dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardMeta {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub meta_type: String,
    #[serde(deserialize_with = "nullable")]
    pub can_save: bool,
    #[serde(deserialize_with = "nullable")]
    pub can_edit: bool,
    #[serde(deserialize_with = "nullable")]
    pub can_admin: bool,
    #[serde(deserialize_with = "nullable")]
    pub can_star: bool,
    #[serde(deserialize_with = "nullable")]
    pub slug: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    pub expires: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "nullable")]
    pub updated_by: String,
    #[serde(deserialize_with = "nullable")]
    pub created_by: String,
    #[serde(deserialize_with = "nullable")]
    pub version: u64,
    #[serde(deserialize_with = "nullable")]
    pub has_acl: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_folder: bool,
    #[serde(deserialize_with = "nullable")]
    pub folder_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub folder_title: String,
    #[serde(deserialize_with = "nullable")]
    pub folder_url: String,
}

/// A row of panels. Panel slots stay raw JSON; typed access goes through the
/// panel codec.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardRow {
    #[serde(deserialize_with = "nullable")]
    pub collapse: bool,
    pub height: Value,
    #[serde(deserialize_with = "nullable")]
    pub panels: Vec<Value>,
    pub repeat: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub show_title: bool,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub title_size: String,
}
