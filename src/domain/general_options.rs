// Options shared by every panel variant
use serde::{Deserialize, Serialize};

use crate::domain::field::nullable;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralOptions {
    #[serde(deserialize_with = "nullable")]
    pub id: u32,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub height: String,
    #[serde(deserialize_with = "nullable")]
    pub links: Vec<PanelLink>,
    #[serde(deserialize_with = "nullable")]
    pub min_span: f64,
    #[serde(deserialize_with = "nullable")]
    pub span: f64,
    #[serde(deserialize_with = "nullable")]
    pub transparent: bool,
}

/// Drilldown link attached to a panel header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelLink {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub link_type: String,
    #[serde(deserialize_with = "nullable")]
    pub target_blank: bool,
}
