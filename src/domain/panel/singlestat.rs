// Singlestat panel
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::field::nullable;
use crate::domain::general_options::GeneralOptions;
use crate::domain::panel::QueryablePanel;
use crate::domain::query::Query;

/// Operator written on every value-to-text mapping.
pub const EQUAL_SIGN_OP: &str = "=";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SinglestatPanel {
    // Value
    #[serde(deserialize_with = "nullable")]
    pub value_name: String,
    #[serde(deserialize_with = "nullable")]
    pub value_font_size: String,
    #[serde(deserialize_with = "nullable")]
    pub prefix: String,
    #[serde(deserialize_with = "nullable")]
    pub prefix_font_size: String,
    #[serde(deserialize_with = "nullable")]
    pub postfix: String,
    #[serde(deserialize_with = "nullable")]
    pub postfix_font_size: String,
    #[serde(deserialize_with = "nullable")]
    pub format: String,

    // Coloring
    #[serde(deserialize_with = "nullable")]
    pub color_background: bool,
    #[serde(deserialize_with = "nullable")]
    pub color_value: bool,
    /// Comma separated, e.g. "50,80".
    #[serde(deserialize_with = "nullable")]
    pub thresholds: String,
    #[serde(deserialize_with = "nullable")]
    pub colors: Vec<String>,

    #[serde(rename = "sparkline")]
    #[serde(deserialize_with = "nullable")]
    pub spark_line: SparkLine,
    #[serde(deserialize_with = "nullable")]
    pub gauge: Gauge,

    #[serde(flatten)]
    pub value_mappings: ValueMappings,
    #[serde(flatten)]
    pub time_range: TimeRangeOptions,

    #[serde(skip)]
    pub general: GeneralOptions,
    #[serde(skip)]
    pub queries: Vec<Query>,
}

impl SinglestatPanel {
    pub fn new() -> Self {
        Self {
            value_name: "avg".to_string(),
            value_font_size: "80%".to_string(),
            prefix_font_size: "50%".to_string(),
            postfix_font_size: "50%".to_string(),
            format: "none".to_string(),
            ..Self::default()
        }
    }
}

impl QueryablePanel for SinglestatPanel {
    fn queries(&self) -> &[Query] {
        &self.queries
    }

    fn queries_mut(&mut self) -> &mut Vec<Query> {
        &mut self.queries
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SparkLine {
    #[serde(deserialize_with = "nullable")]
    pub show: bool,
    #[serde(rename = "full")]
    #[serde(deserialize_with = "nullable")]
    pub full_height: bool,
    #[serde(deserialize_with = "nullable")]
    pub line_color: String,
    #[serde(deserialize_with = "nullable")]
    pub fill_color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Gauge {
    #[serde(deserialize_with = "nullable")]
    pub show: bool,
    #[serde(deserialize_with = "nullable")]
    pub max_value: i64,
    #[serde(deserialize_with = "nullable")]
    pub min_value: i64,
    #[serde(deserialize_with = "nullable")]
    pub threshold_labels: bool,
    #[serde(deserialize_with = "nullable")]
    pub threshold_markers: bool,
}

/// Numeric `mappingType`. Unrecognised numbers are kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub enum ValueMappingType {
    #[default]
    Unset,
    ValueToText,
    RangeToText,
    Other(u64),
}

impl From<u64> for ValueMappingType {
    fn from(value: u64) -> Self {
        match value {
            0 => ValueMappingType::Unset,
            1 => ValueMappingType::ValueToText,
            2 => ValueMappingType::RangeToText,
            other => ValueMappingType::Other(other),
        }
    }
}

impl From<ValueMappingType> for u64 {
    fn from(mapping_type: ValueMappingType) -> Self {
        match mapping_type {
            ValueMappingType::Unset => 0,
            ValueMappingType::ValueToText => 1,
            ValueMappingType::RangeToText => 2,
            ValueMappingType::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueMappings {
    #[serde(rename = "mappingType")]
    #[serde(deserialize_with = "nullable")]
    pub mapping_type: ValueMappingType,
    #[serde(rename = "valueMaps")]
    #[serde(deserialize_with = "nullable")]
    pub value_to_text: Vec<ValueToTextMapping>,
    #[serde(rename = "rangeMaps")]
    #[serde(deserialize_with = "nullable")]
    pub range_to_text: Vec<RangeToTextMapping>,
}

/// Maps one exact value to display text. The `op` key is write-only.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ValueToTextMapping {
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(deserialize_with = "nullable")]
    pub value: String,
}

impl Serialize for ValueToTextMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            op: &'static str,
            text: &'a str,
            value: &'a str,
        }

        Wire {
            op: EQUAL_SIGN_OP,
            text: &self.text,
            value: &self.value,
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeToTextMapping {
    #[serde(deserialize_with = "nullable")]
    pub from: String,
    #[serde(deserialize_with = "nullable")]
    pub to: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

/// Per-panel override of the dashboard time range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeRangeOptions {
    pub time_from: Option<String>,
    pub time_shift: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub hide_time_override: bool,
}
