// Graph panel
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::field::{ForceString, nullable};
use crate::domain::general_options::GeneralOptions;
use crate::domain::panel::QueryablePanel;
use crate::domain::query::Query;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphPanel {
    #[serde(rename = "yaxes")]
    pub y_axes: GraphYaxesOptions,
    #[serde(rename = "xaxis")]
    #[serde(deserialize_with = "nullable")]
    pub x_axis: GraphXAxis,

    #[serde(skip)]
    pub general: GeneralOptions,
    #[serde(skip)]
    pub queries: Vec<Query>,
}

impl GraphPanel {
    pub fn new() -> Self {
        let axis = GraphYAxis {
            format: "short".to_string(),
            log_base: 1,
            show: true,
            ..GraphYAxis::default()
        };
        Self {
            y_axes: GraphYaxesOptions {
                left: axis.clone(),
                right: axis,
            },
            x_axis: GraphXAxis {
                show: true,
                ..GraphXAxis::default()
            },
            ..Self::default()
        }
    }
}

impl QueryablePanel for GraphPanel {
    fn queries(&self) -> &[Query] {
        &self.queries
    }

    fn queries_mut(&mut self) -> &mut Vec<Query> {
        &mut self.queries
    }
}

/// X axis mode. Unrecognised modes are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GraphXAxisMode {
    Histogram,
    Series,
    #[default]
    Time,
    Other(String),
}

impl From<String> for GraphXAxisMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "histogram" => GraphXAxisMode::Histogram,
            "series" => GraphXAxisMode::Series,
            "time" => GraphXAxisMode::Time,
            _ => GraphXAxisMode::Other(mode),
        }
    }
}

impl From<GraphXAxisMode> for String {
    fn from(mode: GraphXAxisMode) -> Self {
        match mode {
            GraphXAxisMode::Histogram => "histogram".to_string(),
            GraphXAxisMode::Series => "series".to_string(),
            GraphXAxisMode::Time => "time".to_string(),
            GraphXAxisMode::Other(mode) => mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphXAxis {
    pub buckets: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub mode: GraphXAxisMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub show: bool,
    #[serde(deserialize_with = "nullable")]
    pub values: Vec<String>,
}

/// Left and right Y axes, written as a two element array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphYaxesOptions {
    pub left: GraphYAxis,
    pub right: GraphYAxis,
}

impl Serialize for GraphYaxesOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [&self.left, &self.right].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GraphYaxesOptions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let axes = Vec::<GraphYAxis>::deserialize(deserializer)?;
        let count = axes.len();
        let [left, right]: [GraphYAxis; 2] = axes.try_into().map_err(|_| {
            D::Error::custom(format!("yaxes must contain exactly 2 axes, got {}", count))
        })?;
        Ok(Self { left, right })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphYAxis {
    #[serde(deserialize_with = "nullable")]
    pub format: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub label: String,
    #[serde(deserialize_with = "nullable")]
    pub log_base: u32,
    pub max: Option<ForceString>,
    pub min: Option<ForceString>,
    #[serde(deserialize_with = "nullable")]
    pub show: bool,
}
