// Data source queries issued by panels

use serde::{Deserialize, Serialize};

use crate::domain::field::nullable;

/// Capability shared by every query shape: which data source it targets.
pub trait QueryTarget {
    /// Data source name, empty when the query relies on the panel default.
    fn datasource(&self) -> &str;

    fn set_datasource(&mut self, datasource: String);
}

/// Prometheus query, recognised on the wire by `expr` plus `intervalFactor`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrometheusQuery {
    #[serde(rename = "expr")]
    #[serde(deserialize_with = "nullable")]
    pub expression: String,
    #[serde(deserialize_with = "nullable")]
    pub format: String,
    #[serde(deserialize_with = "nullable")]
    pub instant: bool,
    #[serde(deserialize_with = "nullable")]
    pub interval: String,
    #[serde(deserialize_with = "nullable")]
    pub interval_factor: u32,
    #[serde(deserialize_with = "nullable")]
    pub legend_format: String,
    #[serde(deserialize_with = "nullable")]
    pub step: u32,
    #[serde(deserialize_with = "nullable")]
    pub hide: bool,

    #[serde(skip)]
    datasource: String,
}

impl PrometheusQuery {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            format: "time_series".to_string(),
            interval_factor: 2,
            ..Self::default()
        }
    }

    pub fn with_datasource(mut self, datasource: impl Into<String>) -> Self {
        self.datasource = datasource.into();
        self
    }
}

impl QueryTarget for PrometheusQuery {
    fn datasource(&self) -> &str {
        &self.datasource
    }

    fn set_datasource(&mut self, datasource: String) {
        self.datasource = datasource;
    }
}

/// Graphite query, recognised on the wire by `target`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphiteQuery {
    #[serde(deserialize_with = "nullable")]
    pub target: String,
    #[serde(deserialize_with = "nullable")]
    pub hide: bool,

    #[serde(skip)]
    datasource: String,
}

impl GraphiteQuery {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_datasource(mut self, datasource: impl Into<String>) -> Self {
        self.datasource = datasource.into();
        self
    }
}

impl QueryTarget for GraphiteQuery {
    fn datasource(&self) -> &str {
        &self.datasource
    }

    fn set_datasource(&mut self, datasource: String) {
        self.datasource = datasource;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Prometheus(PrometheusQuery),
    Graphite(GraphiteQuery),
}

impl QueryTarget for Query {
    fn datasource(&self) -> &str {
        match self {
            Query::Prometheus(q) => q.datasource(),
            Query::Graphite(q) => q.datasource(),
        }
    }

    fn set_datasource(&mut self, datasource: String) {
        match self {
            Query::Prometheus(q) => q.set_datasource(datasource),
            Query::Graphite(q) => q.set_datasource(datasource),
        }
    }
}

impl From<PrometheusQuery> for Query {
    fn from(query: PrometheusQuery) -> Self {
        Query::Prometheus(query)
    }
}

impl From<GraphiteQuery> for Query {
    fn from(query: GraphiteQuery) -> Self {
        Query::Graphite(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasource_is_not_a_variant_field() {
        let query = PrometheusQuery::new("up").with_datasource("prom");
        let value = serde_json::to_value(&query).unwrap();

        assert!(value.get("datasource").is_none());
        assert_eq!(value["expr"], "up");
        assert_eq!(value["intervalFactor"], 2);
    }

    #[test]
    fn test_enum_delegates_datasource() {
        let mut query = Query::from(GraphiteQuery::new("a.b.c").with_datasource("graphite"));
        assert_eq!(query.datasource(), "graphite");

        query.set_datasource("other".to_string());
        assert_eq!(query.datasource(), "other");
    }
}
