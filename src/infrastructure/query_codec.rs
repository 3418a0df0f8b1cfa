// Query codec - heuristic variant detection and reference id synthesis
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::query::{GraphiteQuery, PrometheusQuery, Query, QueryTarget};
use crate::infrastructure::error::CodecError;

/// Panel-level datasource written when queries target different sources.
pub const MIXED_DATASOURCE: &str = "-- Mixed --";

const REF_ID_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Where datasource names are written when a panel's queries are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasourcePlacement {
    /// One name hoisted to the panel, none on the queries.
    Shared,
    /// Every query carries its own name, the panel is marked mixed.
    PerQuery,
}

impl DatasourcePlacement {
    pub fn for_queries(queries: &[Query]) -> Self {
        let mixed = queries
            .windows(2)
            .any(|pair| pair[0].datasource() != pair[1].datasource());
        if mixed {
            DatasourcePlacement::PerQuery
        } else {
            DatasourcePlacement::Shared
        }
    }
}

/// Returns the spreadsheet-column style label for a query position:
/// 0 -> "A", 25 -> "Z", 26 -> "AA", 702 -> "AAA".
pub fn ref_id(index: usize) -> String {
    let letter = char::from(REF_ID_LETTERS[index % REF_ID_LETTERS.len()]);
    if index < REF_ID_LETTERS.len() {
        return letter.to_string();
    }

    let mut id = ref_id(index / REF_ID_LETTERS.len() - 1);
    id.push(letter);
    id
}

// Only the keys that decide the variant. Absent and null both read as None.
#[derive(Deserialize)]
struct QueryHeader {
    #[serde(rename = "expr")]
    expression: Option<String>,
    #[serde(rename = "intervalFactor")]
    interval_factor: Option<u32>,
    target: Option<String>,
    datasource: Option<String>,
}

pub fn decode_query(data: &[u8]) -> Result<Option<Query>, CodecError> {
    let value: Value =
        serde_json::from_slice(data).map_err(|e| CodecError::decode("query", e))?;
    decode_query_value(&value)
}

/// Decodes one entry of a panel's `targets` array.
///
/// Returns `Ok(None)` when no known query shape matches; such entries are
/// dropped by the panel codec and do not survive a round trip.
pub fn decode_query_value(value: &Value) -> Result<Option<Query>, CodecError> {
    let header = QueryHeader::deserialize(value).map_err(|e| CodecError::decode("query", e))?;

    let mut query = if header.expression.is_some() && header.interval_factor.is_some() {
        PrometheusQuery::deserialize(value)
            .map(Query::Prometheus)
            .map_err(|e| CodecError::decode("prometheus query", e))?
    } else if header.target.is_some() {
        GraphiteQuery::deserialize(value)
            .map(Query::Graphite)
            .map_err(|e| CodecError::decode("graphite query", e))?
    } else {
        tracing::debug!("Skipping query with no recognised fields");
        return Ok(None);
    };

    if let Some(datasource) = header.datasource {
        query.set_datasource(datasource);
    }
    Ok(Some(query))
}

#[derive(Serialize)]
#[serde(untagged)]
enum QueryFields<'a> {
    Prometheus(&'a PrometheusQuery),
    Graphite(&'a GraphiteQuery),
}

/// One flat entry of a panel's `targets` array.
#[derive(Serialize)]
pub(crate) struct QueryWire<'a> {
    #[serde(rename = "refid")]
    ref_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    datasource: Option<&'a str>,
    #[serde(flatten)]
    fields: QueryFields<'a>,
}

impl<'a> QueryWire<'a> {
    pub(crate) fn new(query: &'a Query, index: usize, placement: DatasourcePlacement) -> Self {
        let datasource = match placement {
            DatasourcePlacement::PerQuery => Some(query.datasource()).filter(|ds| !ds.is_empty()),
            DatasourcePlacement::Shared => None,
        };
        let fields = match query {
            Query::Prometheus(q) => QueryFields::Prometheus(q),
            Query::Graphite(q) => QueryFields::Graphite(q),
        };

        Self {
            ref_id: ref_id(index),
            datasource,
            fields,
        }
    }
}

pub fn encode_query(
    query: &Query,
    index: usize,
    placement: DatasourcePlacement,
) -> Result<Value, CodecError> {
    serde_json::to_value(QueryWire::new(query, index, placement))
        .map_err(|e| CodecError::encode("query", e))
}
