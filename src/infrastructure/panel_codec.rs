// Panel codec - type-tag dispatch and flattening of field groups
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::domain::general_options::GeneralOptions;
use crate::domain::panel::{GraphPanel, Panel, PanelType, SinglestatPanel, TextPanel};
use crate::domain::query::{Query, QueryTarget};
use crate::infrastructure::error::CodecError;
use crate::infrastructure::query_codec::{
    DatasourcePlacement, MIXED_DATASOURCE, QueryWire, decode_query_value,
};

#[derive(Deserialize)]
struct PanelTag {
    #[serde(rename = "type")]
    tag: Option<String>,
}

#[derive(Deserialize)]
struct PanelTargets {
    datasource: Option<String>,
    targets: Option<Vec<Value>>,
}

pub fn decode_panel(data: &[u8]) -> Result<Option<Panel>, CodecError> {
    let value: Value =
        serde_json::from_slice(data).map_err(|e| CodecError::decode("panel", e))?;
    decode_panel_value(&value)
}

/// Decodes one panel object.
///
/// Returns `Ok(None)` for a missing or unrecognized `type` tag. The variant
/// fields, the general options and the query list are each read in their own
/// pass over the same object.
pub fn decode_panel_value(value: &Value) -> Result<Option<Panel>, CodecError> {
    let head = PanelTag::deserialize(value).map_err(|e| CodecError::decode("panel", e))?;
    let Some(panel_type) = head.tag.as_deref().and_then(PanelType::from_tag) else {
        tracing::debug!("Skipping panel with unrecognised type {:?}", head.tag);
        return Ok(None);
    };

    let mut panel = match panel_type {
        PanelType::Text => Panel::Text(decode_part::<TextPanel>(value, "text panel")?),
        PanelType::Singlestat => {
            Panel::Singlestat(decode_part::<SinglestatPanel>(value, "singlestat panel")?)
        }
        PanelType::Graph => Panel::Graph(decode_part::<GraphPanel>(value, "graph panel")?),
    };

    *panel.general_options_mut() = decode_part::<GeneralOptions>(value, "general options")?;

    if let Some(queryable) = panel.as_queryable_mut() {
        *queryable.queries_mut() = decode_queries(value)?;
    }

    Ok(Some(panel))
}

fn decode_part<T: DeserializeOwned>(value: &Value, what: &'static str) -> Result<T, CodecError> {
    T::deserialize(value).map_err(|e| CodecError::decode(what, e))
}

// Unrecognized targets are dropped, so survivors are re-indexed from zero.
// Queries without their own datasource inherit the panel's unless it is mixed.
fn decode_queries(value: &Value) -> Result<Vec<Query>, CodecError> {
    let targets = decode_part::<PanelTargets>(value, "panel targets")?;
    let inherited = targets
        .datasource
        .filter(|datasource| datasource != MIXED_DATASOURCE);

    let mut queries = Vec::new();
    for target in targets.targets.unwrap_or_default() {
        let Some(mut query) = decode_query_value(&target)? else {
            continue;
        };
        if query.datasource().is_empty() {
            if let Some(datasource) = &inherited {
                query.set_datasource(datasource.clone());
            }
        }
        queries.push(query);
    }
    Ok(queries)
}

pub fn encode_panel(panel: &Panel) -> Result<Value, CodecError> {
    serde_json::to_value(panel).map_err(|e| CodecError::encode("panel", e))
}

#[derive(Serialize)]
#[serde(untagged)]
enum PanelFields<'a> {
    Text(&'a TextPanel),
    Singlestat(&'a SinglestatPanel),
    Graph(&'a GraphPanel),
}

#[derive(Serialize)]
struct QueriesBlock<'a> {
    #[serde(skip_serializing_if = "String::is_empty")]
    datasource: String,
    targets: Vec<QueryWire<'a>>,
}

impl<'a> QueriesBlock<'a> {
    fn new(queries: &'a [Query]) -> Self {
        let placement = DatasourcePlacement::for_queries(queries);
        let datasource = match placement {
            DatasourcePlacement::PerQuery => MIXED_DATASOURCE.to_string(),
            DatasourcePlacement::Shared => queries
                .first()
                .map(|query| query.datasource().to_string())
                .unwrap_or_default(),
        };
        let targets = queries
            .iter()
            .enumerate()
            .map(|(index, query)| QueryWire::new(query, index, placement))
            .collect();

        Self {
            datasource,
            targets,
        }
    }
}

/// Every field group lands as a sibling key of one flat object.
#[derive(Serialize)]
struct PanelWire<'a> {
    #[serde(rename = "type")]
    panel_type: PanelType,
    #[serde(flatten)]
    fields: PanelFields<'a>,
    #[serde(flatten)]
    general: &'a GeneralOptions,
    #[serde(flatten)]
    queries: Option<QueriesBlock<'a>>,
}

impl Serialize for Panel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = match self {
            Panel::Text(p) => PanelFields::Text(p),
            Panel::Singlestat(p) => PanelFields::Singlestat(p),
            Panel::Graph(p) => PanelFields::Graph(p),
        };
        let queries = self
            .as_queryable()
            .map(|queryable| QueriesBlock::new(queryable.queries()));

        let wire = PanelWire {
            panel_type: self.panel_type(),
            fields,
            general: self.general_options(),
            queries,
        };
        wire.serialize(serializer)
    }
}

/// Decodes a panel embedded in a larger document; unrecognized types are an
/// error here because there is no slot to leave empty.
impl<'de> Deserialize<'de> for Panel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let value = Value::deserialize(deserializer)?;
        match decode_panel_value(&value) {
            Ok(Some(panel)) => Ok(panel),
            Ok(None) => Err(D::Error::custom("unrecognised panel type")),
            Err(e) => Err(D::Error::custom(e)),
        }
    }
}
