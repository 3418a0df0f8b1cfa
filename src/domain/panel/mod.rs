// Panel domain model - closed set of panel variants
pub mod graph;
pub mod singlestat;
pub mod text;

use serde::Serialize;

use crate::domain::general_options::GeneralOptions;
use crate::domain::query::Query;

pub use graph::{GraphPanel, GraphXAxis, GraphXAxisMode, GraphYAxis, GraphYaxesOptions};
pub use singlestat::{
    Gauge, RangeToTextMapping, SinglestatPanel, SparkLine, TimeRangeOptions, ValueMappingType,
    ValueMappings, ValueToTextMapping,
};
pub use text::{TextMode, TextPanel};

/// Wire value of a panel's `type` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelType {
    Text,
    Singlestat,
    Graph,
}

impl PanelType {
    /// Maps a wire tag to a known panel type, `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(PanelType::Text),
            "singlestat" => Some(PanelType::Singlestat),
            "graph" => Some(PanelType::Graph),
            _ => None,
        }
    }
}

/// Panels that issue data source queries.
pub trait QueryablePanel {
    fn queries(&self) -> &[Query];

    fn queries_mut(&mut self) -> &mut Vec<Query>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Text(TextPanel),
    Singlestat(SinglestatPanel),
    Graph(GraphPanel),
}

impl Panel {
    /// The type tag is derived from the variant, never stored.
    pub fn panel_type(&self) -> PanelType {
        match self {
            Panel::Text(_) => PanelType::Text,
            Panel::Singlestat(_) => PanelType::Singlestat,
            Panel::Graph(_) => PanelType::Graph,
        }
    }

    pub fn general_options(&self) -> &GeneralOptions {
        match self {
            Panel::Text(p) => &p.general,
            Panel::Singlestat(p) => &p.general,
            Panel::Graph(p) => &p.general,
        }
    }

    pub fn general_options_mut(&mut self) -> &mut GeneralOptions {
        match self {
            Panel::Text(p) => &mut p.general,
            Panel::Singlestat(p) => &mut p.general,
            Panel::Graph(p) => &mut p.general,
        }
    }

    pub fn as_queryable(&self) -> Option<&dyn QueryablePanel> {
        match self {
            Panel::Text(_) => None,
            Panel::Singlestat(p) => Some(p),
            Panel::Graph(p) => Some(p),
        }
    }

    pub fn as_queryable_mut(&mut self) -> Option<&mut dyn QueryablePanel> {
        match self {
            Panel::Text(_) => None,
            Panel::Singlestat(p) => Some(p),
            Panel::Graph(p) => Some(p),
        }
    }
}

impl From<TextPanel> for Panel {
    fn from(panel: TextPanel) -> Self {
        Panel::Text(panel)
    }
}

impl From<SinglestatPanel> for Panel {
    fn from(panel: SinglestatPanel) -> Self {
        Panel::Singlestat(panel)
    }
}

impl From<GraphPanel> for Panel {
    fn from(panel: GraphPanel) -> Self {
        Panel::Graph(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::PrometheusQuery;

    #[test]
    fn test_panel_type_tags() {
        assert_eq!(PanelType::from_tag("graph"), Some(PanelType::Graph));
        assert_eq!(PanelType::from_tag("singlestat"), Some(PanelType::Singlestat));
        assert_eq!(PanelType::from_tag("text"), Some(PanelType::Text));
        assert_eq!(PanelType::from_tag("table"), None);
        assert_eq!(PanelType::from_tag("Graph"), None);
    }

    #[test]
    fn test_text_panel_is_not_queryable() {
        let mut panel = Panel::from(TextPanel::new());
        assert!(panel.as_queryable().is_none());
        assert!(panel.as_queryable_mut().is_none());
    }

    #[test]
    fn test_queries_mutated_in_place() {
        let mut panel = Panel::from(GraphPanel::new());
        panel
            .as_queryable_mut()
            .unwrap()
            .queries_mut()
            .push(PrometheusQuery::new("up").into());
        panel.general_options_mut().title = "Uptime".to_string();

        assert_eq!(panel.as_queryable().unwrap().queries().len(), 1);
        assert_eq!(panel.general_options().title, "Uptime");
        assert_eq!(panel.panel_type(), PanelType::Graph);
    }
}
