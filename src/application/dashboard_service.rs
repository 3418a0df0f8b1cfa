// Dashboard service - Use cases over panels and dashboard documents
use anyhow::Context;
use serde_json::Value;

use crate::domain::dashboard::{Dashboard, DashboardRow};
use crate::domain::panel::Panel;
use crate::infrastructure::error::CodecError;
use crate::infrastructure::panel_codec::{decode_panel, decode_panel_value, encode_panel};

#[derive(Debug, Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    /// Re-encodes one panel document. `None` when the panel type is unknown.
    pub fn normalize_panel(&self, body: &[u8]) -> anyhow::Result<Option<Value>> {
        let Some(panel) = decode_panel(body)? else {
            return Ok(None);
        };
        Ok(Some(encode_panel(&panel)?))
    }

    pub fn decode_dashboard(&self, body: &[u8]) -> anyhow::Result<Dashboard> {
        serde_json::from_slice(body)
            .map_err(|e| CodecError::decode("dashboard", e))
            .map_err(Into::into)
    }

    /// Typed panels of a row, skipping slots whose type is not recognised.
    pub fn row_panels(&self, row: &DashboardRow) -> anyhow::Result<Vec<Panel>> {
        let mut panels = Vec::with_capacity(row.panels.len());
        for (position, slot) in row.panels.iter().enumerate() {
            if let Some(panel) = decode_panel_value(slot)
                .with_context(|| format!("panel {} of row {:?}", position, row.title))?
            {
                panels.push(panel);
            }
        }
        Ok(panels)
    }

    pub fn push_panel(&self, row: &mut DashboardRow, panel: &Panel) -> anyhow::Result<()> {
        row.panels.push(encode_panel(panel)?);
        Ok(())
    }

    /// Re-encodes every recognised panel of every row. Slots of unknown type
    /// are left untouched.
    pub fn normalize_dashboard(&self, body: &[u8]) -> anyhow::Result<Dashboard> {
        let mut dashboard = self.decode_dashboard(body)?;

        let mut normalized = 0;
        let mut kept = 0;
        for row in &mut dashboard.rows {
            for (position, slot) in row.panels.iter_mut().enumerate() {
                let decoded = decode_panel_value(slot)
                    .with_context(|| format!("panel {} of row {:?}", position, row.title))?;
                match decoded {
                    Some(panel) => {
                        *slot = encode_panel(&panel)?;
                        normalized += 1;
                    }
                    None => kept += 1,
                }
            }
        }

        tracing::debug!(
            "Normalized dashboard {:?}: {} panels re-encoded, {} passed through",
            dashboard.title,
            normalized,
            kept
        );
        Ok(dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::panel::{PanelType, TextPanel};
    use crate::domain::query::{PrometheusQuery, QueryTarget};
    use crate::infrastructure::query_codec::MIXED_DATASOURCE;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn dashboard_json() -> Value {
        json!({
            "title": "Service",
            "uid": "svc",
            "tags": ["prod"],
            "rows": [{
                "title": "Overview",
                "panels": [
                    {
                        "type": "graph",
                        "title": "Requests",
                        "yaxes": [{"format": "reqps"}, {"format": "short"}],
                        "targets": [
                            {"refId": "X", "expr": "sum(rate(req[1m]))", "intervalFactor": 2, "datasource": "prom-a"},
                            {"refId": "Y", "expr": "sum(rate(err[1m]))", "intervalFactor": 2, "datasource": "prom-b"}
                        ]
                    },
                    {"type": "heatmap", "title": "Kept as is", "custom": 1}
                ]
            }]
        })
    }

    #[test]
    fn test_normalize_panel() {
        let service = DashboardService::new();
        let body = br#"{"type": "singlestat", "datasource": "prom", "targets": [{"expr": "up", "intervalFactor": 1}]}"#;

        let got = service.normalize_panel(body).unwrap().unwrap();
        assert_eq!(got["type"], "singlestat");
        assert_eq!(got["datasource"], "prom");
        assert_eq!(got["targets"][0]["refid"], "A");
        assert!(got["targets"][0].get("datasource").is_none());
    }

    #[test]
    fn test_normalize_unknown_panel() {
        let service = DashboardService::new();
        assert!(service.normalize_panel(br#"{"type": "table"}"#).unwrap().is_none());
    }

    #[test]
    fn test_normalize_dashboard_keeps_unknown_slots() {
        let service = DashboardService::new();
        let body = serde_json::to_vec(&dashboard_json()).unwrap();

        let dashboard = service.normalize_dashboard(&body).unwrap();
        let panels = &dashboard.rows[0].panels;

        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0]["datasource"], MIXED_DATASOURCE);
        assert_eq!(panels[0]["targets"][1]["refid"], "B");
        assert_eq!(panels[0]["targets"][1]["datasource"], "prom-b");
        assert_eq!(panels[1], json!({"type": "heatmap", "title": "Kept as is", "custom": 1}));
        assert_eq!(dashboard.tags(), ["prod"]);
    }

    #[test]
    fn test_row_panels_skips_unknown() {
        let service = DashboardService::new();
        let body = serde_json::to_vec(&dashboard_json()).unwrap();
        let dashboard = service.decode_dashboard(&body).unwrap();

        let panels = service.row_panels(&dashboard.rows[0]).unwrap();
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].panel_type(), PanelType::Graph);
        assert_eq!(panels[0].as_queryable().unwrap().queries()[1].datasource(), "prom-b");
    }

    #[test]
    fn test_bad_slot_fails_with_context() {
        let service = DashboardService::new();
        let body = serde_json::to_vec(&json!({
            "rows": [{"title": "Broken", "panels": [{"type": "graph", "yaxes": []}]}]
        }))
        .unwrap();

        let err = service.normalize_dashboard(&body).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("panel 0 of row \"Broken\""), "{}", message);
        assert!(message.contains("exactly 2"), "{}", message);
    }

    #[test]
    fn test_push_panel_then_read_back() {
        let service = DashboardService::new();
        let mut dashboard = Dashboard::new("Built");
        dashboard.rows.push(DashboardRow::default());

        let mut text = TextPanel::new();
        text.content = "hello".to_string();
        let mut graph = crate::domain::panel::GraphPanel::new();
        graph.queries.push(PrometheusQuery::new("up").with_datasource("prom").into());

        let row = &mut dashboard.rows[0];
        service.push_panel(row, &text.clone().into()).unwrap();
        service.push_panel(row, &graph.clone().into()).unwrap();

        let panels = service.row_panels(row).unwrap();
        assert_eq!(panels, vec![Panel::from(text), Panel::from(graph)]);
    }

    #[test]
    fn test_malformed_dashboard() {
        let service = DashboardService::new();
        assert!(service.decode_dashboard(b"{\"rows\": 3}").is_err());
    }
}
