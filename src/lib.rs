// Typed dashboard model and its polymorphic JSON codec
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::dashboard::{Dashboard, DashboardRow, DashboardStyle};
pub use domain::general_options::GeneralOptions;
pub use domain::panel::{GraphPanel, Panel, PanelType, QueryablePanel, SinglestatPanel, TextPanel};
pub use domain::query::{GraphiteQuery, PrometheusQuery, Query, QueryTarget};
pub use infrastructure::error::CodecError;
pub use infrastructure::panel_codec::{decode_panel, encode_panel};
pub use infrastructure::query_codec::{DatasourcePlacement, decode_query, encode_query, ref_id};
