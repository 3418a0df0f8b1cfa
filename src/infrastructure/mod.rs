// Infrastructure layer - JSON codec and configuration
pub mod config;
pub mod error;
pub mod panel_codec;
pub mod query_codec;
