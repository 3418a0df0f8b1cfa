// Domain layer - Typed dashboard model
pub mod dashboard;
pub mod field;
pub mod general_options;
pub mod panel;
pub mod query;
