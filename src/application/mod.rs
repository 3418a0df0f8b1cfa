// Application layer - Use cases built on the codec
pub mod dashboard_service;
