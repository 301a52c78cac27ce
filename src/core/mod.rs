// IncidentLog - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: ui, platform, or app.

pub mod export;
pub mod filter;
pub mod model;
pub mod record;
