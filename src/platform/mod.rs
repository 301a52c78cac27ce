// IncidentLog - platform/mod.rs
//
// Platform abstraction layer: filesystem store and configuration.
// Must NOT depend on: app, ui.

pub mod config;
pub mod store;
