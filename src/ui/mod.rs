// IncidentLog - ui/mod.rs
//
// Terminal presentation layer.
// Depends on app::session for prompt selection and core::model for listings.

pub mod render;
pub mod theme;
