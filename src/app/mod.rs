// IncidentLog - app/mod.rs
//
// Application layer: the menu state machine and the interactive loop that
// connects it to the store and the renderer.

pub mod controller;
pub mod session;
