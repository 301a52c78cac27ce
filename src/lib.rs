// IncidentLog - lib.rs
//
// Library entry point, exposing all modules for integration testing.
// The binary in `main.rs` only wires CLI, config and logging around them.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
