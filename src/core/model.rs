// IncidentLog - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.

use serde::Serialize;

// =============================================================================
// Incident
// =============================================================================

/// A single reported incident.
///
/// Values are never shared: every load of the store produces fresh copies,
/// and an incident built by the add flow is owned by that flow until it is
/// appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Incident {
    /// Where the incident happened (e.g. "Main Street").
    pub area: String,

    /// What kind of incident it is (e.g. "Broken streetlight").
    #[serde(rename = "type")]
    pub kind: String,
}

impl Incident {
    pub fn new(area: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            kind: kind.into(),
        }
    }
}

// =============================================================================
// Field selector
// =============================================================================

/// Which incident field a filter query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Area,
    Type,
}

impl Field {
    /// Returns the selected field's value for `incident`.
    pub fn value_of<'a>(&self, incident: &'a Incident) -> &'a str {
        match self {
            Field::Area => &incident.area,
            Field::Type => &incident.kind,
        }
    }

    /// Human-readable label for prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Area => "area",
            Field::Type => "incident type",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
