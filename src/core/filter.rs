// IncidentLog - core/filter.rs
//
// Substring filter for incidents.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Field, Incident};

/// A single filter: one field and the text it must contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    /// Field the query is matched against.
    pub field: Field,

    /// Literal, case-sensitive substring. Empty matches every incident.
    pub text: String,
}

impl FilterQuery {
    pub fn new(field: Field, text: impl Into<String>) -> Self {
        Self {
            field,
            text: text.into(),
        }
    }

    /// Check if a single incident matches.
    pub fn matches(&self, incident: &Incident) -> bool {
        self.field.value_of(incident).contains(self.text.as_str())
    }
}

/// Keep the incidents whose selected field contains `query`, in order.
pub fn filter(incidents: Vec<Incident>, field: Field, query: &str) -> Vec<Incident> {
    apply_filter(incidents, &FilterQuery::new(field, query))
}

/// Apply a prepared query, preserving input order.
pub fn apply_filter(incidents: Vec<Incident>, query: &FilterQuery) -> Vec<Incident> {
    incidents
        .into_iter()
        .filter(|incident| query.matches(incident))
        .collect()
}
