// IncidentLog - ui/theme.rs
//
// Colour scheme for terminal output.
// No dependencies on app state or business logic.

use crossterm::style::{Color, Stylize};

/// Headings ("Incident Reporting Menu", "Reported Incidents:").
pub const HEADING: Color = Color::Rgb {
    r: 139,
    g: 27,
    b: 58,
}; // Crimson

/// Incident area in listings.
pub const AREA: Color = Color::Rgb {
    r: 220,
    g: 188,
    b: 65,
}; // Mustard

/// Incident type in listings, and success notices.
pub const INCIDENT_TYPE: Color = Color::Rgb {
    r: 111,
    g: 224,
    b: 193,
}; // Aquamarine

/// Success notices share the incident type colour.
pub const SUCCESS: Color = INCIDENT_TYPE;

/// Wrap `text` in colour escape codes, or return it unchanged when colour
/// is disabled.
pub fn paint(text: &str, colour: Color, enabled: bool) -> String {
    if enabled {
        text.with(colour).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_disabled_is_plain() {
        assert_eq!(paint("Elm St", AREA, false), "Elm St");
    }

    #[test]
    fn test_paint_enabled_adds_escapes() {
        let painted = paint("Elm St", AREA, true);
        assert!(painted.contains("Elm St"));
        // crossterm suppresses escapes itself when NO_COLOR is set.
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(painted.starts_with('\u{1b}'), "got: {painted:?}");
        }
    }
}
