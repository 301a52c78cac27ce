// IncidentLog - core/record.rs
//
// Conversion between stored text lines and `Incident` values.
// Core layer: pure functions, no I/O.
//
// Line format: `<area>|<type>`. No header, no escaping.

use crate::core::model::Incident;
use crate::util::constants::FIELD_DELIMITER;

/// Strip leading and trailing space characters.
///
/// Only U+0020 is removed; tabs and other whitespace are kept. Returns an
/// empty slice when the input is made entirely of spaces.
pub fn trim(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Parse one stored line into an incident.
///
/// The line is split at the first delimiter and both halves are trimmed.
/// Lines without a delimiter return `None`. Empty halves are accepted as-is;
/// only the add flow enforces non-empty fields.
pub fn parse_line(line: &str) -> Option<Incident> {
    let (area, kind) = line.split_once(FIELD_DELIMITER)?;
    Some(Incident::new(trim(area), trim(kind)))
}

/// Render an incident as a stored line, without the line terminator.
pub fn serialize(incident: &Incident) -> String {
    let mut line = String::with_capacity(incident.area.len() + incident.kind.len() + 1);
    line.push_str(&incident.area);
    line.push(FIELD_DELIMITER);
    line.push_str(&incident.kind);
    line
}

/// Drop a trailing `\n` or `\r\n` from a line read with its terminator.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Returns true if either field contains the delimiter and so will not
/// read back as the same incident.
pub fn contains_delimiter(incident: &Incident) -> bool {
    incident.area.contains(FIELD_DELIMITER) || incident.kind.contains(FIELD_DELIMITER)
}
