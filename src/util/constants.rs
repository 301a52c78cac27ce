// IncidentLog - util/constants.rs
//
// Single source of truth for all named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "IncidentLog";

/// Application identifier used for config directories.
pub const APP_ID: &str = "IncidentLog";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Storage
// =============================================================================

/// Store file used when neither the CLI nor config.toml names one.
/// Relative, so it resolves against the working directory.
pub const DEFAULT_STORE_FILE: &str = "incidents.txt";

/// Separator between the area and type fields of a stored line.
///
/// Fields are never escaped: a value containing this character will be
/// split at the first occurrence when read back.
pub const FIELD_DELIMITER: char = '|';

// =============================================================================
// Interactive menu
// =============================================================================

/// Menu choice: view all incidents.
pub const MENU_VIEW: i64 = 1;

/// Menu choice: add a new incident.
pub const MENU_ADD: i64 = 2;

/// Menu choice: filter incidents.
pub const MENU_FILTER: i64 = 3;

/// Menu choice: leave the program.
pub const MENU_EXIT: i64 = 4;

/// Filter option selecting the area field.
pub const FILTER_BY_AREA: i64 = 1;

/// Filter option selecting the incident type field.
pub const FILTER_BY_TYPE: i64 = 2;

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Kept at `warn` because stderr shares the terminal
/// with the interactive menu.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Environment variable that disables coloured output when set.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
