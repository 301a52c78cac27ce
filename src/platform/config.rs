// IncidentLog - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Resolved platform paths for IncidentLog configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/incidentlog/ or %APPDATA%\IncidentLog\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[store]` section.
    pub store: StoreSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[store]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct StoreSection {
    /// Incident store file. Relative paths resolve against the working directory.
    pub path: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Colour the menu and incident listings.
    pub color: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Store file from `[store] path`. None = use the default file name.
    pub store_path: Option<PathBuf>,

    /// Whether coloured output is allowed.
    pub color: bool,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,

    /// Log file path.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            color: true,
            log_level: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Store file to use when the CLI does not override it.
    pub fn store_path_or_default(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_STORE_FILE))
    }
}

/// Read and parse config.toml. `Ok(None)` means there is no config file.
fn read_raw_config(config_path: &Path) -> Result<Option<RawConfig>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    toml::from_str::<RawConfig>(&content)
        .map(Some)
        .map_err(|e| ConfigError::TomlParse {
            path: config_path.to_path_buf(),
            source: e,
        })
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    let raw = match read_raw_config(&config_path) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
            return (AppConfig::default(), warnings);
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Store: path --
    if let Some(ref path) = raw.store.path {
        if path.trim().is_empty() {
            warnings.push(
                ConfigError::InvalidValue {
                    field: "[store] path".to_string(),
                    value: path.clone(),
                    expected: format!(
                        "a non-empty file path. Using default ({})",
                        constants::DEFAULT_STORE_FILE
                    ),
                }
                .to_string(),
            );
        } else {
            config.store_path = Some(PathBuf::from(path));
        }
    }

    // -- UI: color --
    if let Some(color) = raw.ui.color {
        config.color = color;
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(
                ConfigError::InvalidValue {
                    field: "[logging] level".to_string(),
                    value: level.clone(),
                    expected: format!(
                        "one of {}. Using default ({})",
                        constants::VALID_LOG_LEVELS.join(", "),
                        constants::DEFAULT_LOG_LEVEL
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(PathBuf::from(file));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Show config warnings to the user and record them in the log.
///
/// Warnings are written to `out` directly because the log sink may be a
/// file or filtered above `warn`.
pub fn report_warnings<W: Write>(warnings: &[String], mut out: W) -> io::Result<()> {
    for warning in warnings {
        tracing::warn!(warning = %warning, "Config warning");
        writeln!(out, "Warning: {warning}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(constants::CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert!(config.color);
        assert_eq!(
            config.store_path_or_default(),
            PathBuf::from(constants::DEFAULT_STORE_FILE)
        );
    }

    #[test]
    fn test_valid_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[store]
path = "/var/lib/incidents.txt"

[ui]
color = false

[logging]
level = "DEBUG"
file = "incidentlog.log"

[unknown]
ignored = 1
"#,
        );

        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(
            config.store_path_or_default(),
            PathBuf::from("/var/lib/incidents.txt")
        );
        assert!(!config.color);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("incidentlog.log")));
    }

    #[test]
    fn test_invalid_values_warn_and_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[store]
path = "   "

[logging]
level = "verbose"
file = ""
"#,
        );

        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 2, "got: {warnings:?}");
        assert!(warnings[0].contains("[store] path"));
        assert!(warnings[1].contains("verbose"));
        assert_eq!(config.store_path, None);
        assert_eq!(config.log_level, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_unparseable_config_warns_and_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[ui\ncolor = ");

        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Using defaults"));
        assert!(config.color);
    }

    #[test]
    fn test_warnings_reach_the_user_directly() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "[store]\npath = \"\"\n\n[logging]\nlevel = \"error\"\nfile = \"incidentlog.log\"\n",
        );

        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.log_level.as_deref(), Some("error"));
        assert_eq!(warnings.len(), 1);

        let mut out = Vec::new();
        report_warnings(&warnings, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Warning: "), "got: {text:?}");
        assert!(text.contains("[store] path"));
        assert!(text.contains(constants::DEFAULT_STORE_FILE));
    }

    #[test]
    fn test_no_warnings_writes_nothing() {
        let mut out = Vec::new();
        report_warnings(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_wrong_type_is_a_parse_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[ui]\ncolor = \"yes\"\n");

        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(config.color);
    }
}
