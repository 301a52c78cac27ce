// IncidentLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Either a one-shot export or the interactive menu on stdin/stdout

use clap::Parser;
use incidentlog::app::controller::Controller;
use incidentlog::core::export;
use incidentlog::platform::{config, store};
use incidentlog::ui::render::TerminalRenderer;
use incidentlog::util::{self, constants, error::Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// IncidentLog - Record and search local incident reports.
///
/// Incidents are stored one per line as `area|type` in a plain text file.
#[derive(Parser, Debug)]
#[command(name = "IncidentLog", version, about)]
struct Cli {
    /// Incident store file (overrides [store] path in config.toml).
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Export all incidents to a .csv or .json file and exit.
    #[arg(short = 'e', long = "export")]
    export: Option<PathBuf>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Disable coloured output.
    #[arg(long = "no-color")]
    no_color: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| config::PlatformPaths::resolve().config_dir);
    let (app_config, config_warnings) = config::load_config(&config_dir);

    util::logging::init(
        cli.debug,
        app_config.log_level.as_deref(),
        app_config.log_file.as_deref(),
    );

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "IncidentLog starting"
    );

    // Warnings raised before the subscriber existed are replayed here,
    // and always shown on stderr whatever the log level or sink.
    if let Err(e) = config::report_warnings(&config_warnings, std::io::stderr().lock()) {
        tracing::warn!(error = %e, "Could not print config warnings");
    }

    // Store path: CLI override > config.toml > default file name
    let store_path = cli
        .file
        .clone()
        .unwrap_or_else(|| app_config.store_path_or_default());

    let result = match cli.export {
        Some(ref export_path) => run_export(&store_path, export_path),
        None => {
            let colour = !cli.no_color
                && app_config.color
                && std::env::var_os(constants::NO_COLOR_ENV).is_none()
                && std::io::stdout().is_terminal();
            run_interactive(store_path, colour)
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "IncidentLog failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_interactive(store_path: PathBuf, colour: bool) -> Result<()> {
    let stdin = std::io::stdin().lock();
    let renderer = TerminalRenderer::new(std::io::stdout().lock(), colour);
    Controller::new(stdin, renderer, store_path).run()
}

fn run_export(store_path: &Path, export_path: &Path) -> Result<()> {
    let incidents = store::load_all(store_path)?;
    let count = export::export_to_file(&incidents, export_path)?;
    println!(
        "Exported {count} incident(s) from '{}' to '{}'.",
        store_path.display(),
        export_path.display()
    );
    Ok(())
}
