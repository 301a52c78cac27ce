// IncidentLog - core/export.rs
//
// CSV and JSON export of incidents.
// Core layer: writes to any Write trait object.

use crate::core::model::Incident;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Pick the format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Export incidents to CSV format.
///
/// Writes: area, type
pub fn export_csv<W: Write>(
    incidents: &[Incident],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    csv_writer.write_record(["area", "type"]).map_err(csv_err)?;

    let mut count = 0;
    for incident in incidents {
        csv_writer
            .write_record([incident.area.as_str(), incident.kind.as_str()])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export incidents to JSON format (array of objects).
///
/// The writer is flushed before returning so buffered write failures
/// surface as `ExportError::Io`.
pub fn export_json<W: Write>(
    incidents: &[Incident],
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, incidents).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(incidents.len())
}

/// Create `export_path` and write `incidents` to it in the format its
/// extension names. Returns the number of incidents written.
pub fn export_to_file(incidents: &[Incident], export_path: &Path) -> Result<usize, ExportError> {
    let format = ExportFormat::from_path(export_path)?;
    let file = std::fs::File::create(export_path).map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    let writer = std::io::BufWriter::new(file);

    let count = match format {
        ExportFormat::Csv => export_csv(incidents, writer, export_path)?,
        ExportFormat::Json => export_json(incidents, writer, export_path)?,
    };

    tracing::info!(
        path = %export_path.display(),
        format = ?format,
        count,
        "Incidents exported"
    );
    Ok(count)
}
