// IncidentLog - platform/store.rs
//
// Flat-file incident store.
// Every call opens and closes the file; nothing is cached between calls,
// and there is no locking against other writers.

use crate::core::model::Incident;
use crate::core::record;
use crate::util::error::StoreError;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Read every well-formed incident from `path`, in file order.
///
/// A missing file reads as an empty store. Lines without a delimiter are
/// skipped. Invalid UTF-8 is replaced rather than rejected.
pub fn load_all(path: &Path) -> Result<Vec<Incident>, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Store file not found; no incidents");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut incidents = Vec::new();
    let mut line_number: u64 = 0;
    let mut skipped: usize = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let text = String::from_utf8_lossy(&buf);
        match record::parse_line(record::strip_line_ending(&text)) {
            Some(incident) => incidents.push(incident),
            None => {
                skipped += 1;
                tracing::debug!(
                    path = %path.display(),
                    line_number,
                    "Skipping line without delimiter"
                );
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        loaded = incidents.len(),
        skipped,
        "Store loaded"
    );
    Ok(incidents)
}

/// Append one incident to `path`, creating the file if needed.
///
/// The line is written with a single `write_all` and flushed before
/// returning.
pub fn append(path: &Path, incident: &Incident) -> Result<(), StoreError> {
    if record::contains_delimiter(incident) {
        tracing::warn!(
            path = %path.display(),
            "Incident field contains the delimiter; it will not read back unchanged"
        );
    }

    let append_err = |e: io::Error| StoreError::Append {
        path: path.to_path_buf(),
        source: e,
    };

    let mut line = record::serialize(incident);
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(append_err)?;
    file.write_all(line.as_bytes()).map_err(append_err)?;
    file.flush().map_err(append_err)?;

    tracing::info!(path = %path.display(), "Incident appended");
    Ok(())
}
