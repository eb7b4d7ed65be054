// TimeLog Viewer - core/export.rs
//
// CSV and JSON export of the loaded log entries (never the aggregates).
// Core layer: writes to any Write trait object.

use crate::core::model::LogEntry;
use crate::util::constants::TABLE_COLUMNS;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export entries to CSV.
///
/// The header row matches the table columns: Employee, Date, Start Time,
/// End Time, Task, Project.
pub fn export_csv<W: Write>(
    entries: &[LogEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_error = |source| ExportError::Csv {
        path: export_path.to_path_buf(),
        source,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(TABLE_COLUMNS).map_err(csv_error)?;

    let mut count = 0;
    for entry in entries {
        csv_writer.write_record(entry.columns()).map_err(csv_error)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export entries to JSON (array of objects, backend field names).
pub fn export_json<W: Write>(
    entries: &[LogEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, entries).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(entries.len())
}
